//! Early-cutoff strategies consulted before a node is expanded.
//!
//! The search asks [`Pruning::should_probe`] first; only then does it pay for a static
//! evaluation and hand it to [`Pruning::prunes`]. A strategy that never probes gives a plain
//! exhaustive minimax.

use std::fmt::Debug;

pub trait Pruning: Debug + Send + Sync {
    /// Whether a node with `depth` plies left, in a search rooted at `max_depth`, is probed.
    fn should_probe(&self, depth: u8, max_depth: u8) -> bool;

    /// Whether the probe result `eval` ends the node. The node then scores `eval`.
    fn prunes(&self, reference: i32, eval: i32) -> bool;
}

/// Returns the static evaluation of deep nodes that already beat the reference score.
///
/// Nodes more than `depth_offset` plies below the root are probed and cut when
/// `reference - eval < -margin`, i.e. when the position scores more than `margin` above the
/// reference in White's favour, whichever side is to move. This is not alpha-beta: it can
/// discard the line that exhaustive search would pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginCutoff {
    pub margin: i32,
    pub depth_offset: u8,
}

impl Default for MarginCutoff {
    fn default() -> Self {
        Self {
            margin: 10,
            depth_offset: 2,
        }
    }
}

impl Pruning for MarginCutoff {
    fn should_probe(&self, depth: u8, max_depth: u8) -> bool {
        max_depth.saturating_sub(depth) > self.depth_offset
    }

    fn prunes(&self, reference: i32, eval: i32) -> bool {
        reference.saturating_sub(eval) < -self.margin
    }
}

/// Never prunes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exhaustive;

impl Pruning for Exhaustive {
    fn should_probe(&self, _depth: u8, _max_depth: u8) -> bool {
        false
    }

    fn prunes(&self, _reference: i32, _eval: i32) -> bool {
        false
    }
}
