//! Rendering boundary.
//!
//! The presentation layer owns the visual nodes; controllers only push property values
//! through [`Surface`] using handles they were given at construction.

pub(crate) mod scene;

use crate::{
    animation::props::{Prop, PropValue},
    foundation::ids::NodeId,
};

/// Sink for visual property mutations.
pub trait Surface {
    /// Set `prop` on `node`.
    fn apply(&mut self, node: NodeId, prop: Prop, value: PropValue);

    /// Permanently take `node` out of the visual tree.
    fn remove(&mut self, node: NodeId);

    /// Return `false` once `node` is unmounted; detached nodes are never animated.
    fn is_attached(&self, _node: NodeId) -> bool {
        true
    }
}
