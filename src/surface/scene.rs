use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::{
    animation::props::{Prop, PropValue},
    foundation::ids::NodeId,
    surface::Surface,
};

#[derive(Clone, Debug, Default)]
struct NodeState {
    name: String,
    props: BTreeMap<Prop, PropValue>,
    attached: bool,
    removed: bool,
    writes: u64,
}

/// In-memory arena of named nodes implementing [`Surface`].
///
/// Used by the simulator binary and tests; a browser host would implement [`Surface`] over
/// its own element handles instead.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, NodeState>,
}

impl SceneGraph {
    /// Empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a new node and return its handle.
    pub fn insert(&mut self, name: impl Into<String>) -> NodeId {
        self.nodes.insert(NodeState {
            name: name.into(),
            attached: true,
            ..NodeState::default()
        })
    }

    /// Mount `count` nodes named `{prefix}-{i}`.
    pub fn insert_many(&mut self, prefix: &str, count: usize) -> Vec<NodeId> {
        (0..count)
            .map(|i| self.insert(format!("{prefix}-{i}")))
            .collect()
    }

    /// Unmount `node`. Later writes to it are dropped.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.attached = false;
        }
    }

    /// Current value of `prop` on `node`.
    pub fn value(&self, node: NodeId, prop: Prop) -> Option<PropValue> {
        self.nodes.get(node).and_then(|n| n.props.get(&prop).copied())
    }

    /// Current scalar value of `prop` on `node`.
    pub fn scalar(&self, node: NodeId, prop: Prop) -> Option<f64> {
        self.value(node, prop).and_then(PropValue::as_scalar)
    }

    /// Node name given at insertion.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|n| n.name.as_str())
    }

    /// Return `true` once [`Surface::remove`] was called for `node`.
    pub fn is_removed(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| n.removed)
    }

    /// Number of property writes accepted for `node`.
    pub fn writes(&self, node: NodeId) -> u64 {
        self.nodes.get(node).map_or(0, |n| n.writes)
    }
}

impl Surface for SceneGraph {
    fn apply(&mut self, node: NodeId, prop: Prop, value: PropValue) {
        let Some(n) = self.nodes.get_mut(node) else {
            return;
        };
        if !n.attached || n.removed {
            return;
        }
        n.props.insert(prop, value);
        n.writes += 1;
    }

    fn remove(&mut self, node: NodeId) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.removed = true;
        }
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| n.attached && !n.removed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/scene.rs"]
mod tests;
