use std::fmt;

use typed_builder::TypedBuilder;

use crate::point::Point2D;

/// The public identifier of a node. Node ids start at 1 and follow the arena order.
#[derive(Debug, Default, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(f: u32) -> Self {
        Self(f)
    }
}

impl NodeId {
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Position of a node inside the arena of its field. Stable for the lifetime of the field
/// and identical across snapshots of the same field.
pub type NodeIdx = usize;

/// A range measurement from a node to a reference node that was an anchor when the
/// measurement was taken.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborEntry {
    pub node: NodeIdx,
    pub distance: f64,
}

impl NeighborEntry {
    pub fn new(node: NodeIdx, distance: f64) -> Self {
        Self { node, distance }
    }
}

/// Range measurements of a node, kept sorted by measured distance.
///
/// Entries with equal distance keep their insertion order and a reference node appears
/// at most once.
#[derive(Clone, Debug, Default)]
pub struct NeighborSet {
    entries: Vec<NeighborEntry>,
}

impl NeighborSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the entry after every entry whose distance is not greater.
    /// Returns false when the reference node is already present.
    pub fn insert(&mut self, entry: NeighborEntry) -> bool {
        if self.contains(entry.node) {
            return false;
        }
        let position = self
            .entries
            .partition_point(|existing| existing.distance <= entry.distance);
        self.entries.insert(position, entry);
        true
    }

    pub fn contains(&self, node: NodeIdx) -> bool {
        self.entries.iter().any(|entry| entry.node == node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NeighborEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[NeighborEntry] {
        &self.entries
    }

    /// The three entries with the smallest measured distance, if there are three.
    pub fn closest_three(&self) -> Option<[NeighborEntry; 3]> {
        match self.entries.as_slice() {
            [first, second, third, ..] => Some([*first, *second, *third]),
            _ => None,
        }
    }
}

/// A sensor node of the field.
#[derive(Clone, Debug, TypedBuilder)]
pub struct Node {
    pub id: NodeId,
    pub position: Point2D,
    #[builder(default)]
    pub estimate: Option<Point2D>,
    #[builder(default)]
    pub error: f64,
    #[builder(default)]
    pub is_anchor: bool,
    #[builder(default)]
    pub cost: u64,
    #[builder(default)]
    pub neighbors: NeighborSet,
}

impl Node {
    /// A node can be trilaterated once it holds three range measurements.
    pub fn has_enough_neighbors(&self) -> bool {
        self.neighbors.len() >= 3
    }

    /// Marks the node as localized at the given estimate and turns it into an anchor.
    pub fn promote(&mut self, estimate: Point2D, error: f64, cost: u64) {
        self.estimate = Some(estimate);
        self.error = error;
        self.cost = cost;
        self.is_anchor = true;
    }
}
