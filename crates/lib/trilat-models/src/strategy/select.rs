use itertools::Itertools;

use trilat_core::field::Field;
use trilat_core::node::{NeighborEntry, NodeIdx};

/// How an iterative strategy picks the three references of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceChoice {
    /// The three smallest measured distances.
    Closest,
    /// The three lowest reference costs, ties by measured distance.
    LeastCost,
}

impl ReferenceChoice {
    pub fn select(&self, field: &Field, idx: NodeIdx) -> Option<[NeighborEntry; 3]> {
        let neighbors = &field.node(idx).neighbors;
        match self {
            ReferenceChoice::Closest => neighbors.closest_three(),
            ReferenceChoice::LeastCost => {
                let chosen: Vec<NeighborEntry> = neighbors
                    .iter()
                    .copied()
                    .sorted_by(|a, b| {
                        field
                            .node(a.node)
                            .cost
                            .cmp(&field.node(b.node).cost)
                            .then(a.distance.total_cmp(&b.distance))
                    })
                    .take(3)
                    .collect();
                match chosen.as_slice() {
                    [first, second, third] => Some([*first, *second, *third]),
                    _ => None,
                }
            }
        }
    }

    /// Cost given to a node promoted from these references. Saturates at `u64::MAX`.
    pub fn promoted_cost(&self, field: &Field, references: &[NeighborEntry; 3]) -> u64 {
        match self {
            ReferenceChoice::Closest => 0,
            ReferenceChoice::LeastCost => references
                .iter()
                .map(|entry| field.node(entry.node).cost)
                .fold(1u64, u64::saturating_add),
        }
    }
}
