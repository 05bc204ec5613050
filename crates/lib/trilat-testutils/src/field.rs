use trilat_core::field::{Field, FieldParams};
use trilat_core::node::{NeighborEntry, Node, NodeId, NodeIdx};
use trilat_core::point::Point2D;

pub fn make_params(n: u32, l: u32, r_big: u32, r: u32, f: u32) -> FieldParams {
    FieldParams::builder()
        .node_count(n)
        .field_size(l)
        .radius(r_big)
        .noise_percent(r)
        .anchor_percent(f)
        .build()
}

/// Builds a field from fixed positions without any range measurement. The tail of the
/// position list becomes the anchors according to `params`.
pub fn field_from_points(params: FieldParams, points: &[(f64, f64)]) -> Field {
    let first_anchor = params.first_anchor_idx();
    let nodes = points
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            Node::builder()
                .id(NodeId::from(idx as u32 + 1))
                .position(Point2D::from(*point))
                .is_anchor(idx >= first_anchor)
                .build()
        })
        .collect();
    Field::new(params, nodes)
}

/// Adds an exact range measurement from `node` to `reference`.
pub fn link_exact(field: &mut Field, node: NodeIdx, reference: NodeIdx) {
    let distance = field
        .node(node)
        .position
        .distance_to(&field.node(reference).position);
    field
        .node_mut(node)
        .neighbors
        .insert(NeighborEntry::new(reference, distance));
}
