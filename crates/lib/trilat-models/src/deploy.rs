use log::{debug, info, warn};

use trilat_core::field::{Field, FieldParams};
use trilat_core::node::{NeighborEntry, Node, NodeId};
use trilat_core::point::Point2D;
use trilat_core::sampler::Sampler;

use crate::range::{RangeModel, RangeNoise};

/// Builds the range model of a run from its parameters.
pub fn range_model(params: &FieldParams) -> RangeModel {
    RangeModel::new(
        RangeNoise::new(params.noise_percent),
        f64::from(params.radius),
    )
}

/// Places the nodes of a new field and takes the initial range measurements from every
/// non-anchor to every anchor.
///
/// Draw order: `x` then `y` for each node in arena order, then one range draw per
/// (non-anchor, anchor) pair with non-anchors in arena order and anchors from the last
/// arena index downwards.
pub fn deploy_field<S: Sampler>(params: &FieldParams, sampler: &mut S) -> Field {
    let mut field = place_nodes(params, sampler);
    measure_anchor_ranges(&mut field, &range_model(params), sampler);
    info!(
        "Deployed {} nodes with {} anchors on a {}x{} field",
        field.len(),
        field.anchor_count(),
        params.field_size,
        params.field_size
    );
    if field.initial_non_anchors() == 0 {
        warn!("Field has no non-anchor nodes, the localized share is undefined");
    }
    field
}

pub fn place_nodes<S: Sampler>(params: &FieldParams, sampler: &mut S) -> Field {
    let side = f64::from(params.field_size);
    let first_anchor = params.first_anchor_idx();
    let node_count = params.node_count as usize;
    let mut nodes = Vec::with_capacity(node_count);
    for idx in 0..node_count {
        let x = sampler.uniform(0.0, side);
        let y = sampler.uniform(0.0, side);
        nodes.push(
            Node::builder()
                .id(NodeId::from(idx as u32 + 1))
                .position(Point2D::new(x, y))
                .is_anchor(idx >= first_anchor)
                .build(),
        );
    }
    Field::new(*params, nodes)
}

pub fn measure_anchor_ranges<S: Sampler>(field: &mut Field, range: &RangeModel, sampler: &mut S) {
    let first_anchor = field.params().first_anchor_idx();
    let node_count = field.len();
    for node_idx in 0..first_anchor {
        let position = field.node(node_idx).position;
        for anchor_idx in (first_anchor..node_count).rev() {
            let anchor_position = field.node(anchor_idx).position;
            if let Some(distance) = range.measure(&position, &anchor_position, sampler) {
                field
                    .node_mut(node_idx)
                    .neighbors
                    .insert(NeighborEntry::new(anchor_idx, distance));
            }
        }
        debug!(
            "Node {} hears {} anchors",
            field.node(node_idx).id,
            field.node(node_idx).neighbors.len()
        );
    }
}
