use log::debug;

use trilat_core::field::Field;
use trilat_core::node::{NeighborEntry, NodeIdx};
use trilat_core::sampler::Sampler;

use crate::metrics::StrategyReport;
use crate::range::RangeModel;
use crate::strategy::select::ReferenceChoice;
use crate::strategy::{locate, Strategy};

/// Localizes and promotes nodes until no further node can be trilaterated.
///
/// Each round promotes the lowest-index non-anchor holding three range measurements.
/// The promoted node then acts as an anchor: every remaining non-anchor measures its
/// range to the promoted node's true position and keeps it when within the radius.
/// Scanning restarts from the first node after every promotion.
pub fn localize<S: Sampler>(
    strategy: Strategy,
    field: &mut Field,
    range: &RangeModel,
    sampler: &mut S,
) -> StrategyReport {
    let choice = match strategy {
        Strategy::MostRelevant => ReferenceChoice::LeastCost,
        _ => ReferenceChoice::Closest,
    };
    let mut report = StrategyReport::new(strategy, field.initial_non_anchors());
    while let Some(idx) = next_candidate(field) {
        let Some(references) = choice.select(field, idx) else {
            break;
        };
        let cost = choice.promoted_cost(field, &references);
        let mut localization = locate(field, idx, &references);
        localization.cost = cost;
        field
            .node_mut(idx)
            .promote(localization.estimate, localization.error, cost);
        debug!(
            "Promoted node {} at {} with error {} and cost {}",
            localization.id, localization.estimate, localization.error, cost
        );
        report.record(localization);
        announce(field, idx, range, sampler);
    }
    report
}

fn next_candidate(field: &Field) -> Option<NodeIdx> {
    field
        .nodes()
        .iter()
        .position(|node| !node.is_anchor && node.has_enough_neighbors())
}

/// Lets every non-anchor measure its range to the newly promoted node.
fn announce<S: Sampler>(
    field: &mut Field,
    promoted: NodeIdx,
    range: &RangeModel,
    sampler: &mut S,
) {
    let source = field.node(promoted).position;
    for idx in 0..field.len() {
        if idx == promoted || field.node(idx).is_anchor {
            continue;
        }
        let position = field.node(idx).position;
        if let Some(distance) = range.measure(&position, &source, sampler) {
            field
                .node_mut(idx)
                .neighbors
                .insert(NeighborEntry::new(promoted, distance));
        }
    }
}
