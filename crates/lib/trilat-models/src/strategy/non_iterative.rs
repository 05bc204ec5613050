use log::debug;

use trilat_core::field::Field;

use crate::metrics::StrategyReport;
use crate::strategy::{locate, Strategy};

/// Trilaterates every node that already holds three range measurements, from its three
/// closest references. Nothing is promoted, so the neighbor sets stay as generated.
///
/// Anchors are not skipped: any node passing the degree check counts as localized.
pub fn localize(field: &mut Field) -> StrategyReport {
    let mut report = StrategyReport::new(Strategy::NonIterative, field.initial_non_anchors());
    for idx in 0..field.len() {
        let Some(references) = field.node(idx).neighbors.closest_three() else {
            continue;
        };
        let localization = locate(field, idx, &references);
        debug!(
            "Node {} estimated at {} with error {}",
            localization.id, localization.estimate, localization.error
        );
        report.record(localization);
    }
    report
}
