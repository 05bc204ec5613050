use std::fmt;

use log::{error, info, warn};
use serde::Deserialize;

use trilat_core::field::Field;
use trilat_core::node::{NeighborEntry, NodeIdx};
use trilat_core::sampler::Sampler;

use crate::deploy::range_model;
use crate::metrics::{Localization, StrategyReport};
use crate::solver::{localization_error, trilaterate, Circle};

pub mod iterative;
pub mod non_iterative;
pub mod select;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("unsupported localization strategy '{0}'")]
    Unsupported(String),
}

#[derive(Deserialize, Debug, Clone)]
pub struct StrategySettings {
    pub name: String,
}

/// The localization variants, listed in the order their results are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    NonIterative,
    MostRelevant,
    ThreeClosest,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::NonIterative,
        Strategy::MostRelevant,
        Strategy::ThreeClosest,
    ];

    pub fn with_settings(settings: &StrategySettings) -> Result<Self, StrategyError> {
        match settings.name.to_lowercase().as_str() {
            "non_iterative" => Ok(Strategy::NonIterative),
            "most_relevant" => Ok(Strategy::MostRelevant),
            "three_closest" => Ok(Strategy::ThreeClosest),
            _ => {
                error!("Only non_iterative, most_relevant and three_closest are supported");
                Err(StrategyError::Unsupported(settings.name.clone()))
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::NonIterative => "Non-iterative",
            Strategy::MostRelevant => "Iterative three most relevant",
            Strategy::ThreeClosest => "Iterative three closest",
        }
    }

    /// Localizes a snapshot of the field. The given field is left untouched; the
    /// iterative variants draw their promotion ranges from `sampler`.
    pub fn localize<S: Sampler>(&self, field: &Field, sampler: &mut S) -> StrategyReport {
        let mut snapshot = field.snapshot();
        let report = match self {
            Strategy::NonIterative => non_iterative::localize(&mut snapshot),
            Strategy::MostRelevant | Strategy::ThreeClosest => {
                let range = range_model(field.params());
                iterative::localize(*self, &mut snapshot, &range, sampler)
            }
        };
        info!(
            "{}: localized {} of {} non-anchors",
            self,
            report.metrics.localized(),
            field.initial_non_anchors()
        );
        report
    }
}

/// Trilaterates the node at `idx` from the given references and records the estimate on
/// the node. Anchor flag and cost are left to the caller.
pub(crate) fn locate(
    field: &mut Field,
    idx: NodeIdx,
    references: &[NeighborEntry; 3],
) -> Localization {
    let circles =
        references.map(|entry| Circle::new(field.node(entry.node).position, entry.distance));
    let estimate = trilaterate(&circles);
    let node = field.node_mut(idx);
    let error = localization_error(&node.position, &estimate);
    if !estimate.is_finite() {
        warn!(
            "Degenerate references {:?} for node {}; estimate is {}",
            references.map(|entry| entry.node),
            node.id,
            estimate
        );
    }
    node.estimate = Some(estimate);
    node.error = error;
    Localization {
        idx,
        id: node.id,
        estimate,
        error,
        cost: node.cost,
        references: references.map(|entry| entry.node),
    }
}
