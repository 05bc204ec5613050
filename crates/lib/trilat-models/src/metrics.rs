use trilat_core::node::{NodeId, NodeIdx};
use trilat_core::point::Point2D;

use crate::strategy::Strategy;

/// One localized node of a strategy run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Localization {
    pub idx: NodeIdx,
    pub id: NodeId,
    pub estimate: Point2D,
    pub error: f64,
    pub cost: u64,
    pub references: [NodeIdx; 3],
}

/// Running totals of a strategy run.
///
/// The error sum is kept in single precision, and the localized share is taken over the
/// number of non-anchors the field started with. Both quotients are left undefined
/// (NaN or infinite) when their denominator is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalizationMetrics {
    error_sum: f32,
    localized: u32,
    non_anchors: usize,
}

impl LocalizationMetrics {
    pub fn new(non_anchors: usize) -> Self {
        Self {
            non_anchors,
            ..Default::default()
        }
    }

    pub fn record(&mut self, error: f64) {
        self.error_sum = (f64::from(self.error_sum) + error) as f32;
        self.localized += 1;
    }

    pub fn localized(&self) -> u32 {
        self.localized
    }

    pub fn error_sum(&self) -> f32 {
        self.error_sum
    }

    /// Average localization error.
    pub fn ale(&self) -> f32 {
        self.error_sum / self.localized as f32
    }

    pub fn localized_percent(&self) -> f64 {
        f64::from(self.localized) * 100.0 / self.non_anchors as f64
    }
}

/// Outcome of one strategy on one field.
#[derive(Clone, Debug)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub metrics: LocalizationMetrics,
    pub localizations: Vec<Localization>,
}

impl StrategyReport {
    pub fn new(strategy: Strategy, non_anchors: usize) -> Self {
        Self {
            strategy,
            metrics: LocalizationMetrics::new(non_anchors),
            localizations: Vec::new(),
        }
    }

    pub fn record(&mut self, localization: Localization) {
        self.metrics.record(localization.error);
        self.localizations.push(localization);
    }

    pub fn ale(&self) -> f32 {
        self.metrics.ale()
    }

    pub fn localized_percent(&self) -> f64 {
        self.metrics.localized_percent()
    }
}

/// Averages of one strategy over the runs of a Monte-Carlo batch.
///
/// Runs whose ALE is NaN or infinite do not enter the mean ALE; every run enters the
/// mean localized share.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrategySummary {
    pub strategy: Strategy,
    runs: usize,
    finite_runs: usize,
    ale_sum: f64,
    percent_sum: f64,
}

impl StrategySummary {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            runs: 0,
            finite_runs: 0,
            ale_sum: 0.0,
            percent_sum: 0.0,
        }
    }

    pub fn add(&mut self, report: &StrategyReport) {
        self.runs += 1;
        let ale = report.ale();
        if ale.is_finite() {
            self.finite_runs += 1;
            self.ale_sum += f64::from(ale);
        }
        self.percent_sum += report.localized_percent();
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn mean_ale(&self) -> f32 {
        (self.ale_sum / self.finite_runs as f64) as f32
    }

    pub fn mean_localized_percent(&self) -> f64 {
        self.percent_sum / self.runs as f64
    }
}
