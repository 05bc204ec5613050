use std::time::Instant;

use log::{debug, info};
use typed_builder::TypedBuilder;

use trilat_core::field::FieldParams;
use trilat_core::sampler::Sampler;
use trilat_models::deploy::deploy_field;
use trilat_models::metrics::{StrategyReport, StrategySummary};
use trilat_models::strategy::Strategy;

/// What to simulate: the field parameters, the strategies in reporting order and the
/// number of Monte-Carlo runs.
#[derive(Clone, Debug, TypedBuilder)]
pub struct SimulationPlan {
    pub params: FieldParams,
    #[builder(default = Strategy::ALL.to_vec())]
    pub strategies: Vec<Strategy>,
    #[builder(default = 1)]
    pub runs: usize,
}

#[derive(Clone, Debug, Default)]
pub struct BatchResults {
    pub runs: Vec<Vec<StrategyReport>>,
    pub summaries: Vec<StrategySummary>,
}

/// Generates one field and localizes it with every strategy of the plan. All strategies
/// see the same field and draw from the same sampler, in plan order.
pub fn run_once<S: Sampler>(plan: &SimulationPlan, sampler: &mut S) -> Vec<StrategyReport> {
    let field = deploy_field(&plan.params, sampler);
    plan.strategies
        .iter()
        .map(|strategy| {
            let report = strategy.localize(&field, sampler);
            for localization in report.localizations.iter() {
                debug!("{}: {:?}", strategy, localization);
            }
            report
        })
        .collect()
}

pub fn run_simulation<S: Sampler>(plan: &SimulationPlan, sampler: &mut S) -> BatchResults {
    let mut summaries: Vec<StrategySummary> = plan
        .strategies
        .iter()
        .map(|strategy| StrategySummary::new(*strategy))
        .collect();
    let mut runs = Vec::with_capacity(plan.runs);

    for run in 0..plan.runs {
        let start = Instant::now();
        let reports = run_once(plan, sampler);
        for (summary, report) in summaries.iter_mut().zip(reports.iter()) {
            summary.add(report);
        }
        info!(
            "Run {} of {} finished in {} us",
            run + 1,
            plan.runs,
            start.elapsed().as_micros()
        );
        runs.push(reports);
    }
    BatchResults { runs, summaries }
}
