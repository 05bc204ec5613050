use trilat_core::field::{Field, FieldSettings};
use trilat_models::deploy::deploy_field;
use trilat_models::dist::RngSampler;
use trilat_models::metrics::StrategyReport;
use trilat_models::strategy::Strategy;

fn deploy(seed: u64, settings: FieldSettings) -> (Field, RngSampler) {
    let params = settings.validate().unwrap();
    let mut sampler = RngSampler::new(seed);
    let field = deploy_field(&params, &mut sampler);
    (field, sampler)
}

fn sparse_settings() -> FieldSettings {
    FieldSettings {
        node_count: 50,
        field_size: 100,
        radius: 30,
        noise_percent: 10,
        anchor_percent: 20,
    }
}

fn run_all(field: &Field, sampler: &mut RngSampler) -> Vec<StrategyReport> {
    Strategy::ALL
        .iter()
        .map(|strategy| strategy.localize(field, sampler))
        .collect()
}

#[test]
fn test_promotion_never_loses_nodes() {
    for seed in 0..20 {
        let (field, mut sampler) = deploy(seed, sparse_settings());
        let reports = run_all(&field, &mut sampler);
        let baseline = reports[0].metrics.localized();
        assert!(reports[1].metrics.localized() >= baseline, "seed {}", seed);
        assert!(reports[2].metrics.localized() >= baseline, "seed {}", seed);
    }
}

#[test]
fn test_strategies_leave_the_field_untouched() {
    let (field, mut sampler) = deploy(3, sparse_settings());
    let before: Vec<usize> = field.nodes().iter().map(|n| n.neighbors.len()).collect();
    run_all(&field, &mut sampler);
    let after: Vec<usize> = field.nodes().iter().map(|n| n.neighbors.len()).collect();
    assert_eq!(before, after);
    assert_eq!(field.anchor_count(), 10);
    assert!(field.nodes().iter().all(|n| n.estimate.is_none()));
}

#[test]
fn test_degree_gate() {
    for seed in 0..10 {
        let (field, mut sampler) = deploy(seed, sparse_settings());
        let report = Strategy::NonIterative.localize(&field, &mut sampler);
        for localization in report.localizations.iter() {
            assert!(field.node(localization.idx).neighbors.len() >= 3);
        }
        let localizable = field
            .nodes()
            .iter()
            .filter(|node| node.neighbors.len() >= 3)
            .count();
        assert_eq!(report.metrics.localized() as usize, localizable);
    }
}

#[test]
fn test_most_relevant_costs() {
    for seed in 0..10 {
        let (field, mut sampler) = deploy(seed, sparse_settings());
        let report = Strategy::MostRelevant.localize(&field, &mut sampler);
        let mut costs = vec![0u64; field.len()];
        for localization in report.localizations.iter() {
            let reference_costs = localization.references.map(|idx| costs[idx]);
            let sum: u64 = reference_costs.iter().sum();
            let min = *reference_costs.iter().min().unwrap();
            assert!(localization.cost >= 1);
            assert_eq!(localization.cost, 1 + sum);
            assert!(localization.cost >= 1 + 3 * min);
            costs[localization.idx] = localization.cost;
        }
    }
}

#[test]
fn test_promoted_nodes_localize_once() {
    let (field, mut sampler) = deploy(5, sparse_settings());
    for strategy in [Strategy::MostRelevant, Strategy::ThreeClosest] {
        let report = strategy.localize(&field, &mut sampler);
        let mut seen: Vec<usize> = report.localizations.iter().map(|l| l.idx).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
        assert!(seen.iter().all(|idx| *idx < field.initial_non_anchors()));
        assert!(report.localized_percent() <= 100.0);
    }
}

#[test]
fn test_noise_free_field_is_exact() {
    let settings = FieldSettings {
        node_count: 10,
        field_size: 100,
        radius: 200,
        noise_percent: 0,
        anchor_percent: 30,
    };
    let (field, mut sampler) = deploy(2024, settings);
    for report in run_all(&field, &mut sampler) {
        assert_eq!(report.metrics.localized(), 7);
        assert_eq!(report.localized_percent(), 100.0);
        for localization in report.localizations.iter() {
            assert!(localization.error < 1e-9, "{:?}", localization);
        }
    }
}
