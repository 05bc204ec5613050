use trilat_core::field::FieldSettings;
use trilat_core::point::Point2D;
use trilat_models::dist::RngSampler;
use trilat_models::solver::{trilaterate, Circle};
use trilat_models::strategy::Strategy;
use trilat_output::report::{render_report, write_results};
use trilat_runner::runner::{run_once, run_simulation, SimulationPlan};
use trilat_testutils::sampler::MidpointSampler;

fn plan_for(n: i64, l: i64, r_big: i64, r: i64, f: i64) -> SimulationPlan {
    let params = FieldSettings {
        node_count: n,
        field_size: l,
        radius: r_big,
        noise_percent: r,
        anchor_percent: f,
    }
    .validate()
    .unwrap();
    SimulationPlan::builder().params(params).build()
}

#[test]
fn test_all_anchors_reachable_without_noise() {
    for seed in [1, 17, 99] {
        let reports = run_once(&plan_for(10, 100, 200, 0, 30), &mut RngSampler::new(seed));
        assert_eq!(reports.len(), 3);
        for report in reports.iter() {
            assert_eq!(report.metrics.localized(), 7);
            assert_eq!(report.localized_percent(), 100.0);
            assert!(report.ale() < 1e-9);
        }
    }
}

#[test]
fn test_single_non_anchor() {
    let reports = run_once(&plan_for(4, 100, 200, 0, 75), &mut RngSampler::new(4));
    let non_iterative = &reports[0];
    assert_eq!(non_iterative.strategy, Strategy::NonIterative);
    assert_eq!(non_iterative.metrics.localized(), 1);
    assert_eq!(non_iterative.localizations[0].idx, 0);
    assert!(non_iterative.localizations[0].error < 1e-9);
    assert_eq!(non_iterative.localized_percent(), 100.0);
}

#[test]
fn test_radius_too_small() {
    let reports = run_once(&plan_for(4, 100, 1, 0, 75), &mut RngSampler::new(8));
    for report in reports.iter() {
        assert_eq!(report.metrics.localized(), 0);
        assert!(report.ale().is_nan());
        assert_eq!(report.localized_percent(), 0.0);
    }
    assert_eq!(
        render_report(&reports[1]),
        "Iterative three most relevant: ALE: NaN, Localized nodes(%): 0.0%"
    );
}

#[test]
fn test_sparse_field_order_and_coverage() {
    for seed in 0..10 {
        let reports = run_once(&plan_for(50, 100, 30, 10, 20), &mut RngSampler::new(seed));
        let order: Vec<Strategy> = reports.iter().map(|r| r.strategy).collect();
        assert_eq!(order, Strategy::ALL.to_vec());
        let baseline = reports[0].metrics.localized();
        assert!(reports[1].metrics.localized() >= baseline);
        assert!(reports[2].metrics.localized() >= baseline);
    }
}

#[test]
fn test_solver_recovers_exact_target() {
    let target = Point2D::new(4.0, 3.0);
    let circles = [(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)].map(|(x, y)| {
        let centre = Point2D::new(x, y);
        Circle::new(centre, centre.distance_to(&target))
    });
    let estimate = trilaterate(&circles);
    assert!((estimate.x - target.x).abs() < 1e-9);
    assert!((estimate.y - target.y).abs() < 1e-9);
}

#[test]
fn test_no_non_anchors() {
    let reports = run_once(&plan_for(3, 10, 100, 0, 100), &mut RngSampler::new(5));
    for report in reports.iter() {
        assert_eq!(report.metrics.localized(), 0);
        assert!(report.ale().is_nan());
        assert!(report.localized_percent().is_nan());
    }
    assert_eq!(
        render_report(&reports[0]),
        "Non-iterative: ALE: NaN, Localized nodes(%): NaN%"
    );
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let plan = SimulationPlan::builder()
        .params(plan_for(50, 100, 30, 10, 20).params)
        .runs(3)
        .build();
    let render = |seed: u64| {
        let results = run_simulation(&plan, &mut RngSampler::new(seed));
        let mut out = Vec::new();
        write_results(&mut out, &results.runs, &results.summaries).unwrap();
        String::from_utf8(out).unwrap()
    };
    assert_eq!(render(21), render(21));
}

#[test]
fn test_batch_collects_every_run() {
    let plan = SimulationPlan::builder()
        .params(plan_for(20, 100, 60, 5, 30).params)
        .strategies(vec![Strategy::ThreeClosest])
        .runs(4)
        .build();
    let results = run_simulation(&plan, &mut RngSampler::new(3));
    assert_eq!(results.runs.len(), 4);
    assert!(results.runs.iter().all(|reports| reports.len() == 1));
    assert_eq!(results.summaries.len(), 1);
    assert_eq!(results.summaries[0].runs(), 4);
}

#[test]
fn test_draw_order_is_fixed() {
    // 2 placement draws per node, then one range per (non-anchor, anchor) pair. The
    // non-iterative strategy draws nothing; the iterative ones draw per promotion.
    let mut sampler = MidpointSampler::default();
    let plan = SimulationPlan::builder()
        .params(plan_for(4, 100, 200, 0, 75).params)
        .strategies(vec![Strategy::NonIterative])
        .build();
    run_once(&plan, &mut sampler);
    assert_eq!(sampler.calls, 4 * 2 + 3);
}
