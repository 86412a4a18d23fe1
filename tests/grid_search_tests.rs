use cost_rebalance::{
    CancellationToken, Dataset, Error, GridReport, GridSearchConfig, GridSearchDriver,
    SamplingMethod, DEFAULT_GRID_SEARCH_CONFIG,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use test_utils::{
    synthetic_dataset, FailingStrategy, FixedLabelStrategy, FnStrategy, RecordingStrategy,
};

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_CONFIG: GridSearchConfig = GridSearchConfig {
        cost_steps: 2,
        cost_step: 0.5,
        norm_steps: 2,
        norm_step: 0.1,
        max_weighted_cost_steps: 1,
        max_weighted_cost_step: 1.0,
        methods: &SamplingMethod::ALL,
    };

    fn small_dataset() -> Dataset {
        synthetic_dataset(6, 2, 3, 7)
    }

    fn sort_reports(reports: &mut [GridReport]) {
        reports.sort_by(|a, b| format!("{:?}", a.point).cmp(&format!("{:?}", b.point)));
    }

    #[test]
    fn test_default_config_matches_sweep_shape() {
        assert_eq!(DEFAULT_GRID_SEARCH_CONFIG.point_count(), 200_000_000);

        let first: Vec<_> = DEFAULT_GRID_SEARCH_CONFIG.grid_points().take(101).collect();

        assert_eq!(first[0].cost_recession_predicted_growth, 0.0);
        assert_eq!(first[0].cost_growth_predicted_recession, 0.0);
        assert_eq!(first[0].method, SamplingMethod::RejectionSampling);
        assert_eq!(first[0].oversampling_norm, 0.0);
        assert_eq!(first[0].max_weighted_cost, 0.0);

        assert!((first[99].cost_growth_predicted_recession - 9.9).abs() < 1e-9);
        assert_eq!(first[99].cost_recession_predicted_growth, 0.0);

        assert!((first[100].cost_recession_predicted_growth - 0.1).abs() < 1e-9);
        assert_eq!(first[100].cost_growth_predicted_recession, 0.0);
    }

    #[test]
    fn test_grid_points_nesting_order() {
        let points: Vec<_> = SMALL_CONFIG.grid_points().collect();

        assert_eq!(points.len(), SMALL_CONFIG.point_count());
        assert_eq!(points.len(), 16);

        let costs: Vec<(f64, f64)> = points[..4]
            .iter()
            .map(|p| {
                (
                    p.cost_recession_predicted_growth,
                    p.cost_growth_predicted_recession,
                )
            })
            .collect();
        assert_eq!(costs, vec![(0.0, 0.0), (0.0, 0.5), (0.5, 0.0), (0.5, 0.5)]);

        assert!(points[..4]
            .iter()
            .all(|p| p.method == SamplingMethod::RejectionSampling));
        assert!(points[4..8]
            .iter()
            .all(|p| p.method == SamplingMethod::OverSampling));

        assert!(points[..8].iter().all(|p| p.oversampling_norm == 0.0));
        assert!(points[8..]
            .iter()
            .all(|p| (p.oversampling_norm - 0.1).abs() < 1e-12));
    }

    #[test]
    fn test_sweep_reports_every_point_with_growth() {
        let dataset = small_dataset();
        let strategy = FixedLabelStrategy::new(3, 1);
        let driver = GridSearchDriver::new(&dataset, &strategy, SMALL_CONFIG);

        let reports = driver
            .sweep(&CancellationToken::new())
            .collect::<Result<Vec<_>, Error>>()
            .unwrap();

        assert_eq!(reports.len(), 16);
        for report in &reports {
            assert_eq!(report.growth_count(), 3);
            assert_eq!(report.recession_count(), 1);
        }
    }

    #[test]
    fn test_sweep_skips_points_without_growth() {
        let dataset = small_dataset();
        let strategy = FixedLabelStrategy::new(0, 5);
        let driver = GridSearchDriver::new(&dataset, &strategy, SMALL_CONFIG);

        let reports = driver
            .sweep(&CancellationToken::new())
            .collect::<Result<Vec<_>, Error>>()
            .unwrap();

        assert!(reports.is_empty());
    }

    #[test]
    fn test_sweep_skips_only_the_growthless_points() {
        let dataset = small_dataset();
        let strategy = FnStrategy::new(|_, method, _, _| match method {
            SamplingMethod::RejectionSampling => vec![1.0, 1.0],
            SamplingMethod::OverSampling => vec![0.0, 1.0, 1.0],
        });
        let driver = GridSearchDriver::new(&dataset, &strategy, SMALL_CONFIG);

        let reports = driver
            .sweep(&CancellationToken::new())
            .collect::<Result<Vec<_>, Error>>()
            .unwrap();

        assert_eq!(reports.len(), 8);
        for report in &reports {
            assert_eq!(report.point.method, SamplingMethod::OverSampling);
            assert_eq!(report.growth_count(), 1);
            assert_eq!(report.recession_count(), 2);
        }
    }

    #[test]
    fn test_sweep_passes_grid_point_to_strategy() {
        let dataset = small_dataset();
        let strategy = RecordingStrategy::new();
        let driver = GridSearchDriver::new(&dataset, &strategy, SMALL_CONFIG);

        let reports = driver
            .sweep(&CancellationToken::new())
            .collect::<Result<Vec<_>, Error>>()
            .unwrap();
        let calls = strategy.calls();

        assert_eq!(calls.len(), 16);
        assert_eq!(reports.len(), 16);

        for (call, report) in calls.iter().zip(&reports) {
            assert_eq!(call.method, report.point.method);
            assert_eq!(call.oversampling_norm, report.point.oversampling_norm);
            assert_eq!(call.max_weighted_cost, report.point.max_weighted_cost);
            assert_eq!(call.cost_vectors.len(), dataset.len());

            for (cost_vector, &label) in call.cost_vectors.iter().zip(dataset.labels()) {
                let (false_positive, false_negative) = if label == 1.0 {
                    (
                        report.point.cost_growth_predicted_recession,
                        report.point.cost_recession_predicted_growth,
                    )
                } else {
                    (
                        report.point.cost_recession_predicted_growth,
                        report.point.cost_growth_predicted_recession,
                    )
                };
                assert_eq!(*cost_vector, [false_positive, false_negative, 0.0, 0.0]);
            }
        }
    }

    #[test]
    fn test_sweep_stops_when_cancelled() {
        let dataset = small_dataset();
        let cancel = CancellationToken::new();
        let strategy_cancel = cancel.clone();
        let strategy = FnStrategy::new(move |_, _, _, _| {
            strategy_cancel.cancel();
            vec![0.0, 1.0]
        });
        let driver = GridSearchDriver::new(&dataset, &strategy, SMALL_CONFIG);

        let reports = driver
            .sweep(&cancel)
            .collect::<Result<Vec<_>, Error>>()
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert!(cancel.is_cancelled());
    }

    #[test]
    fn test_parallel_sweep_stops_handing_out_points_when_cancelled() {
        let large_config = GridSearchConfig {
            cost_steps: 100,
            cost_step: 0.1,
            norm_steps: 10,
            norm_step: 0.1,
            max_weighted_cost_steps: 10,
            max_weighted_cost_step: 1.0,
            methods: &SamplingMethod::ALL,
        };
        let dataset = small_dataset();
        let cancel = CancellationToken::new();
        let strategy_cancel = cancel.clone();
        let calls = AtomicUsize::new(0);
        let strategy = FnStrategy::new(|_, _, _, _| {
            calls.fetch_add(1, Ordering::SeqCst);
            strategy_cancel.cancel();
            vec![0.0, 1.0]
        });
        let driver = GridSearchDriver::new(&dataset, &strategy, large_config.clone());

        let reports = driver.sweep_parallel(&cancel).unwrap();
        let calls = calls.load(Ordering::SeqCst);

        assert!(cancel.is_cancelled());
        assert!(calls >= 1);
        assert_eq!(reports.len(), calls);
        // Only points already pulled by worker threads are evaluated
        assert!(
            calls < 10_000,
            "{} of {} points evaluated after cancellation",
            calls,
            large_config.point_count()
        );
    }

    #[test]
    fn test_sweep_does_nothing_when_cancelled_up_front() {
        let dataset = small_dataset();
        let strategy = RecordingStrategy::new();
        let driver = GridSearchDriver::new(&dataset, &strategy, SMALL_CONFIG);
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert_eq!(driver.sweep(&cancel).count(), 0);
        assert!(driver.sweep_parallel(&cancel).unwrap().is_empty());
        assert!(strategy.calls().is_empty());
    }

    #[test]
    fn test_sweep_surfaces_strategy_errors() {
        let dataset = small_dataset();
        let driver = GridSearchDriver::new(&dataset, &FailingStrategy, SMALL_CONFIG);

        let first = driver.sweep(&CancellationToken::new()).next();
        assert!(matches!(first, Some(Err(Error::SamplingError(_)))));

        assert!(matches!(
            driver.sweep_parallel(&CancellationToken::new()),
            Err(Error::SamplingError(_))
        ));
    }

    #[test]
    fn test_parallel_sweep_matches_sequential_sweep() {
        let dataset = small_dataset();
        let strategy = FnStrategy::new(|cost_vectors, _, _, _| {
            // Growth survives only when misclassifying a recession costs something
            if cost_vectors.iter().any(|cost_vector| cost_vector[1] > 0.0) {
                vec![0.0, 0.0, 1.0]
            } else {
                vec![1.0]
            }
        });
        let driver = GridSearchDriver::new(&dataset, &strategy, SMALL_CONFIG);

        let mut sequential = driver
            .sweep(&CancellationToken::new())
            .collect::<Result<Vec<_>, Error>>()
            .unwrap();
        let mut parallel = driver.sweep_parallel(&CancellationToken::new()).unwrap();

        sort_reports(&mut sequential);
        sort_reports(&mut parallel);

        assert!(!sequential.is_empty());
        assert!(sequential.len() < SMALL_CONFIG.point_count());
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_report_display() {
        let dataset = small_dataset();
        let strategy = FixedLabelStrategy::new(3, 1);
        let driver = GridSearchDriver::new(&dataset, &strategy, SMALL_CONFIG);

        let point = SMALL_CONFIG.grid_points().nth(3).unwrap();
        let report = driver.evaluate(&point).unwrap().unwrap();

        assert_eq!(
            report.to_string(),
            "Params: RejectionSampling 0.0 0.0\nCosts ( 0.5 , 0.5 ) => Counts (Recession: 1 Growth: 3 )."
        );
    }
}
