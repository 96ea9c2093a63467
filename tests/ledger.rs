#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use harvestlog::libs::entry::{LogEntry, TimeInterval};
    use harvestlog::libs::ledger::{
        compute_interval_duration, compute_interval_price, format_duration, format_money, round2, RoundingPolicy,
        WageLedger,
    };

    fn t(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    fn entry(wage: Option<f64>, intervals: Vec<TimeInterval>) -> LogEntry {
        LogEntry {
            name: "Ravi".to_string(),
            hourly_wage: wage,
            intervals,
            ..LogEntry::default()
        }
    }

    #[test]
    fn test_interval_duration_same_day() {
        assert_eq!(compute_interval_duration(t(9, 0), t(11, 30)), Some(2.5));
        assert_eq!(compute_interval_duration(t(6, 15), t(6, 45)), Some(0.5));
    }

    #[test]
    fn test_interval_duration_wraps_past_midnight() {
        assert_eq!(compute_interval_duration(t(23, 0), t(1, 0)), Some(2.0));
        assert_eq!(compute_interval_duration(t(22, 30), t(0, 0)), Some(1.5));
    }

    #[test]
    fn test_interval_duration_equal_times_is_zero() {
        assert_eq!(compute_interval_duration(t(8, 0), t(8, 0)), Some(0.0));
    }

    #[test]
    fn test_interval_duration_unset_side() {
        assert_eq!(compute_interval_duration(None, t(8, 0)), None);
        assert_eq!(compute_interval_duration(t(8, 0), None), None);
        assert_eq!(compute_interval_duration(None, None), None);
    }

    #[test]
    fn test_interval_duration_stays_below_a_day() {
        for start in 0..24 {
            for end in 0..24 {
                let hours = compute_interval_duration(t(start, 0), t(end, 30)).unwrap();
                assert!((0.0..24.0).contains(&hours), "{start}:00 -> {end}:30 gave {hours}");
            }
        }
    }

    #[test]
    fn test_interval_price() {
        assert_eq!(compute_interval_price(Some(2.5), Some(100.0)), 250.0);
        assert_eq!(compute_interval_price(Some(1.0 / 3.0), Some(100.0)), 33.33);
        assert_eq!(compute_interval_price(None, Some(100.0)), 0.0);
        assert_eq!(compute_interval_price(Some(2.0), None), 0.0);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_duration(1.5), "1.50");
        assert_eq!(format_duration(0.0), "0.00");
        assert_eq!(format_money(250.0), "250.00");
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(2.5), 2.5);
    }

    #[test]
    fn test_recompute_uses_entry_wage() {
        let ledger = WageLedger::default();
        let mut e = entry(
            Some(100.0),
            vec![TimeInterval::new(t(9, 0), t(11, 30)), TimeInterval::new(t(13, 0), t(14, 0))],
        );

        let totals = ledger.recompute(&mut e);

        assert_eq!(e.intervals[0].duration, Some(2.5));
        assert_eq!(e.intervals[0].price, 250.0);
        assert_eq!(e.intervals[1].price, 100.0);
        assert_eq!(totals.total_duration, 3.5);
        assert_eq!(totals.total_price, 350.0);
        assert_eq!(e.total_duration, 3.5);
        assert_eq!(e.total_price, 350.0);
    }

    #[test]
    fn test_recompute_honours_interval_rate_override() {
        let ledger = WageLedger::default();
        let mut overtime = TimeInterval::new(t(18, 0), t(20, 0));
        overtime.hourly_rate = Some(150.0);
        let mut e = entry(Some(100.0), vec![TimeInterval::new(t(9, 0), t(10, 0)), overtime]);

        ledger.recompute(&mut e);

        assert_eq!(e.intervals[0].price, 100.0);
        assert_eq!(e.intervals[1].price, 300.0);
        // Sum of interval prices, not total hours times the wage.
        assert_eq!(e.total_price, 400.0);
        assert_ne!(e.total_price, e.total_duration * 100.0);
    }

    #[test]
    fn test_recompute_skips_incomplete_intervals() {
        let ledger = WageLedger::default();
        let mut e = entry(
            Some(80.0),
            vec![TimeInterval::new(t(9, 0), None), TimeInterval::new(t(10, 0), t(12, 0))],
        );

        ledger.recompute(&mut e);

        assert_eq!(e.intervals[0].duration, None);
        assert_eq!(e.intervals[0].price, 0.0);
        assert_eq!(e.intervals[1].price, 160.0);
        assert_eq!(e.total_duration, 2.0);
        assert_eq!(e.total_price, 160.0);
    }

    #[test]
    fn test_recompute_without_wage_prices_nothing() {
        let ledger = WageLedger::default();
        let mut e = entry(None, vec![TimeInterval::new(t(9, 0), t(12, 0))]);

        ledger.recompute(&mut e);

        assert_eq!(e.total_duration, 3.0);
        assert_eq!(e.total_price, 0.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let ledger = WageLedger::default();
        let mut e = entry(
            Some(95.5),
            vec![TimeInterval::new(t(7, 10), t(9, 55)), TimeInterval::new(t(23, 20), t(0, 40))],
        );

        let first = ledger.recompute(&mut e);
        let snapshot = e.clone();
        let second = ledger.recompute(&mut e);

        assert_eq!(first, second);
        assert_eq!(snapshot, e);
    }

    #[test]
    fn test_rounding_policies_differ_on_odd_intervals() {
        let intervals = || {
            vec![
                TimeInterval::new(t(8, 0), t(8, 20)),
                TimeInterval::new(t(9, 0), t(9, 20)),
                TimeInterval::new(t(10, 0), t(10, 20)),
            ]
        };

        let mut per_step = entry(Some(100.0), intervals());
        WageLedger::new(RoundingPolicy::PerStep).recompute(&mut per_step);
        assert_eq!(per_step.intervals[0].duration, Some(0.33));
        assert_eq!(per_step.intervals[0].price, 33.0);
        assert_eq!(per_step.total_duration, 0.99);
        assert_eq!(per_step.total_price, 99.0);

        let mut final_only = entry(Some(100.0), intervals());
        WageLedger::new(RoundingPolicy::FinalOnly).recompute(&mut final_only);
        assert_eq!(final_only.total_duration, 1.0);
        assert_eq!(final_only.total_price, 100.0);
    }

    #[test]
    fn test_rounding_policy_defaults_to_per_step() {
        assert_eq!(RoundingPolicy::default(), RoundingPolicy::PerStep);
        assert_eq!(WageLedger::default().rounding, RoundingPolicy::PerStep);
        assert_eq!(RoundingPolicy::FinalOnly.label(), "final-only");
    }

    #[test]
    fn test_morning_and_afternoon_at_wage_100() {
        let mut e = entry(
            Some(100.0),
            vec![TimeInterval::new(t(9, 0), t(11, 0)), TimeInterval::new(t(13, 0), t(13, 30))],
        );

        WageLedger::default().recompute(&mut e);

        assert_eq!(e.intervals[0].duration, Some(2.0));
        assert_eq!(e.intervals[0].price, 200.0);
        assert_eq!(e.intervals[1].duration, Some(0.5));
        assert_eq!(e.intervals[1].price, 50.0);
        assert_eq!(e.total_duration, 2.5);
        assert_eq!(e.total_price, 250.0);
    }

    #[test]
    fn test_totals_sum_one_and_two_hours_at_wage_50() {
        let mut e = entry(
            Some(50.0),
            vec![TimeInterval::new(t(7, 0), t(8, 0)), TimeInterval::new(t(15, 0), t(17, 0))],
        );

        let totals = WageLedger::default().recompute(&mut e);

        assert_eq!(e.intervals[0].price, 50.0);
        assert_eq!(e.intervals[1].price, 100.0);
        assert_eq!(totals.total_duration, 3.0);
        assert_eq!(totals.total_price, 150.0);
    }

    #[test]
    fn test_round2_leaves_huge_values_alone() {
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round2(f64::MAX), f64::MAX);
        assert_eq!(round2(1.005e3), 1005.0);
    }

    #[test]
    fn test_overflowing_price_counts_as_zero() {
        assert_eq!(compute_interval_price(Some(2.0), Some(f64::MAX)), 0.0);
        assert_eq!(compute_interval_price(Some(2.0), Some(f64::NAN)), 0.0);

        for policy in RoundingPolicy::ALL {
            let mut e = entry(Some(f64::INFINITY), vec![TimeInterval::new(t(9, 0), t(10, 0))]);
            let mut huge_rate = TimeInterval::new(t(11, 0), t(13, 0));
            huge_rate.hourly_rate = Some(f64::MAX);
            e.intervals.push(huge_rate);

            WageLedger::new(policy).recompute(&mut e);

            assert_eq!(e.intervals[0].price, 0.0);
            assert_eq!(e.intervals[1].price, 0.0);
            assert_eq!(e.total_duration, 3.0);
            assert_eq!(e.total_price, 0.0);
            assert!(serde_json::to_string(&e).unwrap().contains("\"total_price\":0.0"));
        }
    }
}
