#[cfg(test)]
mod tests {
    use breaktime::libs::records::{BreakRecord, EmployeeBreakRecord, PrecomputedSummary, SummaryRow};
    use breaktime::libs::report::{aggregate, employee_stats, employee_table, summarize_employee, ReportMode, ReportRows};
    use breaktime::libs::status::EmployeeState;
    use chrono::{TimeZone, Utc};

    fn seconds(n: f64) -> BreakRecord {
        BreakRecord {
            duration_seconds: Some(n),
            ..Default::default()
        }
    }

    fn employee(id: &str, breaks: Vec<BreakRecord>) -> EmployeeBreakRecord {
        EmployeeBreakRecord {
            emp_id: Some(id.to_string()),
            employee_name: Some(format!("Employee {}", id)),
            breaks,
            ..Default::default()
        }
    }

    fn row(id: &str, breaks: u64, minutes: f64) -> SummaryRow {
        SummaryRow {
            emp_id: Some(id.to_string()),
            total_breaks: Some(breaks),
            total_duration_minutes: Some(minutes),
            ..Default::default()
        }
    }

    #[test]
    fn test_detailed_totals() {
        let records = vec![
            employee("E1", vec![seconds(600.0), seconds(300.0)]),
            employee("E2", vec![seconds(900.0)]),
        ];
        let summary = aggregate(ReportRows::Detailed(&records), None);

        assert_eq!(summary.mode, ReportMode::Detailed);
        assert_eq!(summary.total_breaks, 3);
        assert_eq!(summary.total_employees, 2);
        assert_eq!(summary.total_amount, 1800);
        assert_eq!(summary.total_duration, "00:30:00");
        assert_eq!(summary.average_duration, "00:10:00");
    }

    #[test]
    fn test_detailed_average_floors_seconds() {
        let records = vec![employee("E1", vec![seconds(10.0), seconds(10.0), seconds(0.0)])];
        let summary = aggregate(ReportRows::Detailed(&records), None);
        assert_eq!(summary.average_duration, "00:00:06");
    }

    #[test]
    fn test_detailed_employees_are_distinct_with_resolvable_breaks() {
        let records = vec![
            employee("E1", vec![seconds(60.0)]),
            employee("E1", vec![seconds(120.0)]),
            employee("E2", vec![BreakRecord::default()]),
            employee("E3", vec![]),
        ];
        let summary = aggregate(ReportRows::Detailed(&records), None);

        assert_eq!(summary.total_employees, 1);
        assert_eq!(summary.total_breaks, 3);
        assert_eq!(summary.total_duration, "00:03:00");
        assert_eq!(summary.average_duration, "00:01:00");
    }

    #[test]
    fn test_missing_emp_id_is_one_grouping_key() {
        let anonymous = |n: f64| EmployeeBreakRecord {
            breaks: vec![seconds(n)],
            ..Default::default()
        };
        let records = vec![anonymous(60.0), anonymous(120.0), employee("E1", vec![seconds(30.0)])];
        let summary = aggregate(ReportRows::Detailed(&records), None);

        assert_eq!(summary.total_employees, 2);
        assert_eq!(summary.total_breaks, 3);
        assert_eq!(summary.total_duration, "00:03:30");
    }

    #[test]
    fn test_placeholder_durations_do_not_count_employees() {
        let records = vec![employee(
            "E1",
            vec![BreakRecord {
                duration: Some("--:--:--".to_string()),
                ..Default::default()
            }],
        )];
        let summary = aggregate(ReportRows::Detailed(&records), None);

        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.total_breaks, 1);
        assert_eq!(summary.total_duration, "00:00:00");
    }

    #[test]
    fn test_summary_mode_sums_precomputed_rows() {
        let rows = vec![row("E1", 3, 45.0), row("E2", 1, 80.0)];
        let summary = aggregate(ReportRows::Summary(&rows), None);

        assert_eq!(summary.mode, ReportMode::Summary);
        assert_eq!(summary.total_breaks, 4);
        assert_eq!(summary.total_employees, 2);
        assert_eq!(summary.total_duration, "2h 5m");
        assert_eq!(summary.average_duration, "31m");
    }

    #[test]
    fn test_summary_mode_reads_legacy_field_names() {
        let rows = vec![SummaryRow {
            break_count: Some(2),
            total_minutes: Some(30.0),
            ..Default::default()
        }];
        let summary = aggregate(ReportRows::Summary(&rows), None);
        assert_eq!(summary.total_breaks, 2);
        assert_eq!(summary.total_duration, "30m");
        assert_eq!(summary.average_duration, "15m");
    }

    #[test]
    fn test_precomputed_summary_is_authoritative() {
        let rows = vec![row("E1", 4, 100.0)];
        let upstream = PrecomputedSummary {
            total_duration_minutes: Some(120.0),
            ..Default::default()
        };
        let summary = aggregate(ReportRows::Summary(&rows), Some(&upstream));

        assert_eq!(summary.total_duration, "2h 0m");
        assert_eq!(summary.total_breaks, 4);
        assert_eq!(summary.average_duration, "30m");
    }

    #[test]
    fn test_precomputed_fields_override_individually() {
        let records = vec![employee("E1", vec![seconds(600.0)])];
        let upstream = PrecomputedSummary {
            total_breaks: Some(5),
            total_employees: Some(9),
            average_duration_seconds: Some(75.0),
            ..Default::default()
        };
        let summary = aggregate(ReportRows::Detailed(&records), Some(&upstream));

        assert_eq!(summary.total_breaks, 5);
        assert_eq!(summary.total_employees, 9);
        assert_eq!(summary.total_duration, "00:10:00");
        assert_eq!(summary.average_duration, "00:01:15");
    }

    #[test]
    fn test_precomputed_units_are_converted() {
        let records = vec![employee("E1", vec![seconds(60.0)])];
        let upstream = PrecomputedSummary {
            total_duration_minutes: Some(90.0),
            ..Default::default()
        };
        let summary = aggregate(ReportRows::Detailed(&records), Some(&upstream));
        assert_eq!(summary.total_duration, "01:30:00");
    }

    #[test]
    fn test_empty_input() {
        let detailed = aggregate(ReportRows::Detailed(&[]), None);
        assert_eq!(detailed.total_breaks, 0);
        assert_eq!(detailed.total_employees, 0);
        assert_eq!(detailed.total_duration, "00:00:00");
        assert_eq!(detailed.average_duration, "00:00:00");

        let summary = aggregate(ReportRows::Summary(&[]), None);
        assert_eq!(summary.total_duration, "0m");
        assert_eq!(summary.average_duration, "0m");
    }

    #[test]
    fn test_employee_stats() {
        let now = Utc.with_ymd_and_hms(2025, 3, 4, 12, 10, 0).unwrap();
        let mut record = employee("E1", vec![seconds(600.0), BreakRecord::default()]);
        record.is_currently_on_break = true;
        record.current_break = Some(BreakRecord {
            start_time: Some(Utc.with_ymd_and_hms(2025, 3, 4, 12, 0, 0).unwrap()),
            ..Default::default()
        });

        let stats = employee_stats(&record, now);
        assert_eq!(stats.emp_id, "E1");
        assert_eq!(stats.department, "N/A");
        assert_eq!(stats.break_count, 2);
        assert_eq!(stats.resolved_breaks, 1);
        assert_eq!(stats.total_seconds, 600);
        assert_eq!(stats.total_duration, "00:10:00");
        assert_eq!(stats.average_duration, "00:05:00");
        assert_eq!(stats.state, EmployeeState::OnBreak);
        assert_eq!(stats.running_seconds, Some(600));
    }

    #[test]
    fn test_employee_table_keeps_input_order() {
        let records = vec![employee("B", vec![]), employee("A", vec![seconds(1.0)])];
        let table = employee_table(&records, Utc::now());
        let ids: Vec<&str> = table.iter().map(|s| s.emp_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(table[0].average_duration, "00:00:00");
    }

    #[test]
    fn test_summarize_employee_feeds_summary_mode() {
        let records = vec![
            employee("E1", vec![seconds(1800.0), seconds(1800.0)]),
            employee("E2", vec![seconds(300.0)]),
        ];
        let rows: Vec<SummaryRow> = records.iter().map(summarize_employee).collect();
        assert_eq!(rows[0].precomputed_breaks(), 2);
        assert_eq!(rows[0].precomputed_minutes(), 60.0);

        let summary = aggregate(ReportRows::Summary(&rows), None);
        assert_eq!(summary.total_employees, 2);
        assert_eq!(summary.total_duration, "1h 5m");
    }
}
