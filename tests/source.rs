#[cfg(test)]
mod tests {
    use breaktime::libs::config::{Config, SourceConfig};
    use breaktime::libs::report::ReportMode;
    use breaktime::libs::source::{resolve_input, BreakDataset, SourceError};
    use std::path::PathBuf;

    #[test]
    fn test_bare_record_array() {
        let dataset = BreakDataset::from_json(r#"[{ "empId": "E1", "breaks": [{ "durationSeconds": 60 }] }]"#).unwrap();
        assert_eq!(dataset.records.len(), 1);
        assert!(dataset.rows.is_empty());
        assert!(dataset.summary.is_none());
    }

    #[test]
    fn test_bare_summary_array() {
        let dataset = BreakDataset::from_json(r#"[{ "empId": "E1", "totalBreaks": 2, "totalDurationMinutes": 30 }]"#).unwrap();
        assert!(dataset.records.is_empty());
        assert_eq!(dataset.rows.len(), 1);
        assert_eq!(dataset.rows[0].precomputed_breaks(), 2);
    }

    #[test]
    fn test_array_with_breaks_is_records_even_with_totals() {
        let dataset = BreakDataset::from_json(r#"[{ "empId": "E1", "totalBreaks": 2 }, { "empId": "E2", "breaks": [] }]"#).unwrap();
        assert_eq!(dataset.records.len(), 2);
        assert!(dataset.rows.is_empty());
    }

    #[test]
    fn test_envelope() {
        let text = r#"{
            "data": [{ "empId": "E1", "breaks": [{ "duration": "00:10:00" }] }],
            "rows": [{ "empId": "E1", "totalBreaks": 1, "totalDurationMinutes": 10 }],
            "summary": { "totalBreaks": 1, "totalDurationMinutes": 10 }
        }"#;
        let dataset = BreakDataset::from_json(text).unwrap();
        assert_eq!(dataset.records.len(), 1);
        assert_eq!(dataset.rows.len(), 1);
        assert_eq!(dataset.summary.unwrap().total_breaks, Some(1));
    }

    #[test]
    fn test_empty_documents() {
        assert!(BreakDataset::from_json("[]").unwrap().is_empty());
        assert!(BreakDataset::from_json("{}").unwrap().is_empty());
        assert!(BreakDataset::from_json("not json").is_err());
    }

    #[test]
    fn test_summary_rows_derived_from_records() {
        let dataset = BreakDataset::from_json(
            r#"[{ "empId": "E1", "breaks": [{ "durationMinutes": 20 }, { "durationMinutes": 25 }] }]"#,
        )
        .unwrap();
        let rows = dataset.summary_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].precomputed_breaks(), 2);
        assert_eq!(rows[0].precomputed_minutes(), 45.0);

        assert_eq!(dataset.rows_for(ReportMode::Summary, &rows).mode(), ReportMode::Summary);
        assert_eq!(dataset.rows_for(ReportMode::Detailed, &rows).mode(), ReportMode::Detailed);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(BreakDataset::load(&missing), Err(SourceError::Read { .. })));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ oops").unwrap();
        assert!(matches!(BreakDataset::load(&broken), Err(SourceError::Parse { .. })));

        let good = dir.path().join("good.json");
        std::fs::write(&good, r#"[{ "empId": "E1" }]"#).unwrap();
        assert_eq!(BreakDataset::load(&good).unwrap().records.len(), 1);
    }

    #[test]
    fn test_resolve_input() {
        let config = Config::default();
        assert!(matches!(resolve_input(None, &config), Err(SourceError::NotConfigured)));

        let explicit = PathBuf::from("breaks.json");
        assert_eq!(resolve_input(Some(explicit.clone()), &config).unwrap(), explicit);

        let configured = Config {
            source: Some(SourceConfig {
                path: "/srv/export/breaks.json".to_string(),
            }),
            ..Default::default()
        };
        assert_eq!(
            resolve_input(None, &configured).unwrap(),
            PathBuf::from("/srv/export/breaks.json")
        );
        assert_eq!(resolve_input(Some(explicit.clone()), &configured).unwrap(), explicit);
    }
}
