#[cfg(test)]
mod tests {
    use breaktime::libs::formatter::{format_duration, format_minutes_compact, BreakGroup, DurationFormat};
    use breaktime::libs::records::{BreakRecord, BreakStatus};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(86_399), "23:59:59");
        assert_eq!(format_duration(360_000), "100:00:00");
    }

    #[test]
    fn test_format_minutes_compact() {
        assert_eq!(format_minutes_compact(125), "2h 5m");
        assert_eq!(format_minutes_compact(120), "2h 0m");
        assert_eq!(format_minutes_compact(45), "45m");
        assert_eq!(format_minutes_compact(0), "0m");
    }

    #[test]
    fn test_duration_format_strategies() {
        assert_eq!(DurationFormat::Clock.render(90), "00:01:30");
        assert_eq!(DurationFormat::Compact.render(90), "1h 30m");
        assert_eq!(DurationFormat::Clock.zero(), "00:00:00");
        assert_eq!(DurationFormat::Compact.zero(), "0m");
    }

    #[test]
    fn test_break_group_format() {
        let now = Utc.with_ymd_and_hms(2025, 3, 4, 12, 0, 0).unwrap();
        let breaks = vec![
            BreakRecord {
                start_time: Some(Utc.with_ymd_and_hms(2025, 3, 4, 9, 0, 0).unwrap()),
                end_time: Some(Utc.with_ymd_and_hms(2025, 3, 4, 9, 15, 0).unwrap()),
                ..Default::default()
            },
            BreakRecord {
                start_time: Some(Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).unwrap()),
                ..Default::default()
            },
            BreakRecord {
                start_time: Some(Utc.with_ymd_and_hms(2025, 3, 4, 11, 30, 0).unwrap()),
                status: Some(BreakStatus::Ongoing),
                ..Default::default()
            },
        ];

        let rows = breaks.format(now, Duration::minutes(60));
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].start, "09:00:00");
        assert_eq!(rows[0].end, "09:15:00");
        assert_eq!(rows[0].duration, "00:15:00");
        assert_eq!(rows[0].status, "completed");

        assert_eq!(rows[1].end, "-");
        assert_eq!(rows[1].duration, "--:--:--");
        assert_eq!(rows[1].status, "overdue");

        assert_eq!(rows[2].status, "ongoing");
    }
}
