use chrono::NaiveDate;

use crate::recurrence::{RecurrenceRule, expand};

pub struct RecurrenceCase {
    pub name: &'static str,
    pub start: &'static str,
    pub rule: RecurrenceRule,
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
}

#[expect(clippy::too_many_lines)]
pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "weekly_mon_wed_fri_five_times",
            start: "2026-01-05",
            rule: RecurrenceRule::weekly(1, &[1, 3, 5]).ending_after(5),
            expected: Some(&[
                "2026-01-05",
                "2026-01-07",
                "2026-01-09",
                "2026-01-12",
                "2026-01-14",
            ]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "monthly_from_jan_31_clamps_to_month_end",
            start: "2026-01-31",
            rule: RecurrenceRule::monthly(1),
            expected: Some(&[
                "2026-01-31",
                "2026-02-28",
                "2026-03-31",
                "2026-04-30",
                "2026-05-31",
                "2026-06-30",
                "2026-07-31",
                "2026-08-31",
                "2026-09-30",
                "2026-10-31",
                "2026-11-30",
                "2026-12-31",
                "2027-01-31",
            ]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "none_is_the_start_date",
            start: "2026-07-04",
            rule: RecurrenceRule::none(),
            expected: Some(&["2026-07-04"]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "daily_every_third_day",
            start: "2026-03-30",
            rule: RecurrenceRule::daily(3).ending_after(4),
            expected: Some(&["2026-03-30", "2026-04-02", "2026-04-05", "2026-04-08"]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "daily_never_stops_at_occurrence_cap",
            start: "2026-01-05",
            rule: RecurrenceRule::daily(1),
            expected: None,
            expected_len: Some(365),
        },
        RecurrenceCase {
            name: "daily_until_end_date_across_february",
            start: "2026-02-26",
            rule: RecurrenceRule::daily(1).ending_on(day("2026-03-02")),
            expected: Some(&[
                "2026-02-26",
                "2026-02-27",
                "2026-02-28",
                "2026-03-01",
                "2026-03-02",
            ]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "weekly_every_other_week_tue_thu",
            start: "2026-01-07",
            rule: RecurrenceRule::weekly(2, &[2, 4]).ending_after(4),
            expected: Some(&["2026-01-08", "2026-01-13", "2026-01-22", "2026-01-27"]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "weekly_without_days_uses_start_weekday",
            start: "2026-01-05",
            rule: RecurrenceRule::weekly(1, &[]).ending_after(3),
            expected: Some(&["2026-01-05", "2026-01-12", "2026-01-19"]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "weekly_mondays_for_a_year",
            start: "2026-01-05",
            rule: RecurrenceRule::weekly(1, &[1]),
            expected: None,
            expected_len: Some(53),
        },
        RecurrenceCase {
            name: "monthly_every_other_month_until_august",
            start: "2026-01-15",
            rule: RecurrenceRule::monthly(2).ending_on(day("2026-08-01")),
            expected: Some(&["2026-01-15", "2026-03-15", "2026-05-15", "2026-07-15"]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "end_date_before_start_is_empty",
            start: "2026-05-10",
            rule: RecurrenceRule::daily(1).ending_on(day("2026-05-01")),
            expected: Some(&[]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "weekly_first_weekday_after_end_date_is_empty",
            start: "2026-01-05",
            rule: RecurrenceRule::weekly(1, &[5]).ending_on(day("2026-01-06")),
            expected: Some(&[]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "end_date_past_horizon_is_capped",
            start: "2026-01-01",
            rule: RecurrenceRule::monthly(1).ending_on(day("2030-01-01")),
            expected: None,
            expected_len: Some(13),
        },
        RecurrenceCase {
            name: "zero_interval_is_clamped",
            start: "2026-01-01",
            rule: RecurrenceRule::daily(0).ending_after(3),
            expected: Some(&["2026-01-01", "2026-01-02", "2026-01-03"]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "zero_occurrences_is_clamped",
            start: "2026-01-01",
            rule: RecurrenceRule::daily(1).ending_after(0),
            expected: Some(&["2026-01-01"]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "yearly_leap_day_clamps",
            start: "2028-02-29",
            rule: RecurrenceRule::monthly(12),
            expected: Some(&["2028-02-29", "2029-02-28"]),
            expected_len: None,
        },
    ]
}

pub fn assert_case(case: &RecurrenceCase) {
    let actual = expand(day(case.start), &case.rule);

    if let Some(expected) = case.expected {
        let expected: Vec<NaiveDate> = expected.iter().copied().map(day).collect();
        assert_eq!(actual, expected, "Case {} did not match", case.name);
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            actual.len(),
            expected_len,
            "Case {} expected {} occurrences",
            case.name,
            expected_len
        );
    }
}

fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("Failed to parse date {value}: {err}"))
}
