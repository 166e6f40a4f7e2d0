use recur_engine::{Measure, Recurrence};

pub struct RecurrenceCase {
    pub name: &'static str,
    pub anchor: &'static str,
    pub end: Option<&'static str>,
    /// Measure name and its units, committed in order.
    pub rules: &'static [(&'static str, &'static [&'static str])],
    pub matching: &'static [&'static str],
    pub rejected: &'static [&'static str],
    pub next: Option<&'static [&'static str]>,
    pub limit: usize,
}

#[expect(clippy::too_many_lines)]
pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "every_two_days",
            anchor: "2020-01-01",
            end: None,
            rules: &[("days", &["2"])],
            matching: &["2020-01-03", "2019-12-30"],
            rejected: &["2020-01-04"],
            next: Some(&["2020-01-03", "2020-01-05", "2020-01-07"]),
            limit: 3,
        },
        RecurrenceCase {
            name: "days_union",
            anchor: "2020-01-01",
            end: None,
            rules: &[("days", &["3", "5"])],
            matching: &["2020-01-04", "2020-01-06", "2020-01-11"],
            rejected: &["2020-01-05", "2020-01-09"],
            next: Some(&["2020-01-04", "2020-01-06", "2020-01-07"]),
            limit: 3,
        },
        RecurrenceCase {
            name: "fortnightly",
            anchor: "2020-01-01",
            end: None,
            rules: &[("weeks", &["2"])],
            matching: &["2020-01-15", "2020-01-29"],
            rejected: &["2020-01-03", "2020-01-08"],
            next: Some(&["2020-01-15", "2020-01-29"]),
            limit: 2,
        },
        RecurrenceCase {
            name: "quarterly",
            anchor: "2020-01-15",
            end: None,
            rules: &[("months", &["3"])],
            matching: &["2020-04-15", "2019-10-15"],
            rejected: &["2020-02-15", "2020-04-14"],
            next: Some(&["2020-04-15", "2020-07-15", "2020-10-15"]),
            limit: 3,
        },
        RecurrenceCase {
            name: "biennial_leap_day",
            anchor: "2020-02-29",
            end: None,
            rules: &[("years", &["2"])],
            matching: &["2022-02-28"],
            rejected: &["2021-02-28", "2022-03-01"],
            next: Some(&["2022-02-28", "2024-02-29"]),
            limit: 2,
        },
        RecurrenceCase {
            name: "sundays_and_mondays",
            anchor: "2020-01-01",
            end: None,
            rules: &[("daysOfWeek", &["Sunday", "1"])],
            matching: &["2020-01-05", "2020-01-06"],
            rejected: &["2020-01-01"],
            next: Some(&["2020-01-05", "2020-01-06", "2020-01-12"]),
            limit: 3,
        },
        RecurrenceCase {
            name: "abbreviated_weekdays",
            anchor: "2020-01-01",
            end: None,
            rules: &[("dayOfWeek", &["tue", "THU"])],
            matching: &["2020-01-02", "2020-01-07"],
            rejected: &["2020-01-03"],
            next: Some(&["2020-01-02", "2020-01-07"]),
            limit: 2,
        },
        RecurrenceCase {
            name: "first_and_third_of_month",
            anchor: "2020-01-01",
            end: None,
            rules: &[("daysOfMonth", &["1", "3"])],
            matching: &["2020-01-03", "2020-02-01"],
            rejected: &["2020-01-06"],
            next: Some(&["2020-01-03", "2020-02-01", "2020-02-03"]),
            limit: 3,
        },
        RecurrenceCase {
            name: "weeks_of_month",
            anchor: "2020-01-01",
            end: None,
            rules: &[("weeksOfMonth", &["1", "3"])],
            matching: &["2020-01-06", "2020-01-21"],
            rejected: &["2020-01-26", "2020-01-01"],
            next: None,
            limit: 0,
        },
        RecurrenceCase {
            name: "fourth_wednesday",
            anchor: "2017-09-01",
            end: None,
            rules: &[("daysOfWeek", &["3"]), ("weeksOfMonthByDay", &["3"])],
            matching: &["2017-09-27", "2017-10-25", "2017-11-22", "2017-12-27"],
            rejected: &["2017-09-20", "2017-09-28"],
            next: Some(&["2017-09-27", "2017-10-25", "2017-11-22", "2017-12-27"]),
            limit: 4,
        },
        RecurrenceCase {
            name: "first_and_third_sundays_declared_out_of_order",
            anchor: "2020-01-01",
            end: None,
            rules: &[("weeksOfMonthByDay", &["0", "2"]), ("daysOfWeek", &["Sunday"])],
            matching: &["2020-01-05", "2020-01-19"],
            rejected: &["2020-01-12", "2020-01-01"],
            next: Some(&["2020-01-05", "2020-01-19", "2020-02-02", "2020-02-16"]),
            limit: 4,
        },
        RecurrenceCase {
            name: "week_of_year",
            anchor: "2020-01-01",
            end: None,
            rules: &[("weekOfYear", &["20"])],
            matching: &["2020-05-12"],
            rejected: &["2020-01-01"],
            next: Some(&["2020-05-11"]),
            limit: 1,
        },
        RecurrenceCase {
            name: "months_of_year_zero_based",
            anchor: "2020-01-01",
            end: None,
            rules: &[("monthsOfYear", &["1"])],
            matching: &["2020-02-12"],
            rejected: &["2020-01-12", "2020-03-12"],
            next: Some(&["2020-02-01"]),
            limit: 1,
        },
        RecurrenceCase {
            name: "valentines_day",
            anchor: "2020-01-01",
            end: None,
            rules: &[("daysOfMonth", &["14"]), ("monthsOfYear", &["February"])],
            matching: &["2020-02-14", "2021-02-14"],
            rejected: &["2020-03-14", "2020-02-13"],
            next: Some(&["2020-02-14", "2021-02-14"]),
            limit: 2,
        },
        RecurrenceCase {
            name: "window_cuts_enumeration_short",
            anchor: "2020-01-01",
            end: Some("2020-01-10"),
            rules: &[("days", &["3"])],
            matching: &["2020-01-01", "2020-01-10"],
            rejected: &["2020-01-13", "2019-12-29"],
            next: Some(&["2020-01-04", "2020-01-07", "2020-01-10"]),
            limit: 10,
        },
        RecurrenceCase {
            name: "no_rules_inside_window",
            anchor: "2020-01-01",
            end: Some("2020-01-03"),
            rules: &[],
            matching: &["2020-01-01", "2020-01-02", "2020-01-03"],
            rejected: &["2020-01-04"],
            next: Some(&["2020-01-02", "2020-01-03"]),
            limit: 5,
        },
    ]
}

fn build(case: &RecurrenceCase) -> Recurrence {
    let mut recurrence = match case.end {
        Some(end) => Recurrence::between(case.anchor, end),
        None => Recurrence::new(case.anchor),
    }
    .unwrap_or_else(|err| panic!("Failed to build {}: {}", case.name, err));

    for (measure, units) in case.rules {
        let measure: Measure = measure
            .parse()
            .unwrap_or_else(|err| panic!("Bad measure in {}: {}", case.name, err));
        recurrence
            .every_as(units.to_vec(), measure)
            .unwrap_or_else(|err| panic!("Failed to add {measure} rule in {}: {}", case.name, err));
    }

    recurrence
}

pub fn assert_case(case: &RecurrenceCase) {
    let recurrence = build(case);

    for date in case.matching {
        let matched = recurrence
            .matches(*date)
            .unwrap_or_else(|err| panic!("Case {} failed on {date}: {err}", case.name));
        assert!(matched, "Case {} expected {date} to match", case.name);
    }

    for date in case.rejected {
        let matched = recurrence
            .matches(*date)
            .unwrap_or_else(|err| panic!("Case {} failed on {date}: {err}", case.name));
        assert!(!matched, "Case {} expected {date} not to match", case.name);
    }

    if let Some(expected) = case.next {
        let actual = recurrence
            .next_formatted(case.limit, "%Y-%m-%d")
            .unwrap_or_else(|err| panic!("Case {} failed to enumerate: {err}", case.name));
        assert_eq!(actual, expected, "Case {} did not match", case.name);
    }
}
