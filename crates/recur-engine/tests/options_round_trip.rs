use chrono::NaiveDate;
use recur_core::{CalendarDate, DateUnit};
use recur_engine::{Measure, Recurrence, RecurrenceOptions, Rule, UnitToken};

fn sample_dates() -> Vec<NaiveDate> {
    let first = NaiveDate::parse_date("2019-12-01").expect("valid date");
    (0..500)
        .map(|offset| first.shift(offset, DateUnit::Day).expect("in range"))
        .collect()
}

fn assert_same_behavior(original: &Recurrence, restored: &Recurrence) {
    for date in sample_dates() {
        assert_eq!(
            original.matches_date(&date).expect("evaluates"),
            restored.matches_date(&date).expect("evaluates"),
            "Mismatch on {date}"
        );
    }
}

fn round_trip(recurrence: &Recurrence) -> Recurrence {
    let json = recurrence.save().to_json().expect("serializes");
    let options = RecurrenceOptions::from_json(&json).expect("parses");
    Recurrence::from_options(&options).expect("rebuilds")
}

#[test_log::test]
fn windowed_recurrence_round_trips() {
    let mut recurrence: Recurrence =
        Recurrence::between("2020-01-01", "2020-12-31").expect("valid window");
    recurrence
        .every([UnitToken::from("Monday"), UnitToken::from("Fri")])
        .and_then(Recurrence::days_of_week)
        .and_then(|recurrence| recurrence.every(2))
        .and_then(Recurrence::weeks)
        .and_then(|recurrence| recurrence.except("2020-01-13"))
        .expect("valid rules");

    let restored = round_trip(&recurrence);
    assert_eq!(restored.save(), recurrence.save());
    assert_same_behavior(&recurrence, &restored);
}

#[test]
fn anchor_only_recurrence_keeps_its_anchor() {
    let mut recurrence: Recurrence = Recurrence::new("2020-01-03").expect("valid anchor");
    recurrence.every_as(3, Measure::Days).expect("valid rule");

    let saved = recurrence.save();
    assert_eq!(saved.anchor.as_deref(), Some("2020-01-03"));
    assert!(saved.start.is_none());

    let restored = round_trip(&recurrence);
    assert_eq!(restored.anchor(), recurrence.anchor());
    assert!(restored.start_date().is_none());
    assert_same_behavior(&recurrence, &restored);
}

#[test]
fn calendar_rules_round_trip() {
    let mut recurrence: Recurrence = Recurrence::new("2020-01-01").expect("valid anchor");
    recurrence
        .every_as("Wednesday", Measure::DaysOfWeek)
        .and_then(|recurrence| recurrence.every_as([0, 3], Measure::WeeksOfMonthByDay))
        .and_then(|recurrence| recurrence.every_as(["jan", "jun"], Measure::MonthsOfYear))
        .expect("valid rules");

    let restored = round_trip(&recurrence);
    let measures: Vec<Measure> = restored.rules().iter().map(Rule::measure).collect();
    assert_eq!(
        measures,
        [Measure::DaysOfWeek, Measure::WeeksOfMonthByDay, Measure::MonthsOfYear]
    );
    assert_same_behavior(&recurrence, &restored);
}

#[test]
fn saved_json_uses_unit_flags() {
    let mut recurrence: Recurrence =
        Recurrence::between("2020-01-01", "2020-12-31").expect("valid window");
    recurrence.every_as(2, Measure::Days).expect("valid rule");

    let value: serde_json::Value =
        serde_json::from_str(&recurrence.save().to_json().expect("serializes")).expect("json");
    assert_eq!(value["rules"][0]["units"]["2"], serde_json::Value::Bool(true));
    assert_eq!(value["rules"][0]["measure"], "days");
    assert_eq!(value["start"], "2020-01-01");
}
