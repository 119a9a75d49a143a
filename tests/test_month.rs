use chrono::NaiveDate;
use rat_calendar::calendar::{CalendarState, DAY_GRID_LEN};
use rat_calendar::CalendarError;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn state() -> CalendarState {
    let mut state = CalendarState::new();
    state.set_today(Some(d(2025, 3, 15)));
    let _ = state.go_to_month(2, 2025);
    state
}

#[test]
fn test_layout_sunday() {
    let state = state();
    let days = state.calendar_days();
    assert_eq!(days.len(), DAY_GRID_LEN);
    assert!(days.iter().all(|v| v.is_some()));

    // 2025-03-01 is a saturday
    let first = days[0].unwrap();
    assert_eq!(first.date, d(2025, 2, 23));
    assert!(!first.is_current_month);
    assert_eq!(first.month0, 1);

    let mar1 = days[6].unwrap();
    assert_eq!(mar1.date, d(2025, 3, 1));
    assert!(mar1.is_current_month);
    assert_eq!((mar1.year, mar1.month0, mar1.day), (2025, 2, 1));

    assert_eq!(days[36].unwrap().date, d(2025, 3, 31));
    assert!(days[36].unwrap().is_current_month);
    assert_eq!(days[37].unwrap().date, d(2025, 4, 1));
    assert!(!days[37].unwrap().is_current_month);
    assert_eq!(days[41].unwrap().date, d(2025, 4, 5));

    // consecutive days
    for w in days.windows(2) {
        let a = w[0].unwrap().date;
        let b = w[1].unwrap().date;
        assert_eq!((b - a).num_days(), 1);
    }
    assert_eq!(days.iter().flatten().filter(|v| v.is_current_month).count(), 31);
}

#[test]
fn test_layout_monday() {
    let mut state = state();
    state.set_first_day_of_week(1).unwrap();
    let days = state.calendar_days();
    assert_eq!(days.len(), DAY_GRID_LEN);
    assert_eq!(days[0].unwrap().date, d(2025, 2, 24));
    assert_eq!(days[5].unwrap().date, d(2025, 3, 1));
}

#[test]
fn test_layout_no_leading() {
    let state = state();
    // 2015-02-01 is a sunday, 28 days
    let days = state.days_of(2015, 1).unwrap();
    assert_eq!(days.len(), DAY_GRID_LEN);
    assert_eq!(days[0].unwrap().date, d(2015, 2, 1));
    assert!(days[0].unwrap().is_current_month);
    assert_eq!(days[27].unwrap().date, d(2015, 2, 28));
    assert_eq!(days[28].unwrap().date, d(2015, 3, 1));
    assert_eq!(days[41].unwrap().date, d(2015, 3, 14));
}

#[test]
fn test_layout_leap() {
    let state = state();
    // 2024-02-01 is a thursday
    let days = state.days_of(2024, 1).unwrap();
    assert_eq!(days[0].unwrap().date, d(2024, 1, 28));
    assert_eq!(days[4].unwrap().date, d(2024, 2, 1));
    assert_eq!(days[32].unwrap().date, d(2024, 2, 29));
    assert_eq!(days[33].unwrap().date, d(2024, 3, 1));
    assert_eq!(days.iter().flatten().filter(|v| v.is_current_month).count(), 29);
}

#[test]
fn test_hide_other_month() {
    let mut state = state();
    state.set_hide_other_month_days(true);
    let days = state.calendar_days();
    assert_eq!(days.len(), DAY_GRID_LEN);
    assert!(days[0..6].iter().all(|v| v.is_none()));
    assert_eq!(days[6].unwrap().date, d(2025, 3, 1));
    assert_eq!(days[36].unwrap().date, d(2025, 3, 31));
    assert!(days[37..].iter().all(|v| v.is_none()));
}

#[test]
fn test_invalid_month() {
    let state = state();
    assert_eq!(state.days_of(2025, 12), Err(CalendarError::InvalidMonth(12)));
}

#[test]
fn test_flags_single() {
    let mut state = state();
    state.select(d(2025, 3, 10));
    state.set_focused_date(d(2025, 3, 12));
    state.set_disabled_dates([d(2025, 3, 20)]);

    let days = state.calendar_days();
    let cell = |date: NaiveDate| days.iter().flatten().find(|v| v.date == date).unwrap();

    assert!(cell(d(2025, 3, 15)).is_today);
    assert!(!cell(d(2025, 3, 14)).is_today);

    assert!(cell(d(2025, 3, 10)).is_selected);
    assert!(!cell(d(2025, 3, 10)).is_range_start);
    assert!(!cell(d(2025, 3, 10)).is_in_range);
    assert!(!cell(d(2025, 3, 11)).is_selected);

    assert!(cell(d(2025, 3, 12)).is_focused);
    assert!(!cell(d(2025, 3, 10)).is_focused);

    assert!(cell(d(2025, 3, 20)).is_disabled);
    assert!(!cell(d(2025, 3, 21)).is_disabled);
}

#[test]
fn test_flags_range() {
    let mut state = state();
    state.set_range_mode(true);
    state.select(d(2025, 3, 10));
    state.select(d(2025, 3, 15));

    let days = state.calendar_days();
    let cell = |date: NaiveDate| days.iter().flatten().find(|v| v.date == date).unwrap();

    let start = cell(d(2025, 3, 10));
    assert!(start.is_selected && start.is_range_start);
    assert!(!start.is_range_end && !start.is_in_range);

    let end = cell(d(2025, 3, 15));
    assert!(end.is_selected && end.is_range_end);
    assert!(!end.is_range_start && !end.is_in_range);

    for day in 11..15 {
        let c = cell(d(2025, 3, day));
        assert!(c.is_in_range);
        assert!(!c.is_selected);
    }
    assert!(!cell(d(2025, 3, 9)).is_in_range);
    assert!(!cell(d(2025, 3, 16)).is_in_range);

    // incomplete range
    state.select(d(2025, 3, 20));
    let days = state.calendar_days();
    let cell = |date: NaiveDate| days.iter().flatten().find(|v| v.date == date).unwrap();
    assert!(cell(d(2025, 3, 20)).is_range_start);
    assert!(!cell(d(2025, 3, 20)).is_range_end);
    assert_eq!(days.iter().flatten().filter(|v| v.is_in_range).count(), 0);
}

#[test]
fn test_flags_range_over_months() {
    let mut state = state();
    state.set_range_mode(true);
    state.set_selected_range(d(2025, 2, 20), d(2025, 4, 3));

    let days = state.calendar_days();
    assert!(days.iter().flatten().all(|v| {
        v.date < d(2025, 2, 20)
            || v.date > d(2025, 4, 3)
            || v.is_in_range
            || v.is_range_start
            || v.is_range_end
    }));
    assert!(days[0].unwrap().is_in_range);
    assert!(days[39].unwrap().is_range_end);
}

#[test]
fn test_week_numbers() {
    let mut state = state();
    state.set_first_day_of_week(1).unwrap();
    state.set_week_minimal_days(4).unwrap();
    assert_eq!(state.week_numbers(), vec![9, 10, 11, 12, 13, 14]);

    // 2021-01-01 belongs to week 53 of 2020
    assert_eq!(state.week_numbers_of(2021, 0).unwrap()[0], 53);
    // 2024-12-30 belongs to week 1 of 2025
    assert_eq!(state.week_numbers_of(2024, 11).unwrap()[5], 1);

    // us style
    state.set_first_day_of_week(0).unwrap();
    state.set_week_minimal_days(1).unwrap();
    assert_eq!(state.week_numbers_of(2025, 0).unwrap(), vec![1, 2, 3, 4, 5, 6]);
}
