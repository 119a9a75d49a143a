use chrono::NaiveDate;
use rat_calendar::calendar::math::days_in_month;
use rat_calendar::calendar::CalendarState;
use rat_calendar::event::CalOutcome;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn state() -> CalendarState {
    let mut state = CalendarState::new();
    state.set_today(Some(d(2025, 5, 14)));
    state.go_to_today();
    state
}

#[test]
fn february() {
    assert_eq!(days_in_month(2024, 1), Ok(29));
    assert_eq!(days_in_month(2025, 1), Ok(28));
}

#[test]
fn range_swap() {
    let mut state = state();
    state.set_range_mode(true);
    state.select(d(2025, 5, 20));
    state.select(d(2025, 5, 10));
    assert_eq!(state.selected_range(), (Some(d(2025, 5, 10)), Some(d(2025, 5, 20))));
}

#[test]
fn go_to_date_out_of_bounds() {
    let mut state = state();
    state.set_min_date(Some(d(2025, 5, 5)));
    state.set_max_date(Some(d(2025, 5, 25)));
    let cursor = state.cursor_date();
    assert_eq!(state.go_to_date(d(2025, 5, 1)), CalOutcome::Unchanged);
    assert_eq!(state.cursor_date(), cursor);
}

#[test]
fn year_range_bucket() {
    let state = state();
    assert_eq!(state.year_range_base(), 2016);
    let years = state.calendar_years();
    assert_eq!(years.first().map(|v| v.year), Some(2016));
    assert_eq!(years.last().map(|v| v.year), Some(2027));
}

#[test]
fn monday_first() {
    let mut state = state();
    state.set_first_day_of_week(1).unwrap();
    let names = state.weekday_names(false);
    assert_eq!(names.first().map(|v| v.as_str()), Some("Monday"));
    assert_eq!(names.last().map(|v| v.as_str()), Some("Sunday"));
    // 2025-05-01 is a thursday
    assert_eq!(state.calendar_days()[0].unwrap().date, d(2025, 4, 28));
}

#[test]
fn disabled_sunday() {
    let mut state = state();
    state.set_disabled_weekdays([0]);
    state.set_min_date(Some(d(2025, 5, 1)));
    assert!(state.is_date_disabled(d(2025, 5, 4)));
    assert!(!state.is_date_disabled(d(2025, 5, 5)));
}

#[test]
fn focus_wraps_to_next_month() {
    let mut state = state();
    state.set_focused_date(d(2025, 5, 31));
    state.focus_next_day();
    assert_eq!(state.focused_date(), Some(d(2025, 6, 1)));
    assert_eq!(state.cursor_date(), d(2025, 6, 1));
}

#[test]
fn format_round_trip() {
    let mut state = state();
    state.set_date_format(Some("%Y-%m-%d".into())).unwrap();
    for s in ["2025-05-14", "2024-02-29", "1999-12-31"] {
        let date = state.parse_date(s).unwrap();
        assert_eq!(state.format_date(date).unwrap(), s);
    }
}
