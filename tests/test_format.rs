use chrono::{NaiveDate, Weekday};
use rat_calendar::calendar::{
    parse_locale, CalendarState, ChronoFormatter, DateFormat, DateFormatter, FormatOptions,
    MonthStyle, NumericStyle,
};
use rat_calendar::{CalendarError, Locale};

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
fn test_names() {
    let f = ChronoFormatter::new();
    let names = f.month_names(false, Locale::en_US);
    assert_eq!(names.len(), 12);
    assert_eq!(names[0], "January");
    assert_eq!(f.month_names(true, Locale::en_US)[1], "Feb");
    assert_eq!(f.month_names(false, Locale::de_DE)[2], "März");

    let names = f.weekday_names(true, Weekday::Sun, Locale::en_US);
    assert_eq!(names, vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
    let names = f.weekday_names(false, Weekday::Mon, Locale::en_US);
    assert_eq!(names[0], "Monday");
    assert_eq!(names[6], "Sunday");
}

#[test]
fn test_state_names() {
    let mut state = state();
    state.set_first_day_of_week(1).unwrap();
    assert_eq!(state.weekday_names(true)[0], "Mon");
    assert_eq!(state.month_names(true)[11], "Dec");
}

#[test]
fn test_locale_default() {
    let mut state = state();
    assert_eq!(state.locale(), Locale::en_US);
    assert_eq!(state.format_date(d(2025, 3, 15)).unwrap(), "03/15/2025");

    state.set_locale("de-DE");
    assert_eq!(state.locale_tag(), "de-DE");
    assert_eq!(state.locale(), Locale::de_DE);
    assert_eq!(
        state.effective_format(),
        DateFormat::Pattern("%-d. %B %Y".into())
    );
    assert_eq!(state.format_date(d(2025, 3, 15)).unwrap(), "15. März 2025");

    state.set_locale("fr-FR");
    assert_eq!(
        state.effective_format(),
        DateFormat::Options(FormatOptions::long_month())
    );
    assert_eq!(state.format_date(d(2025, 3, 15)).unwrap(), "15 mars 2025");
}

#[test]
fn test_explicit_wins() {
    let mut state = state();
    state.set_date_format_options(Some(FormatOptions {
        year: Some(NumericStyle::Numeric),
        month: Some(MonthStyle::TwoDigit),
        day: Some(NumericStyle::TwoDigit),
        ..Default::default()
    }));
    assert_eq!(state.format_date(d(2025, 3, 5)).unwrap(), "03/05/2025");

    // survives a locale change
    state.set_locale("de-DE");
    assert_eq!(state.format_date(d(2025, 3, 5)).unwrap(), "05.03.2025");

    // the pattern wins over the options
    state.set_date_format(Some("%Y-%m-%d".into())).unwrap();
    assert_eq!(state.format_date(d(2025, 3, 5)).unwrap(), "2025-03-05");
    assert_eq!(state.date_format(), Some("%Y-%m-%d"));

    state.set_date_format(None).unwrap();
    state.set_date_format_options(None);
    assert_eq!(state.format_date(d(2025, 3, 5)).unwrap(), "5. März 2025");
}

#[test]
fn test_invalid_pattern() {
    let mut state = state();
    assert_eq!(
        state.set_date_format(Some("%Q".into())),
        Err(CalendarError::InvalidPattern("%Q".into()))
    );
    assert_eq!(state.date_format(), None);
}

#[test]
fn test_parse() {
    let mut state = state();
    assert_eq!(state.parse_date("03/15/2025"), Ok(d(2025, 3, 15)));
    assert_eq!(state.parse_date(" 03/15/2025 "), Ok(d(2025, 3, 15)));
    assert_eq!(
        state.parse_date("15.03.2025"),
        Err(CalendarError::ParseDate("15.03.2025".into()))
    );

    state.set_date_format(Some("%Y-%m-%d".into())).unwrap();
    assert_eq!(state.parse_date("2025-03-15"), Ok(d(2025, 3, 15)));
}

#[test]
fn test_formatted_value() {
    let mut state = state();
    assert_eq!(state.formatted_value().unwrap(), "");
    state.select(d(2025, 3, 15));
    assert_eq!(state.formatted_value().unwrap(), "03/15/2025");

    state.set_range_mode(true);
    assert_eq!(state.formatted_value().unwrap(), "");
    state.select(d(2025, 3, 10));
    assert_eq!(state.formatted_value().unwrap(), "03/10/2025");
    state.select(d(2025, 3, 12));
    assert_eq!(state.formatted_value().unwrap(), "03/10/2025 - 03/12/2025");
}

#[test]
fn test_accessible_label() {
    let mut state = state();
    assert_eq!(
        state.accessible_label(d(2025, 3, 15)).unwrap(),
        "Saturday, March 15, 2025"
    );
    state.set_locale("fr-FR");
    assert_eq!(
        state.accessible_label(d(2025, 3, 15)).unwrap(),
        "samedi, 15 mars 2025"
    );
}

#[test]
fn test_format_options() {
    let p = FormatOptions::long().to_pattern(Locale::en_US);
    assert_eq!(p, "%A, %B %-d, %Y");
    let p = FormatOptions::long_month().to_pattern(Locale::de_DE);
    assert_eq!(p, "%-d %B %Y");
    let p = FormatOptions::default().to_pattern(Locale::en_US);
    assert_eq!(p, "%-m/%-d/%Y");
}

#[test]
fn test_parse_locale() {
    assert_eq!(parse_locale("en-US"), Some(Locale::en_US));
    assert_eq!(parse_locale("de_AT"), Some(Locale::de_AT));
    assert_eq!(parse_locale("de_DE.UTF-8"), Some(Locale::de_DE));
    assert_eq!(parse_locale("fr"), Some(Locale::fr_FR));
    assert_eq!(parse_locale("xx-YY"), None);
    assert_eq!(parse_locale(""), None);
}

#[test]
fn test_custom_formatter() {
    #[derive(Debug, Default)]
    struct IsoFormatter;

    impl DateFormatter for IsoFormatter {
        fn format(
            &self,
            date: NaiveDate,
            _format: &DateFormat,
            _locale: Locale,
        ) -> Result<String, CalendarError> {
            Ok(date.format("%Y-%m-%d").to_string())
        }

        fn parse(
            &self,
            text: &str,
            _format: &DateFormat,
            _locale: Locale,
        ) -> Result<NaiveDate, CalendarError> {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|_| CalendarError::ParseDate(text.into()))
        }

        fn month_names(&self, _short: bool, _locale: Locale) -> Vec<String> {
            (1..=12).map(|v| format!("M{}", v)).collect()
        }

        fn weekday_names(&self, _short: bool, _first: Weekday, _locale: Locale) -> Vec<String> {
            (0..7).map(|v| format!("D{}", v)).collect()
        }
    }

    let mut state = CalendarState::with_formatter(IsoFormatter);
    state.set_today(Some(d(2025, 3, 15)));
    state.go_to_today();
    state.select(d(2025, 3, 15));
    assert_eq!(state.formatted_value().unwrap(), "2025-03-15");
    assert_eq!(state.calendar_months()[2].name, "M3");
    assert_eq!(state.week_number(d(2025, 3, 15)), 11);
}
