//!
//! Locale aware formatting.
//!
//! Uses chrono's localized formatting with the locale data from
//! [pure-rust-locales](https://docs.rs/pure-rust-locales).
//!

use crate::calendar::week;
use crate::CalendarError;
use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate, Weekday};
use pure_rust_locales::{locale_match, Locale};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Style for names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NameStyle {
    /// Full name.
    Long,
    /// Abbreviation.
    Short,
    /// chrono has no narrow names, this falls back to Short.
    Narrow,
}

/// Style for numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericStyle {
    /// No padding.
    Numeric,
    /// Two digits.
    TwoDigit,
}

/// Style for the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MonthStyle {
    Numeric,
    TwoDigit,
    Long,
    Short,
    Narrow,
}

/// Which parts of the date are shown and how.
///
/// The order of the parts is taken from the locale.
/// If no part is set at all, day, month and year are shown as
/// plain numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    pub weekday: Option<NameStyle>,
    pub year: Option<NumericStyle>,
    pub month: Option<MonthStyle>,
    pub day: Option<NumericStyle>,
}

/// How to format a date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DateFormat {
    /// chrono strftime pattern.
    Pattern(String),
    /// Parts of the date, ordered by locale.
    Options(FormatOptions),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Day,
    Month,
    Year,
}

/// Languages that default to a long month name.
const LONG_MONTH_LANGUAGES: &[&str] = &[
    "de", "fr", "es", "it", "nl", "pt", "pl", "sv", "da", "nb", "nn", "fi", "cs", "sk", "hu",
    "ro", "hr", "sl", "ca", "el",
];

/// Long month languages that write the day as an ordinal, "15. März 2025".
const DAY_DOT_LANGUAGES: &[&str] = &["de", "da", "nb", "nn", "fi", "cs", "sk", "sl", "hr"];

impl FormatOptions {
    /// Long weekday, day, long month and year.
    pub fn long() -> Self {
        Self {
            weekday: Some(NameStyle::Long),
            year: Some(NumericStyle::Numeric),
            month: Some(MonthStyle::Long),
            day: Some(NumericStyle::Numeric),
        }
    }

    /// Day, long month and year.
    pub fn long_month() -> Self {
        Self {
            weekday: None,
            year: Some(NumericStyle::Numeric),
            month: Some(MonthStyle::Long),
            day: Some(NumericStyle::Numeric),
        }
    }

    /// Builds a chrono pattern with the part order of the locale.
    pub fn to_pattern(&self, locale: Locale) -> String {
        let mut opts = *self;
        if opts.year.is_none() && opts.month.is_none() && opts.day.is_none() {
            if opts.weekday.is_none() {
                opts.year = Some(NumericStyle::Numeric);
                opts.month = Some(MonthStyle::Numeric);
                opts.day = Some(NumericStyle::Numeric);
            }
        }

        let (order, sep) = locale_order(locale);

        let day = opts.day.map(|v| match v {
            NumericStyle::Numeric => "%-d",
            NumericStyle::TwoDigit => "%d",
        });
        let year = opts.year.map(|v| match v {
            NumericStyle::Numeric => "%Y",
            NumericStyle::TwoDigit => "%y",
        });
        let month = opts.month.map(|v| match v {
            MonthStyle::Numeric => "%-m",
            MonthStyle::TwoDigit => "%m",
            MonthStyle::Long => "%B",
            MonthStyle::Short | MonthStyle::Narrow => "%b",
        });
        let textual = matches!(
            opts.month,
            Some(MonthStyle::Long) | Some(MonthStyle::Short) | Some(MonthStyle::Narrow)
        );

        let mut parts = Vec::new();
        for p in order {
            let v = match p {
                Part::Day => day,
                Part::Month => month,
                Part::Year => year,
            };
            if let Some(v) = v {
                parts.push((p, v));
            }
        }

        let mut pattern = String::new();
        if textual {
            // "May 10, 2025" vs "10 May 2025"
            let us_style = order == [Part::Month, Part::Day, Part::Year];
            for (i, (p, v)) in parts.iter().enumerate() {
                if i > 0 {
                    if us_style && *p == Part::Year && parts[i - 1].0 == Part::Day {
                        pattern.push_str(", ");
                    } else {
                        pattern.push(' ');
                    }
                }
                pattern.push_str(v);
            }
        } else {
            for (i, (_, v)) in parts.iter().enumerate() {
                if i > 0 {
                    pattern.push_str(&sep);
                }
                pattern.push_str(v);
            }
        }

        if let Some(weekday) = opts.weekday {
            let w = match weekday {
                NameStyle::Long => "%A",
                NameStyle::Short | NameStyle::Narrow => "%a",
            };
            if pattern.is_empty() {
                pattern.push_str(w);
            } else {
                pattern.insert_str(0, ", ");
                pattern.insert_str(0, w);
            }
        }

        pattern
    }
}

/// Order of day, month and year and the separator used by the
/// numeric date format of the locale.
fn locale_order(locale: Locale) -> ([Part; 3], String) {
    let d_fmt: &str = locale_match!(locale => LC_TIME::D_FMT);

    let mut order = Vec::new();
    let mut sep = String::new();
    let mut literal = String::new();

    let mut chars = d_fmt.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            let mut spec = chars.next();
            // padding flags
            while matches!(spec, Some('-') | Some('_') | Some('0') | Some('E') | Some('O')) {
                spec = chars.next();
            }
            let part = match spec {
                Some('d') | Some('e') => Some(Part::Day),
                Some('m') | Some('b') | Some('B') => Some(Part::Month),
                Some('Y') | Some('y') => Some(Part::Year),
                _ => None,
            };
            if let Some(part) = part {
                if !order.contains(&part) {
                    if !order.is_empty() && sep.is_empty() {
                        sep = literal.clone();
                    }
                    order.push(part);
                }
            }
            literal.clear();
        } else {
            literal.push(c);
        }
    }

    match order.as_slice() {
        [a, b, c] => (
            [*a, *b, *c],
            if sep.is_empty() { "/".to_string() } else { sep },
        ),
        _ => ([Part::Month, Part::Day, Part::Year], "/".to_string()),
    }
}

impl DateFormat {
    /// chrono pattern for this format.
    pub fn pattern(&self, locale: Locale) -> String {
        match self {
            DateFormat::Pattern(p) => p.clone(),
            DateFormat::Options(o) => o.to_pattern(locale),
        }
    }

    /// Default format for a locale.
    ///
    /// Most european languages use a long month name, some of them
    /// with a dot after the day. Everything else uses the numeric
    /// date format of the locale.
    pub fn locale_default(locale_tag: &str, locale: Locale) -> DateFormat {
        let language = locale_tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if DAY_DOT_LANGUAGES.contains(&language.as_str()) {
            DateFormat::Pattern("%-d. %B %Y".to_string())
        } else if LONG_MONTH_LANGUAGES.contains(&language.as_str()) {
            DateFormat::Options(FormatOptions::long_month())
        } else {
            let d_fmt: &str = locale_match!(locale => LC_TIME::D_FMT);
            DateFormat::Pattern(d_fmt.to_string())
        }
    }
}

/// Parses a BCP-47 like tag, e.g. `en-US`, `de_AT` or just `fr`.
pub fn parse_locale(tag: &str) -> Option<Locale> {
    // drop encoding and modifier, "de_DE.UTF-8@euro"
    let tag = tag.split(['.', '@']).next().unwrap_or_default().trim();
    if tag.is_empty() {
        return None;
    }
    let tag = tag.replace('-', "_");
    if let Ok(locale) = Locale::try_from(tag.as_str()) {
        return Some(locale);
    }
    if !tag.contains('_') {
        let region = format!("{}_{}", tag.to_ascii_lowercase(), tag.to_ascii_uppercase());
        if let Ok(locale) = Locale::try_from(region.as_str()) {
            return Some(locale);
        }
    }
    None
}

/// Parses the locale tag. Unknown tags fall back to the platform
/// locale and then to POSIX.
pub fn resolve_locale(tag: &str) -> Locale {
    if let Some(locale) = parse_locale(tag) {
        return locale;
    }
    log::debug!("unknown locale {:?}, use platform locale", tag);
    sys_locale::get_locale()
        .and_then(|v| parse_locale(&v))
        .unwrap_or(Locale::POSIX)
}

/// Checks if chrono can use the pattern.
pub fn validate_pattern(pattern: &str, locale: Locale) -> Result<(), CalendarError> {
    if StrftimeItems::new_with_locale(pattern, locale).any(|v| v == Item::Error) {
        Err(CalendarError::InvalidPattern(pattern.to_string()))
    } else {
        Ok(())
    }
}

/// Formatting capability used by the calendar.
///
/// The default is [ChronoFormatter]. Implement this to plug in a
/// different i18n library.
pub trait DateFormatter {
    /// Format the date.
    fn format(
        &self,
        date: NaiveDate,
        format: &DateFormat,
        locale: Locale,
    ) -> Result<String, CalendarError>;

    /// Parse a date.
    fn parse(
        &self,
        text: &str,
        format: &DateFormat,
        locale: Locale,
    ) -> Result<NaiveDate, CalendarError>;

    /// Names of the 12 months, January first.
    fn month_names(&self, short: bool, locale: Locale) -> Vec<String>;

    /// Names of the 7 weekdays, starting with `first_weekday`.
    fn weekday_names(&self, short: bool, first_weekday: Weekday, locale: Locale) -> Vec<String>;

    /// Week number of the date.
    fn week_number(&self, date: NaiveDate, first_weekday: Weekday, minimal_days: u8) -> u32 {
        week::week_number(date, first_weekday, minimal_days)
    }
}

/// Formats with chrono.
///
/// Parsing only understands numeric parts and english names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChronoFormatter;

impl ChronoFormatter {
    pub fn new() -> Self {
        Self
    }

    fn checked_pattern(format: &DateFormat, locale: Locale) -> Result<String, CalendarError> {
        let pattern = format.pattern(locale);
        validate_pattern(pattern.as_str(), locale)?;
        Ok(pattern)
    }
}

impl DateFormatter for ChronoFormatter {
    fn format(
        &self,
        date: NaiveDate,
        format: &DateFormat,
        locale: Locale,
    ) -> Result<String, CalendarError> {
        let pattern = Self::checked_pattern(format, locale)?;
        let mut buf = String::new();
        write!(buf, "{}", date.format_localized(pattern.as_str(), locale))
            .map_err(|_| CalendarError::InvalidPattern(pattern.clone()))?;
        Ok(buf)
    }

    fn parse(
        &self,
        text: &str,
        format: &DateFormat,
        locale: Locale,
    ) -> Result<NaiveDate, CalendarError> {
        let pattern = Self::checked_pattern(format, locale)?;
        NaiveDate::parse_from_str(text.trim(), pattern.as_str())
            .map_err(|_| CalendarError::ParseDate(text.to_string()))
    }

    fn month_names(&self, short: bool, locale: Locale) -> Vec<String> {
        let fmt = if short { "%b" } else { "%B" };
        (1..=12)
            .filter_map(|m| NaiveDate::from_ymd_opt(2000, m, 1))
            .map(|d| d.format_localized(fmt, locale).to_string())
            .collect()
    }

    fn weekday_names(&self, short: bool, first_weekday: Weekday, locale: Locale) -> Vec<String> {
        let fmt = if short { "%a" } else { "%A" };
        // 2000-01-02 is a sunday.
        let Some(sunday) = NaiveDate::from_ymd_opt(2000, 1, 2) else {
            return Vec::new();
        };
        let start = sunday + Days::new(first_weekday.num_days_from_sunday() as u64);
        start
            .iter_days()
            .take(7)
            .map(|d| d.format_localized(fmt, locale).to_string())
            .collect()
    }
}
