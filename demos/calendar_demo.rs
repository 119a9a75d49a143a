//!
//! Prints a calendar to stdout and walks through a few commands.
//!
//! The log goes to `calendar.log`.
//!

use chrono::NaiveDate;
use rat_calendar::calendar::{CalendarOptions, CalendarState, FocusMove};
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let today = chrono::Local::now().date_naive();

    let options = CalendarOptions {
        locale: std::env::args().nth(1).unwrap_or_else(|| "en-US".to_string()),
        first_day_of_week: 1,
        is_range_selection: true,
        min_date: today.checked_sub_days(chrono::Days::new(90)),
        disabled_days_of_week: vec![0],
        ..Default::default()
    };
    let mut state = CalendarState::with_options(&options)?;

    print_days(&state);

    state.move_focus(FocusMove::Right);
    state.select_focused_date();
    state.move_focus(FocusMove::Down);
    state.move_focus(FocusMove::Down);
    state.select_focused_date();
    println!();
    println!("range: {}", state.formatted_value()?);
    println!("focus: {}", state.focused_label().unwrap_or_default());
    println!();
    print_days(&state);

    state.go_to_next_month();
    println!();
    print_days(&state);

    println!();
    print_months(&state);
    println!();
    print_years(&state);

    if let Some(date) = NaiveDate::from_ymd_opt(2000, 1, 1) {
        println!();
        println!("2000-01-01: {}", state.accessible_label(date)?);
    }

    Ok(())
}

fn print_days(state: &CalendarState) {
    let names = state.month_names(false);
    println!(
        "{} {}",
        names
            .get(state.cursor_month0() as usize)
            .map(|v| v.as_str())
            .unwrap_or_default(),
        state.cursor_year()
    );

    print!("    ");
    for name in state.weekday_names(true) {
        print!("{:>4}", name.chars().take(3).collect::<String>());
    }
    println!();

    let weeks = state.week_numbers();
    for (row, days) in state.calendar_days().chunks(7).enumerate() {
        print!("{:>3} ", weeks.get(row).copied().unwrap_or_default());
        for day in days {
            match day {
                Some(day) => {
                    let mark = if day.is_range_start || day.is_range_end {
                        '*'
                    } else if day.is_in_range {
                        '-'
                    } else if day.is_disabled {
                        'x'
                    } else if !day.is_current_month {
                        '.'
                    } else if day.is_today {
                        '!'
                    } else {
                        ' '
                    };
                    print!("{:>3}{}", day.day, mark);
                }
                None => print!("    "),
            }
        }
        println!();
    }
}

fn print_months(state: &CalendarState) {
    for months in state.calendar_months().chunks(4) {
        for month in months {
            let mark = if month.is_disabled {
                'x'
            } else if month.is_selected {
                '*'
            } else if month.is_current {
                '!'
            } else {
                ' '
            };
            print!("{:>12}{}", month.name, mark);
        }
        println!();
    }
}

fn print_years(state: &CalendarState) {
    for years in state.calendar_years().chunks(4) {
        for year in years {
            let mark = if year.is_disabled {
                'x'
            } else if year.is_selected {
                '*'
            } else if year.is_current {
                '!'
            } else {
                ' '
            };
            print!("{:>6}{}", year.label, mark);
        }
        println!();
    }
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("calendar.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
