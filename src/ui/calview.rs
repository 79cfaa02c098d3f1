use chrono::{Datelike, NaiveDate};

use crate::dataset::Dataset;
use crate::i18n::Catalog;
use crate::router::ViewState;

const DAY_KEYS: [(&str, &str); 7] = [
    ("translation.days.monday", "Mon"),
    ("translation.days.tuesday", "Tue"),
    ("translation.days.wednesday", "Wed"),
    ("translation.days.thursday", "Thu"),
    ("translation.days.friday", "Fri"),
    ("translation.days.saturday", "Sat"),
    ("translation.days.sunday", "Sun"),
];

/// View model of one displayed month: localized header, Monday-first day
/// names, leading blank cells and one cell per day.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarScreen {
    pub header: String,
    pub day_names: Vec<String>,
    pub leading_blanks: usize,
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub holiday: Option<HolidayMark>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HolidayMark {
    pub short_text: String,
}

pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month) = if month0 == 11 {
        (year + 1, 1)
    } else {
        (year, month0 + 2)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}

/// Day-of-week of day 1, normalized to a Monday-start week
/// (Monday is 0, Sunday is 6).
pub fn start_day(year: i32, month0: u32) -> usize {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .unwrap()
        .weekday()
        .num_days_from_monday() as usize
}

/// Pure builder of the month grid for the displayed month/year and the
/// active country. Days matching a holiday's "MM-DD" key carry the
/// localized short label; duplicate dates resolve to the first list entry.
pub fn month_screen(state: &ViewState, dataset: &Dataset, catalog: &Catalog) -> CalendarScreen {
    let header = format!(
        "{} {}",
        catalog.month_name(state.displayed_month),
        state.displayed_year
    );
    let day_names = DAY_KEYS
        .iter()
        .map(|(key, default)| catalog.t_or(key, default))
        .collect();

    let cells = (1..=days_in_month(state.displayed_year, state.displayed_month))
        .map(|day| DayCell {
            day,
            holiday: dataset
                .holiday_on(&state.country, state.displayed_month, day)
                .map(|holiday| HolidayMark {
                    short_text: catalog.t_or(
                        &format!("translation.articles.{}.shortText", holiday.article_id),
                        "Holiday",
                    ),
                }),
        })
        .collect();

    CalendarScreen {
        header,
        day_names,
        leading_blanks: start_day(state.displayed_year, state.displayed_month),
        cells,
    }
}
