// Holiday module
// National holiday entry overlaid on the fetched events

use crate::models::event::Event;

/// Color shared by every holiday entry and by the legend's holiday row.
pub const HOLIDAY_COLOR: &str = "#808080";

/// Type tag carried by generated holiday entries.
pub const HOLIDAY_KIND: &str = "feriado";

/// A national holiday. Same shape as [`Event`] plus a fixed type tag;
/// generated per year, never fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub date: String,
    pub title: String,
    pub color: String,
    pub kind: &'static str,
}

impl Holiday {
    pub fn new(date: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            color: HOLIDAY_COLOR.to_string(),
            kind: HOLIDAY_KIND,
        }
    }
}

impl From<&Holiday> for Event {
    fn from(holiday: &Holiday) -> Self {
        Event {
            date: holiday.date.clone(),
            title: holiday.title.clone(),
            color: holiday.color.clone(),
        }
    }
}
