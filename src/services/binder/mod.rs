// Event binder service
// Joins the fetched events and the generated holidays onto date keys

use crate::models::event::Event;
use crate::models::holiday::Holiday;
use crate::utils::date;

/// Read-only view over the concatenated Events ∪ Holidays collection.
/// Binding is a linear filter; events come before holidays, each in input
/// order, and duplicates are kept.
pub struct EventBinder<'a> {
    events: &'a [Event],
    holidays: &'a [Holiday],
}

impl<'a> EventBinder<'a> {
    pub fn new(events: &'a [Event], holidays: &'a [Holiday]) -> Self {
        Self { events, holidays }
    }

    fn all_entries(&self) -> impl Iterator<Item = Event> + '_ {
        self.events
            .iter()
            .cloned()
            .chain(self.holidays.iter().map(Event::from))
    }

    /// Every entry bound to a date key, by exact string equality.
    pub fn on_date(&self, key: &str) -> Vec<Event> {
        self.all_entries().filter(|entry| entry.date == key).collect()
    }

    /// Every entry of a month (0-based index), sorted ascending by date key.
    /// The key is fixed-width and zero-padded, so the lexicographic sort is
    /// chronological; the sort is stable, preserving input order per day.
    pub fn in_month(&self, year: i32, month: u32) -> Vec<Event> {
        let prefix = date::month_prefix(year, month);
        let mut bound: Vec<Event> = self
            .all_entries()
            .filter(|entry| entry.date.starts_with(&prefix))
            .collect();
        bound.sort_by(|a, b| a.date.cmp(&b.date));
        bound
    }
}
