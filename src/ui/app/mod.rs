// Calendar session
// Owns the fetched events, the holiday set for the active year and the
// view state; exposes one entry point per host control

use crate::models::event::Event;
use crate::models::holiday::Holiday;
use crate::models::view_state::{ViewMode, ViewState};
use crate::services::binder::EventBinder;
use crate::services::holiday::holidays_for_year;
use crate::ui::views::day_view::DayView;
use crate::ui::views::month_view::MonthView;
use crate::ui::views::semester_view::SemesterView;
use crate::ui::views::year_view::YearView;
use crate::ui::{details, legend};
use crate::utils::date;

/// Fragments produced by one render pass. The host mounts both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub calendar: String,
    pub details: String,
}

/// One calendar session. Collections are replaced wholesale: the events on
/// load, the holidays whenever the active year changes.
pub struct CalendarApp {
    events: Vec<Event>,
    holidays: Vec<Holiday>,
    pub state: ViewState,
}

impl CalendarApp {
    /// Session starting at today's month with today preselected in the
    /// date picker.
    pub fn new(events: Vec<Event>) -> Self {
        let (year, month) = date::current_year_month();
        let mut state = ViewState::new(year, month);
        state.select_date(date::today_key());
        Self::with_state(events, state)
    }

    /// Session with an explicit initial state; holidays are generated for
    /// the state's year.
    pub fn with_state(events: Vec<Event>, state: ViewState) -> Self {
        let holidays = holidays_for_year(state.year);
        Self {
            events,
            holidays,
            state,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    fn binder(&self) -> EventBinder<'_> {
        EventBinder::new(&self.events, &self.holidays)
    }

    fn refresh_holidays(&mut self) {
        log::debug!("Regenerating holidays for {}", self.state.year);
        self.holidays = holidays_for_year(self.state.year);
    }

    // -- host control entry points ------------------------------------

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.state.set_mode(mode);
    }

    pub fn set_year(&mut self, year: i32) {
        if self.state.set_year(year) {
            self.refresh_holidays();
        }
    }

    /// Direct month selection, 0-based index.
    pub fn set_month(&mut self, month: u32) {
        self.state.set_month(month);
    }

    /// Month navigation buttons (±1); wrapping across a year boundary
    /// regenerates the holiday set.
    pub fn step_month(&mut self, delta: i32) {
        if self.state.step_month(delta) {
            self.refresh_holidays();
        }
    }

    pub fn toggle_semester(&mut self) {
        self.state.toggle_semester();
    }

    /// Date picker change. An empty or malformed value falls back to the
    /// current date; anything accepted is stored in canonical form.
    pub fn pick_date(&mut self, raw: &str) {
        let key = match date::parse_date_key(raw.trim()) {
            Some(parsed) => parsed.format("%Y-%m-%d").to_string(),
            None => date::today_key(),
        };
        self.state.select_date(key);
    }

    /// Day-cell click: records the selection and returns the details
    /// fragment for that date.
    pub fn show_day(&mut self, key: &str) -> String {
        self.state.select_date(key);
        details::for_date(&self.binder(), key)
    }

    // -- rendering ----------------------------------------------------

    /// Render the active mode. Every output carries the details panel; it
    /// starts as a per-mode placeholder except in day mode, where it always
    /// reflects the active date.
    pub fn render(&self) -> RenderOutput {
        let binder = self.binder();
        match self.state.mode {
            ViewMode::Month => RenderOutput {
                calendar: MonthView::render(&self.state, &binder),
                details: details::panel(
                    "Nenhuma data selecionada",
                    "Clique em um dia com cor para ver os eventos.",
                ),
            },
            ViewMode::Year => RenderOutput {
                calendar: YearView::render(&self.state, &binder),
                details: details::panel(
                    "Visão anual",
                    "Listagem de todos os eventos e feriados do ano.",
                ),
            },
            ViewMode::Semester => RenderOutput {
                calendar: SemesterView::render(&self.state, &binder),
                details: details::panel(
                    "Visão semestral",
                    "Eventos agrupados por mês dentro do semestre selecionado.",
                ),
            },
            ViewMode::Day => {
                let key = self
                    .state
                    .selected_date
                    .clone()
                    .unwrap_or_else(date::today_key);
                RenderOutput {
                    calendar: DayView::render(&key, &binder),
                    details: details::for_date(&binder, &key),
                }
            }
        }
    }

    pub fn legend(&self) -> String {
        legend::render(&self.events, &self.holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: &str, title: &str) -> Event {
        Event::new(date, title, "#4477aa").unwrap()
    }

    fn app_at(year: i32, month: u32, events: Vec<Event>) -> CalendarApp {
        CalendarApp::with_state(events, ViewState::new(year, month))
    }

    #[test]
    fn test_with_state_generates_holidays_for_year() {
        let app = app_at(2025, 0, vec![]);
        assert_eq!(app.holidays().len(), 8);
        assert!(app.holidays().iter().all(|h| h.date.starts_with("2025-")));
    }

    #[test]
    fn test_step_month_back_regenerates_previous_year() {
        let mut app = app_at(2026, 0, vec![]);
        app.step_month(-1);
        assert_eq!((app.state.year, app.state.month), (2025, 11));
        assert!(app.holidays().iter().any(|h| h.date == "2025-12-25"));
    }

    #[test]
    fn test_step_month_forward_regenerates_next_year() {
        let mut app = app_at(2025, 11, vec![]);
        app.step_month(1);
        assert_eq!((app.state.year, app.state.month), (2026, 0));
        assert!(app.holidays().iter().all(|h| h.date.starts_with("2026-")));
    }

    #[test]
    fn test_set_year_regenerates_holidays() {
        let mut app = app_at(2025, 5, vec![]);
        app.set_year(2027);
        assert!(app.holidays().iter().all(|h| h.date.starts_with("2027-")));
    }

    #[test]
    fn test_pick_date_keeps_valid_canonical_key() {
        let mut app = app_at(2025, 0, vec![]);
        app.pick_date("2025-07-09");
        assert_eq!(app.state.selected_date.as_deref(), Some("2025-07-09"));
    }

    #[test]
    fn test_pick_date_canonicalizes_unpadded_input() {
        let mut app = app_at(2025, 0, vec![]);
        app.pick_date("2025-7-9");
        assert_eq!(app.state.selected_date.as_deref(), Some("2025-07-09"));
    }

    #[test]
    fn test_pick_date_malformed_falls_back_to_today() {
        let mut app = app_at(2025, 0, vec![]);
        app.pick_date("");
        assert_eq!(app.state.selected_date, Some(date::today_key()));

        app.pick_date("31/12/2025");
        assert_eq!(app.state.selected_date, Some(date::today_key()));
    }

    #[test]
    fn test_show_day_records_selection_and_lists_events() {
        let mut app = app_at(2025, 2, vec![event("2025-03-10", "Reunião")]);
        let fragment = app.show_day("2025-03-10");
        assert_eq!(app.state.selected_date.as_deref(), Some("2025-03-10"));
        assert!(fragment.contains("Reunião"));
        assert!(fragment.contains("10/03/2025"));
    }

    #[test]
    fn test_render_month_has_placeholder_details() {
        let app = app_at(2025, 2, vec![]);
        let output = app.render();
        assert!(output.details.contains("Nenhuma data selecionada"));
        assert!(output.calendar.contains("Março 2025"));
    }

    #[test]
    fn test_render_day_mode_details_follow_selection() {
        let mut app = app_at(2025, 11, vec![]);
        app.set_mode(ViewMode::Day);
        app.pick_date("2025-12-25");
        let output = app.render();
        assert!(output.calendar.contains("Natal"));
        assert!(output.details.contains("25/12/2025"));
        assert!(output.details.contains("Natal"));
    }

    #[test]
    fn test_render_semester_mode_toggles() {
        let mut app = app_at(2025, 0, vec![]);
        app.set_mode(ViewMode::Semester);
        app.toggle_semester();
        let output = app.render();
        assert!(output.calendar.contains("2º Semestre de 2025"));
        assert!(output.details.contains("Visão semestral"));
    }
}
