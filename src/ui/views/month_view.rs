// Month view
// The full month grid with per-day event markers

use crate::models::event::Event;
use crate::models::grid::MonthGrid;
use crate::models::view_state::ViewState;
use crate::services::binder::EventBinder;
use crate::ui::html::escape;

use super::{month_name, WEEKDAY_HEADERS};

/// Display cap for the per-day indicator marks. All entries of a day stay
/// reachable through the details panel; only the visual tally caps.
const MAX_EVENT_DOTS: usize = 4;

pub struct MonthView;

impl MonthView {
    pub fn render(state: &ViewState, binder: &EventBinder) -> String {
        let grid = MonthGrid::build(state.year, state.month);

        let mut html = format!(
            r#"<div class="month-header"><button class="nav-btn" data-nav="-1">&lt;</button><span>{} {}</span><button class="nav-btn" data-nav="1">&gt;</button></div>"#,
            month_name(state.month),
            state.year
        );

        html.push_str(r#"<table class="cal-table"><thead><tr><th class="week-col">Semana</th>"#);
        for name in WEEKDAY_HEADERS {
            html.push_str(&format!("<th>{}</th>", name));
        }
        html.push_str("</tr></thead><tbody>");

        for (index, week) in grid.weeks.iter().enumerate() {
            html.push_str(&format!(r#"<tr><td class="week-col">{}</td>"#, index + 1));
            for cell in week {
                match (cell.day, cell.date_key.as_deref()) {
                    (Some(day), Some(key)) => {
                        html.push_str(&Self::day_cell(day, key, &binder.on_date(key)));
                    }
                    _ => html.push_str(r#"<td class="day-cell day-empty"></td>"#),
                }
            }
            html.push_str("</tr>");
        }

        html.push_str("</tbody></table>");
        html
    }

    fn day_cell(day: u32, key: &str, bound: &[Event]) -> String {
        if bound.is_empty() {
            return format!(
                r#"<td class="day-cell"><span class="day-number">{}</span></td>"#,
                day
            );
        }

        let tooltip = bound
            .iter()
            .map(|entry| entry.title.as_str())
            .collect::<Vec<_>>()
            .join(" / ");

        let mut html = format!(
            r#"<td class="day-cell day-has-event" data-date="{}" title="{}"><span class="day-number">{}</span>"#,
            key,
            escape(&tooltip),
            day
        );

        if let [only] = bound {
            html.push_str(&format!(
                r#"<div class="event-bar" style="background:{};"></div>"#,
                escape(&only.color)
            ));
        } else {
            html.push_str(r#"<div class="event-bar event-bar-multi">"#);
            for entry in bound.iter().take(MAX_EVENT_DOTS) {
                html.push_str(&format!(
                    r#"<div class="event-dot" style="background:{};"></div>"#,
                    escape(&entry.color)
                ));
            }
            html.push_str("</div>");
        }

        html.push_str("</td>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::holiday::holidays_for_year;

    fn event(date: &str, title: &str) -> Event {
        Event::new(date, title, "#4477aa").unwrap()
    }

    #[test]
    fn test_render_marks_event_days() {
        let events = vec![event("2024-02-29", "Fechamento")];
        let state = ViewState::new(2024, 1);
        let binder = EventBinder::new(&events, &[]);

        let html = MonthView::render(&state, &binder);
        assert_eq!(html.matches("day-has-event").count(), 1);
        assert!(html.contains(r#"data-date="2024-02-29""#));
        assert!(html.contains("Fevereiro 2024"));
    }

    #[test]
    fn test_render_single_event_shows_color_bar() {
        let events = vec![event("2025-03-10", "Reunião")];
        let state = ViewState::new(2025, 2);
        let binder = EventBinder::new(&events, &[]);

        let html = MonthView::render(&state, &binder);
        assert!(html.contains(r#"class="event-bar" style="background:#4477aa;""#));
        assert!(!html.contains("event-dot"));
    }

    #[test]
    fn test_render_caps_indicator_dots_at_four() {
        let events = (0..6)
            .map(|index| event("2025-03-10", &format!("Evento {}", index)))
            .collect::<Vec<_>>();
        let state = ViewState::new(2025, 2);
        let binder = EventBinder::new(&events, &[]);

        let html = MonthView::render(&state, &binder);
        assert_eq!(html.matches("event-dot").count(), 4);
        // The tooltip still names every event.
        assert!(html.contains("Evento 5"));
    }

    #[test]
    fn test_render_includes_holiday_days() {
        let holidays = holidays_for_year(2025);
        let state = ViewState::new(2025, 11);
        let binder = EventBinder::new(&[], &holidays);

        let html = MonthView::render(&state, &binder);
        assert!(html.contains(r#"data-date="2025-12-25""#));
        assert!(html.contains(r#"title="Natal""#));
    }

    #[test]
    fn test_render_plain_days_are_not_clickable() {
        let state = ViewState::new(2025, 2);
        let binder = EventBinder::new(&[], &[]);
        let html = MonthView::render(&state, &binder);
        assert!(!html.contains("data-date"));
        assert!(html.contains(r#"<th class="week-col">Semana</th>"#));
    }
}
