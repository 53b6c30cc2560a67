// Year view
// Twelve month sections listing the bound entries of each

use crate::models::view_state::ViewState;
use crate::services::binder::EventBinder;

use super::month_block;

pub struct YearView;

impl YearView {
    pub fn render(state: &ViewState, binder: &EventBinder) -> String {
        let mut html = format!(r#"<div class="view-title">Eventos de {}</div>"#, state.year);
        for month in 0..12 {
            html.push_str(&month_block(binder, state.year, month));
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::Event;
    use crate::services::holiday::holidays_for_year;

    #[test]
    fn test_render_emits_twelve_month_sections() {
        let state = ViewState::new(2025, 0);
        let binder = EventBinder::new(&[], &[]);
        let html = YearView::render(&state, &binder);

        assert_eq!(html.matches("month-block").count(), 12);
        assert!(html.contains("Eventos de 2025"));
        assert!(html.contains("Janeiro"));
        assert!(html.contains("Dezembro"));
    }

    #[test]
    fn test_render_places_entries_in_their_month() {
        let events = vec![Event::new("2025-06-12", "Festa junina", "#ff9900").unwrap()];
        let holidays = holidays_for_year(2025);
        let state = ViewState::new(2025, 0);
        let binder = EventBinder::new(&events, &holidays);

        let html = YearView::render(&state, &binder);
        let junho = html.find("Junho").unwrap();
        let julho = html.find("Julho").unwrap();
        let festa = html.find("Festa junina").unwrap();
        assert!(junho < festa && festa < julho);
        assert!(html.contains("Natal"));
    }
}
