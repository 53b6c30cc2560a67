// Semester view
// The year listing restricted to the active half

use crate::models::view_state::ViewState;
use crate::services::binder::EventBinder;

use super::month_block;

pub struct SemesterView;

impl SemesterView {
    pub fn render(state: &ViewState, binder: &EventBinder) -> String {
        let mut html = format!(
            r#"<div class="semestre-header"><span>{} de {}</span><button class="semestre-btn" data-action="toggle-semester">Trocar semestre</button></div>"#,
            state.half.label(),
            state.year
        );

        for month in state.half.months() {
            html.push_str(&month_block(binder, state.year, month));
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::view_state::Semester;

    #[test]
    fn test_render_first_half_months() {
        let state = ViewState::new(2025, 0);
        let binder = EventBinder::new(&[], &[]);
        let html = SemesterView::render(&state, &binder);

        assert!(html.contains("1º Semestre de 2025"));
        assert_eq!(html.matches("month-block").count(), 6);
        assert!(html.contains("Janeiro"));
        assert!(html.contains("Junho"));
        assert!(!html.contains("Julho"));
    }

    #[test]
    fn test_render_second_half_months() {
        let mut state = ViewState::new(2025, 0);
        state.half = Semester::Second;
        let binder = EventBinder::new(&[], &[]);
        let html = SemesterView::render(&state, &binder);

        assert!(html.contains("2º Semestre de 2025"));
        assert!(html.contains("Julho"));
        assert!(html.contains("Dezembro"));
        assert!(!html.contains("Junho"));
    }

    #[test]
    fn test_render_offers_toggle_hook() {
        let state = ViewState::new(2025, 0);
        let binder = EventBinder::new(&[], &[]);
        let html = SemesterView::render(&state, &binder);
        assert!(html.contains(r#"data-action="toggle-semester""#));
    }
}
