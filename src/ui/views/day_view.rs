// Day view
// Flat listing of everything bound to one selected date

use crate::services::binder::EventBinder;
use crate::ui::html::escape;
use crate::utils::date;

pub struct DayView;

impl DayView {
    pub fn render(key: &str, binder: &EventBinder) -> String {
        let mut html = format!(
            r#"<div class="view-title">Eventos em {}</div>"#,
            date::display_date(key)
        );

        let bound = binder.on_date(key);
        if bound.is_empty() {
            html.push_str(
                r#"<div class="day-view-empty">Não há eventos cadastrados para esta data.</div>"#,
            );
        } else {
            html.push_str(r#"<ul class="month-list">"#);
            for entry in &bound {
                html.push_str(&format!("<li>{}</li>", escape(&entry.title)));
            }
            html.push_str("</ul>");
        }
        html
    }
}
