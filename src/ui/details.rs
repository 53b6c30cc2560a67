// Details panel
// Every mode render carries one; it shows a placeholder until a day cell
// is clicked

use crate::services::binder::EventBinder;
use crate::ui::html::escape;
use crate::utils::date;

/// Details fragment with a title line and a body.
pub fn panel(title: &str, body: &str) -> String {
    format!(
        r#"<div class="details-title">{}</div><div class="details-body">{}</div>"#,
        escape(title),
        body
    )
}

/// Details fragment for one day: the `DD/MM/YYYY` label plus every bound
/// entry, or an explicit no-events message.
pub fn for_date(binder: &EventBinder, key: &str) -> String {
    let bound = binder.on_date(key);
    let label = date::display_date(key);

    if bound.is_empty() {
        return panel(&label, "Não há eventos cadastrados para esta data.");
    }

    let mut body = String::new();
    for entry in &bound {
        body.push_str(&format!(
            r#"<div class="event-item"><div class="event-color" style="background:{};"></div><span>{}</span></div>"#,
            escape(&entry.color),
            escape(&entry.title)
        ));
    }
    panel(&label, &body)
}
