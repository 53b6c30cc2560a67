// Legend renderer
// One entry per distinct color, labelled with the first title seen

use crate::models::event::Event;
use crate::models::holiday::{Holiday, HOLIDAY_COLOR};
use crate::ui::html::escape;

/// Render the color legend. Entries keep first-seen order; when holidays
/// exist, the holiday color is labelled "Feriado nacional" even if an event
/// claimed it first.
pub fn render(events: &[Event], holidays: &[Holiday]) -> String {
    let mut entries: Vec<(String, String)> = Vec::new();
    for event in events {
        if !entries.iter().any(|(color, _)| color == &event.color) {
            entries.push((event.color.clone(), event.title.clone()));
        }
    }

    if !holidays.is_empty() {
        match entries.iter_mut().find(|(color, _)| color == HOLIDAY_COLOR) {
            Some(entry) => entry.1 = "Feriado nacional".to_string(),
            None => entries.push((HOLIDAY_COLOR.to_string(), "Feriado nacional".to_string())),
        }
    }

    let mut html = String::from(r#"<div class="legend-title">Legenda de eventos</div>"#);
    if entries.is_empty() {
        html.push_str(
            r#"<div class="legend-empty">Sem eventos cadastrados ainda. Use a tela de administrador.</div>"#,
        );
    } else {
        for (color, title) in &entries {
            html.push_str(&format!(
                r#"<div class="legend-item"><div class="legend-color" style="background:{};"></div><span>{}</span></div>"#,
                escape(color),
                escape(title)
            ));
        }
    }
    html
}
