// View renderers, one per display mode

use crate::services::binder::EventBinder;
use crate::ui::html::escape;

pub mod day_view;
pub mod month_view;
pub mod semester_view;
pub mod year_view;

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

pub const WEEKDAY_HEADERS: [&str; 7] = ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"];

/// Name of a month by 0-based index.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[month as usize % 12]
}

/// Month section shared by the year and semester views: the month name and
/// its bound entries sorted by day, or an empty-month message.
pub(crate) fn month_block(binder: &EventBinder, year: i32, month: u32) -> String {
    let bound = binder.in_month(year, month);

    let mut html = format!(
        r#"<div class="month-block"><div class="month-name">{}</div>"#,
        month_name(month)
    );

    if bound.is_empty() {
        html.push_str(r#"<div class="day-view-empty">Sem eventos neste mês.</div>"#);
    } else {
        html.push_str(r#"<ul class="month-list">"#);
        for entry in &bound {
            let day = entry.date.split('-').nth(2).unwrap_or_default();
            html.push_str(&format!(
                "<li><strong>{}</strong> – {}</li>",
                day,
                escape(&entry.title)
            ));
        }
        html.push_str("</ul>");
    }

    html.push_str("</div>");
    html
}
