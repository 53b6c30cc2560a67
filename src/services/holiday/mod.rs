// Holiday service
// Fixed national holidays stamped with the active year

use crate::models::holiday::Holiday;

/// The fixed national holidays as 1-based (month, day, title) entries.
/// Moveable feasts (Carnaval, Páscoa, Corpus Christi) are deliberately not
/// modeled.
const FIXED_HOLIDAYS: [(u32, u32, &str); 8] = [
    (1, 1, "Confraternização Universal"),
    (4, 21, "Tiradentes"),
    (5, 1, "Dia do Trabalhador"),
    (9, 7, "Independência do Brasil"),
    (10, 12, "Nossa Senhora Aparecida"),
    (11, 2, "Finados"),
    (11, 15, "Proclamação da República"),
    (12, 25, "Natal"),
];

/// Generate the holiday set for a year. Pure and deterministic; the result
/// fully replaces any previously generated set.
pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
    FIXED_HOLIDAYS
        .iter()
        .map(|&(month, day, title)| {
            Holiday::new(format!("{:04}-{:02}-{:02}", year, month, day), title)
        })
        .collect()
}
