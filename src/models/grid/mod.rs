// Month grid module
// Calendar geometry: week rows of day cells, Monday-first

use crate::utils::date;

/// One slot of a month grid. A cell without a day number is padding before
/// the first or after the last day of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub day: Option<u32>,
    /// Canonical `YYYY-MM-DD` key, present exactly when `day` is.
    pub date_key: Option<String>,
}

impl CalendarCell {
    fn day_cell(day: u32, date_key: String) -> Self {
        Self {
            day: Some(day),
            date_key: Some(date_key),
        }
    }

    fn padding() -> Self {
        Self {
            day: None,
            date_key: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_none()
    }
}

/// The ordered week rows of one month, rebuilt on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 0-based month index.
    pub month: u32,
    pub weeks: Vec<[CalendarCell; 7]>,
}

impl MonthGrid {
    /// Build the grid for a month. The first row is padded up to the
    /// Monday-first weekday of day 1, the last row is padded after the final
    /// day, so the row count is always `ceil((lead + days) / 7)`.
    pub fn build(year: i32, month: u32) -> Self {
        debug_assert!(month < 12, "month index must be normalized to 0..=11");

        let lead = date::first_weekday_offset(year, month);
        let days = date::days_in_month(year, month);
        let rows = (lead + days).div_ceil(7);

        let mut weeks = Vec::with_capacity(rows as usize);
        for row in 0..rows {
            let week = std::array::from_fn(|col| {
                let slot = row * 7 + col as u32;
                if slot < lead || slot >= lead + days {
                    CalendarCell::padding()
                } else {
                    let day = slot - lead + 1;
                    CalendarCell::day_cell(day, date::date_key(year, month, day))
                }
            });
            weeks.push(week);
        }

        Self { year, month, weeks }
    }

    /// Iterate the non-padding cells in day order.
    pub fn day_cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_leap_february() {
        // 2024-02-01 is a Thursday: 3 leading pads + 29 days = 5 rows.
        let grid = MonthGrid::build(2024, 1);
        assert_eq!(grid.weeks.len(), 5);
        assert!(grid.weeks[0][0].is_empty());
        assert!(grid.weeks[0][2].is_empty());
        assert_eq!(grid.weeks[0][3].day, Some(1));
        assert_eq!(
            grid.day_cells().last().unwrap().date_key.as_deref(),
            Some("2024-02-29")
        );
    }

    #[test]
    fn test_build_month_with_no_padding() {
        // February 2021 starts on a Monday and has exactly 28 days.
        let grid = MonthGrid::build(2021, 1);
        assert_eq!(grid.weeks.len(), 4);
        assert!(grid.weeks.iter().flatten().all(|cell| !cell.is_empty()));
    }

    #[test]
    fn test_day_cells_are_contiguous() {
        let grid = MonthGrid::build(2025, 8);
        let days: Vec<u32> = grid.day_cells().map(|cell| cell.day.unwrap()).collect();
        assert_eq!(days, (1..=30).collect::<Vec<u32>>());
    }

    #[test]
    fn test_date_keys_are_zero_padded() {
        let grid = MonthGrid::build(2025, 0);
        assert_eq!(
            grid.day_cells().next().unwrap().date_key.as_deref(),
            Some("2025-01-01")
        );
    }

    #[test]
    fn test_trailing_padding_fills_last_row() {
        // September 2025: no lead (starts Monday), 30 days => 5 rows, 5 pads.
        let grid = MonthGrid::build(2025, 8);
        let last = grid.weeks.last().unwrap();
        assert_eq!(last.iter().filter(|cell| cell.is_empty()).count(), 5);
        assert_eq!(last[1].day, Some(30));
    }
}
