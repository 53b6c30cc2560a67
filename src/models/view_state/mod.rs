// View state module
// Explicit state holder for the mode/selection machine, so navigation is
// testable without a host surface

/// Calendar view modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Month,
    Year,
    Semester,
    Day,
}

impl ViewMode {
    /// Stable identifier used by the host mode selector.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Month => "mes",
            ViewMode::Year => "ano",
            ViewMode::Semester => "semestre",
            ViewMode::Day => "dia",
        }
    }

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Month => "Mês",
            ViewMode::Year => "Ano",
            ViewMode::Semester => "Semestre",
            ViewMode::Day => "Dia",
        }
    }
}

/// First or second half of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    /// 0-based month indexes covered by this half.
    pub fn months(self) -> std::ops::RangeInclusive<u32> {
        match self {
            Semester::First => 0..=5,
            Semester::Second => 6..=11,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Semester::First => Semester::Second,
            Semester::Second => Semester::First,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Semester::First => "1º Semestre",
            Semester::Second => "2º Semestre",
        }
    }
}

/// The single mutable state of a calendar session. Months are kept 0-based
/// to match the grid math; all date selections are canonical day keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub year: i32,
    pub month: u32,
    pub half: Semester,
    pub selected_date: Option<String>,
}

impl ViewState {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            mode: ViewMode::Month,
            year,
            month: month % 12,
            half: Semester::First,
            selected_date: None,
        }
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Move the active month by `delta` months, wrapping across year
    /// boundaries. Returns whether the active year changed, in which case
    /// the caller must regenerate the holiday set.
    pub fn step_month(&mut self, delta: i32) -> bool {
        let year_before = self.year;
        let total = self.month as i32 + delta;
        self.year += total.div_euclid(12);
        self.month = total.rem_euclid(12) as u32;
        self.year != year_before
    }

    /// Select a year directly. Returns whether it changed.
    pub fn set_year(&mut self, year: i32) -> bool {
        let changed = self.year != year;
        self.year = year;
        changed
    }

    /// Select a month directly (0-based, normalized).
    pub fn set_month(&mut self, month: u32) {
        self.month = month % 12;
    }

    pub fn toggle_semester(&mut self) {
        self.half = self.half.toggled();
    }

    pub fn select_date(&mut self, key: impl Into<String>) {
        self.selected_date = Some(key.into());
    }
}
