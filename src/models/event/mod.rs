// Event module
// Calendar event as delivered by the remote store

use serde::{Deserialize, Serialize};

use crate::utils::date;

/// A calendar event. The serde renames are the wire contract of the remote
/// store and must not change.
///
/// Identity is structural (date + title + color); there is no unique id and
/// no de-duplication: two identical events both bind and both render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Calendar-day key, `YYYY-MM-DD`, compared by equality or prefix only.
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "titulo")]
    pub title: String,
    /// Hex color token (`#RRGGBB` or `#RGB`).
    #[serde(rename = "cor")]
    pub color: String,
}

impl Event {
    /// Create a validated event.
    ///
    /// # Arguments
    /// * `date` - Canonical calendar-day key (`YYYY-MM-DD`, zero-padded)
    /// * `title` - Event title (required, non-empty)
    /// * `color` - Hex color token
    ///
    /// # Returns
    /// Returns `Result<Event, String>` with validation
    pub fn new(
        date: impl Into<String>,
        title: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, String> {
        let event = Self {
            date: date.into(),
            title: title.into(),
            color: color.into(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if !date::is_date_key(&self.date) {
            return Err("Event date must be a zero-padded YYYY-MM-DD calendar day".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if !self.color.starts_with('#') || (self.color.len() != 7 && self.color.len() != 4) {
            return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
        }

        Ok(())
    }
}
