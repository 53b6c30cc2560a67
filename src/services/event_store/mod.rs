// Event store accessor
// Read-only access to the remote JSON event collection

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde_json::Value;

use crate::models::event::Event;

/// Remote store accessor. Owns the HTTP client for the session; the fetched
/// collection replaces the previous one wholesale, it is never patched.
pub struct EventStore {
    client: Client,
    url: String,
}

impl EventStore {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build event store HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Load the current event collection.
    ///
    /// Fail-open: any transport error, non-success status or malformed
    /// payload resolves to an empty collection with a logged diagnostic, so
    /// the calendar always renders.
    pub async fn load_events(&self) -> Vec<Event> {
        match self.fetch_events().await {
            Ok(events) => {
                log::info!("Loaded {} events from the event store", events.len());
                events
            }
            Err(err) => {
                log::warn!("Could not load events from the event store: {:#}", err);
                Vec::new()
            }
        }
    }

    async fn fetch_events(&self) -> Result<Vec<Event>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Network error while fetching events")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Event store responded with HTTP status {}", status));
        }

        let payload: Value = response
            .json()
            .await
            .context("Event store payload is not valid JSON")?;

        events_from_payload(payload)
    }
}

/// Decode the store payload. The store returns `null` for a collection that
/// was never written; that and any other non-array payload is an empty
/// collection, not an error.
pub fn events_from_payload(payload: Value) -> Result<Vec<Event>> {
    match payload {
        Value::Array(_) => {
            serde_json::from_value(payload).context("Event store payload is not a list of events")
        }
        _ => Ok(Vec::new()),
    }
}
