//! Keystroke-driven airport suggestions.

use std::sync::Arc;

use skylane_core::{AirportQuery, AirportSearchReport, SkylaneError};

use crate::Skylane;
use crate::sequencer::TicketSequencer;
use crate::state::StateStore;

/// Drives airport lookups from text input and publishes the newest results.
///
/// Responses are published in issue order only: when a slower lookup
/// finishes after a newer keystroke, its results are discarded.
pub struct Suggester {
    skylane: Arc<Skylane>,
    store: Arc<StateStore>,
    seq: TicketSequencer,
}

impl Suggester {
    /// Create a suggester publishing into `store`.
    #[must_use]
    pub const fn new(skylane: Arc<Skylane>, store: Arc<StateStore>) -> Self {
        Self {
            skylane,
            store,
            seq: TicketSequencer::new(),
        }
    }

    /// Handle the current contents of the input box.
    ///
    /// Blank input clears the suggestions. Returns the published report, or
    /// `None` when nothing was published because the input was blank or a
    /// newer keystroke superseded this one.
    ///
    /// # Errors
    /// Propagates orchestrator errors (no airport-capable connector). Provider
    /// failures are carried as warnings in the published report instead.
    pub async fn on_input(&self, text: &str) -> Result<Option<AirportSearchReport>, SkylaneError> {
        let ticket = self.seq.issue();
        let Ok(query) = AirportQuery::new(text) else {
            self.store
                .update(|s| s.with_airports(AirportSearchReport::default()));
            return Ok(None);
        };

        let report = self.skylane.search_airports(&query).await?;
        // Currency is checked under the store's write lock.
        let published = self.store.update_if(|s| {
            self.seq
                .is_current(ticket)
                .then(|| s.clone().with_airports(report.clone()))
        });
        if !published {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "skylane::suggest",
                ticket = ticket.get(),
                query = %query.text(),
                "dropping superseded airport results"
            );
            return Ok(None);
        }
        Ok(Some(report))
    }
}
