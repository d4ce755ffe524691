use std::sync::Arc;

use tracing::debug;

use factboard_common::{CategorySelection, Fact, FactboardError};

use crate::traits::FactStore;

/// Builds and issues the filtered, sorted, capped read for the current
/// category selection.
///
/// Fetches are not ordered relative to each other and cannot be cancelled:
/// when the selection changes while a fetch is outstanding, both responses
/// are applied as they arrive and the last one to arrive wins. Known hazard,
/// kept from the original design.
pub struct Fetcher {
    store: Arc<dyn FactStore>,
}

impl Fetcher {
    pub fn new(store: Arc<dyn FactStore>) -> Self {
        Self { store }
    }

    /// Issue one read. On error the caller keeps its previous list.
    pub async fn fetch(
        &self,
        selection: CategorySelection,
    ) -> Result<Vec<Fact>, FactboardError> {
        debug!(selection = %selection, "Fetching facts");
        let facts = self.store.select(selection.filter()).await?;
        debug!(selection = %selection, count = facts.len(), "Fetch resolved");
        Ok(facts)
    }
}
