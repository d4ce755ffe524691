use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use factboard_common::{CategorySelection, Fact, FactboardError, VoteKind};

use crate::fetcher::Fetcher;
use crate::gate::MutationGate;
use crate::reconciler;
use crate::traits::FactStore;
use crate::validator;

/// The authoritative in-memory fact list plus the state driving it: the
/// active category selection, the loading flag, the submission form toggle
/// and the global mutation gate.
///
/// Cheaply cloneable; clones share state.
#[derive(Clone)]
pub struct FactBoard {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn FactStore>,
    fetcher: Fetcher,
    gate: MutationGate,
    selection: Mutex<CategorySelection>,
    facts: Mutex<Vec<Fact>>,
    loading: AtomicBool,
    show_form: AtomicBool,
}

impl FactBoard {
    pub fn new(store: Arc<dyn FactStore>) -> Self {
        Self {
            inner: Arc::new(Inner {
                fetcher: Fetcher::new(store.clone()),
                store,
                gate: MutationGate::new(),
                selection: Mutex::new(CategorySelection::All),
                facts: Mutex::new(Vec::new()),
                loading: AtomicBool::new(false),
                show_form: AtomicBool::new(false),
            }),
        }
    }

    /// Fetch the list for the current selection and replace it wholesale.
    ///
    /// On failure the previous list is left untouched and the error is
    /// surfaced for user notification. Concurrent refreshes are not ordered:
    /// each response is applied when it arrives, so the last to arrive wins
    /// even if its request was issued first.
    pub async fn refresh(&self) -> Result<(), FactboardError> {
        let selection = *self.inner.selection.lock().unwrap();

        self.inner.loading.store(true, Ordering::Release);
        let result = self.inner.fetcher.fetch(selection).await;
        self.inner.loading.store(false, Ordering::Release);

        match result {
            Ok(facts) => {
                *self.inner.facts.lock().unwrap() = facts;
                Ok(())
            }
            Err(e) => {
                warn!(selection = %selection, error = %e, "Fetch failed, keeping previous list");
                Err(e)
            }
        }
    }

    /// Change the active filter and fetch for it. An already outstanding
    /// fetch is not cancelled.
    pub async fn set_selection(
        &self,
        selection: CategorySelection,
    ) -> Result<(), FactboardError> {
        *self.inner.selection.lock().unwrap() = selection;
        self.refresh().await
    }

    /// Validate and submit a candidate fact. On success the created fact is
    /// prepended to the list and the form closes.
    pub async fn submit_fact(
        &self,
        text: &str,
        source: &str,
        category: &str,
    ) -> Result<Fact, FactboardError> {
        let new_fact =
            validator::validate(text, source, category).map_err(FactboardError::Validation)?;

        let _permit = self.inner.gate.try_begin().ok_or(FactboardError::Busy)?;

        let created = self.inner.store.insert(&new_fact).await?;
        info!(id = created.id, category = %created.category, "Fact created");

        reconciler::apply_create(&mut self.inner.facts.lock().unwrap(), created.clone());
        self.inner.show_form.store(false, Ordering::Release);
        Ok(created)
    }

    /// Cast one vote. On success the stored row replaces the list entry in
    /// place; the list is not re-sorted.
    pub async fn vote(&self, id: i64, kind: VoteKind) -> Result<Fact, FactboardError> {
        let _permit = self.inner.gate.try_begin().ok_or(FactboardError::Busy)?;

        let updated = self.inner.store.increment_vote(id, kind).await?;
        info!(id, column = kind.column(), "Vote recorded");

        reconciler::apply_vote(&mut self.inner.facts.lock().unwrap(), updated.clone());
        Ok(updated)
    }

    /// Open or close the submission form.
    pub fn toggle_form(&self) {
        self.inner.show_form.fetch_xor(true, Ordering::AcqRel);
    }

    pub fn show_form(&self) -> bool {
        self.inner.show_form.load(Ordering::Acquire)
    }

    /// Snapshot of the current list.
    pub fn facts(&self) -> Vec<Fact> {
        self.inner.facts.lock().unwrap().clone()
    }

    pub fn fact_count(&self) -> usize {
        self.inner.facts.lock().unwrap().len()
    }

    pub fn selection(&self) -> CategorySelection {
        *self.inner.selection.lock().unwrap()
    }

    /// Whether a fetch is outstanding; the UI shows a loader instead of the
    /// list while true.
    pub fn is_loading(&self) -> bool {
        self.inner.loading.load(Ordering::Acquire)
    }

    /// Whether a create or vote write is outstanding; the form and all vote
    /// controls are disabled while true.
    pub fn is_uploading(&self) -> bool {
        self.inner.gate.is_uploading()
    }
}
