// Trait abstraction over the remote fact store.
//
// FactStore exposes exactly the three row-atomic operations the sync core
// needs: filtered read, single-row insert, single-column vote increment.
// This enables deterministic testing with MockFactStore: no network, no
// Supabase project. `cargo test` in seconds.

use async_trait::async_trait;

use factboard_common::{Category, Fact, FactboardError, NewFact, VoteKind};

#[async_trait]
pub trait FactStore: Send + Sync {
    /// Read facts, optionally restricted to one category. Implementations
    /// return rows ordered by `votesInteresting` descending, capped at
    /// [`factboard_common::FACT_LIST_CAP`].
    async fn select(&self, category: Option<Category>) -> Result<Vec<Fact>, FactboardError>;

    /// Insert a validated fact. The store assigns the id and initializes all
    /// three vote counters to zero. Returns the created row.
    async fn insert(&self, fact: &NewFact) -> Result<Fact, FactboardError>;

    /// Bump one vote counter of one fact by exactly one. Returns the updated
    /// row.
    async fn increment_vote(&self, id: i64, kind: VoteKind) -> Result<Fact, FactboardError>;
}
