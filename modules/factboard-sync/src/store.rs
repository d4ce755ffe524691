use async_trait::async_trait;

use factboard_common::{
    current_year, Category, Fact, FactboardError, NewFact, UnknownCategory, VoteKind,
    FACT_LIST_CAP,
};
use supabase_client::{FactRow, NewFactRow, SupabaseClient};

use crate::traits::FactStore;

/// The production [`FactStore`]: Supabase's PostgREST endpoint over the
/// `facts` table.
pub struct SupabaseFactStore {
    client: SupabaseClient,
}

impl SupabaseFactStore {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FactStore for SupabaseFactStore {
    async fn select(&self, category: Option<Category>) -> Result<Vec<Fact>, FactboardError> {
        let rows = self
            .client
            .select_facts(category.map(Category::as_str), FACT_LIST_CAP)
            .await
            .map_err(|e| FactboardError::Fetch(e.to_string()))?;

        rows.into_iter()
            .map(|row| row_to_fact(row).map_err(|e| FactboardError::Fetch(e.to_string())))
            .collect()
    }

    async fn insert(&self, fact: &NewFact) -> Result<Fact, FactboardError> {
        let row = NewFactRow {
            text: fact.text.clone(),
            source: fact.source.clone(),
            category: fact.category.to_string(),
            created_in: current_year(),
        };

        let created = self
            .client
            .insert_fact(&row)
            .await
            .map_err(|e| FactboardError::Mutation(e.to_string()))?;

        row_to_fact(created).map_err(|e| FactboardError::Mutation(e.to_string()))
    }

    async fn increment_vote(&self, id: i64, kind: VoteKind) -> Result<Fact, FactboardError> {
        // PostgREST has no atomic increment without an RPC, so read the
        // current value and write value + 1. The MutationGate guarantees no
        // other write interleaves with this two-step.
        let current = self
            .client
            .get_fact(id)
            .await
            .map_err(|e| FactboardError::Mutation(e.to_string()))?
            .ok_or_else(|| FactboardError::Mutation(format!("fact {id} not found")))?;

        let new_value = match kind {
            VoteKind::Interesting => current.votes_interesting + 1,
            VoteKind::Mindblowing => current.votes_mindblowing + 1,
            VoteKind::False => current.votes_false + 1,
        };

        let updated = self
            .client
            .update_fact_votes(id, kind.column(), new_value)
            .await
            .map_err(|e| FactboardError::Mutation(e.to_string()))?;

        row_to_fact(updated).map_err(|e| FactboardError::Mutation(e.to_string()))
    }
}

fn row_to_fact(row: FactRow) -> Result<Fact, UnknownCategory> {
    Ok(Fact {
        id: row.id,
        text: row.text,
        source: row.source,
        category: row.category.parse()?,
        votes_interesting: row.votes_interesting,
        votes_mindblowing: row.votes_mindblowing,
        votes_false: row.votes_false,
        created_in: row.created_in,
    })
}
