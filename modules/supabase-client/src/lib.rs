pub mod error;
pub mod types;

pub use error::{Result, SupabaseError};
pub use types::{FactRow, NewFactRow};

const TABLE: &str = "facts";

/// Thin PostgREST client scoped to the `facts` table. Every operation is a
/// single row-atomic request; there are no transactions across rows.
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    /// Read rows, optionally restricted to one category, ordered by
    /// `votesInteresting` descending and capped at `limit`.
    pub async fn select_facts(
        &self,
        category: Option<&str>,
        limit: usize,
    ) -> Result<Vec<FactRow>> {
        let mut url = format!(
            "{}?select=*&order=votesInteresting.desc&limit={limit}",
            self.table_url()
        );
        if let Some(cat) = category {
            url.push_str("&category=eq.");
            url.push_str(&urlencoding::encode(cat));
        }

        tracing::debug!(category = category.unwrap_or("all"), "Selecting facts");

        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let rows: Vec<FactRow> = resp.json().await?;
        Ok(rows)
    }

    /// Read a single row by id. Returns `None` if no row matches.
    pub async fn get_fact(&self, id: i64) -> Result<Option<FactRow>> {
        let url = format!("{}?select=*&id=eq.{id}", self.table_url());

        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let mut rows: Vec<FactRow> = resp.json().await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// Insert one row. The store assigns `id` and zeroes the vote counters.
    /// Returns the created row.
    pub async fn insert_fact(&self, row: &NewFactRow) -> Result<FactRow> {
        tracing::info!(category = row.category.as_str(), "Inserting fact");

        let resp = self
            .client
            .post(self.table_url())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let mut rows: Vec<FactRow> = resp.json().await?;
        if rows.is_empty() {
            return Err(SupabaseError::EmptyResponse);
        }
        Ok(rows.swap_remove(0))
    }

    /// Set one vote column of one row to an absolute value. Returns the
    /// updated row. The caller computes `current + 1`; the request itself is
    /// scoped to exactly one row and one column.
    pub async fn update_fact_votes(
        &self,
        id: i64,
        column: &str,
        new_value: u32,
    ) -> Result<FactRow> {
        let url = format!("{}?id=eq.{id}", self.table_url());
        let mut body = serde_json::Map::new();
        body.insert(column.to_string(), serde_json::Value::from(new_value));
        let body = serde_json::Value::Object(body);

        tracing::info!(id, column, new_value, "Updating vote counter");

        let resp = self
            .client
            .patch(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let mut rows: Vec<FactRow> = resp.json().await?;
        if rows.is_empty() {
            return Err(SupabaseError::EmptyResponse);
        }
        Ok(rows.swap_remove(0))
    }
}
