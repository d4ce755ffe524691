use serde::{Deserialize, Serialize};

/// One row of the `facts` table as PostgREST returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRow {
    pub id: i64,
    pub text: String,
    pub source: String,
    pub category: String,
    #[serde(rename = "votesInteresting", default)]
    pub votes_interesting: u32,
    #[serde(rename = "votesMindblowing", default)]
    pub votes_mindblowing: u32,
    #[serde(rename = "votesFalse", default)]
    pub votes_false: u32,
    #[serde(rename = "createdIn", default)]
    pub created_in: i32,
}

/// Insert payload. `id` and the vote counters are assigned by the store.
#[derive(Debug, Clone, Serialize)]
pub struct NewFactRow {
    pub text: String,
    pub source: String,
    pub category: String,
    #[serde(rename = "createdIn")]
    pub created_in: i32,
}
