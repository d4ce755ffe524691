// Test mocks for the sync core.
//
// MockFactStore is an in-memory FactStore: seeded rows behind a Mutex, a
// monotonic id counter, per-operation failure switches, and optional
// per-filter holds so a test can keep a select in flight and choose the
// order responses resolve in.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use factboard_common::{
    current_year, Category, Fact, FactboardError, NewFact, VoteKind, FACT_LIST_CAP,
};

use crate::traits::FactStore;

/// Build a fact with the given id, category and interesting-vote count;
/// everything else defaulted.
pub fn fact(id: i64, category: Category, votes_interesting: u32) -> Fact {
    Fact {
        id,
        text: format!("fact {id}"),
        source: "https://example.com".to_string(),
        category,
        votes_interesting,
        votes_mindblowing: 0,
        votes_false: 0,
        created_in: 2026,
    }
}

struct State {
    rows: Vec<Fact>,
    next_id: i64,
    fail_select: bool,
    fail_insert: bool,
    fail_update: bool,
}

pub struct MockFactStore {
    state: Mutex<State>,
    select_holds: Mutex<HashMap<Option<Category>, Arc<Notify>>>,
    insert_hold: Mutex<Option<Arc<Notify>>>,
    select_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl MockFactStore {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<Fact>) -> Self {
        let next_id = rows.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(State {
                rows,
                next_id,
                fail_select: false,
                fail_insert: false,
                fail_update: false,
            }),
            select_holds: Mutex::new(HashMap::new()),
            insert_hold: Mutex::new(None),
            select_calls: AtomicUsize::new(0),
            insert_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }

    pub fn fail_select(&self) {
        self.state.lock().unwrap().fail_select = true;
    }

    pub fn fail_insert(&self) {
        self.state.lock().unwrap().fail_insert = true;
    }

    pub fn fail_update(&self) {
        self.state.lock().unwrap().fail_update = true;
    }

    /// Hold every select with this filter until the returned handle is
    /// notified. Lets a test release two in-flight fetches in a chosen order.
    pub fn hold_select(&self, filter: Option<Category>) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.select_holds
            .lock()
            .unwrap()
            .insert(filter, notify.clone());
        notify
    }

    /// Hold every insert until the returned handle is notified. Lets a test
    /// observe the gate while a create is in flight.
    pub fn hold_insert(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.insert_hold.lock().unwrap() = Some(notify.clone());
        notify
    }

    pub fn select_count(&self) -> usize {
        self.select_calls.load(Ordering::SeqCst)
    }

    pub fn insert_count(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockFactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FactStore for MockFactStore {
    async fn select(&self, category: Option<Category>) -> Result<Vec<Fact>, FactboardError> {
        self.select_calls.fetch_add(1, Ordering::SeqCst);

        let hold = self.select_holds.lock().unwrap().get(&category).cloned();
        if let Some(notify) = hold {
            notify.notified().await;
        }

        let state = self.state.lock().unwrap();
        if state.fail_select {
            return Err(FactboardError::Fetch("mock select failure".to_string()));
        }

        let mut rows: Vec<Fact> = state
            .rows
            .iter()
            .filter(|f| category.map_or(true, |c| f.category == c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.votes_interesting.cmp(&a.votes_interesting));
        rows.truncate(FACT_LIST_CAP);
        Ok(rows)
    }

    async fn insert(&self, new_fact: &NewFact) -> Result<Fact, FactboardError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        let hold = self.insert_hold.lock().unwrap().clone();
        if let Some(notify) = hold {
            notify.notified().await;
        }

        let mut state = self.state.lock().unwrap();
        if state.fail_insert {
            return Err(FactboardError::Mutation("mock insert failure".to_string()));
        }

        let created = Fact {
            id: state.next_id,
            text: new_fact.text.clone(),
            source: new_fact.source.clone(),
            category: new_fact.category,
            votes_interesting: 0,
            votes_mindblowing: 0,
            votes_false: 0,
            created_in: current_year(),
        };
        state.next_id += 1;
        state.rows.push(created.clone());
        Ok(created)
    }

    async fn increment_vote(&self, id: i64, kind: VoteKind) -> Result<Fact, FactboardError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        let mut state = self.state.lock().unwrap();
        if state.fail_update {
            return Err(FactboardError::Mutation("mock update failure".to_string()));
        }

        let row = state
            .rows
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| FactboardError::Mutation(format!("fact {id} not found")))?;

        match kind {
            VoteKind::Interesting => row.votes_interesting += 1,
            VoteKind::Mindblowing => row.votes_mindblowing += 1,
            VoteKind::False => row.votes_false += 1,
        }
        Ok(row.clone())
    }
}
