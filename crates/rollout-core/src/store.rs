//! In-memory record store.
//!
//! Each record type lives in its own [`Collection`], an insertion-ordered
//! map guarded by a read/write lock. Every operation takes the lock once
//! and runs to completion, so no caller ever observes a half-applied
//! update. Absence is reported through `Option`/`bool`, never as an error;
//! the HTTP layer decides what a missing id means.

use crate::deliverable::Deliverable;
use crate::franchise_group::FranchiseGroup;
use crate::initiative::Initiative;
use crate::issue::Issue;
use crate::stats::DashboardStats;
use crate::user::User;
use crate::validate::ValidationError;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

/// A record type the store manages with full CRUD.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Display name used in not-found messages, e.g. "Franchise group".
    const LABEL: &'static str;

    /// Validated creation input.
    type New: Send;
    /// Validated partial update. Fields left `None` are untouched.
    type Patch: Send;

    fn id(&self) -> &str;

    /// Build the stored record, filling defaults for absent fields.
    fn from_new(id: String, new: Self::New) -> Self;

    fn apply(&mut self, patch: Self::Patch);

    fn validate_new(body: &Value) -> Result<Self::New, ValidationError>;

    fn validate_patch(body: &Value) -> Result<Self::Patch, ValidationError>;

    fn collection(store: &Store) -> &Collection<Self>;
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub struct Collection<T> {
    records: RwLock<IndexMap<String, T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(IndexMap::new()),
        }
    }
}

impl<T: Record> Collection<T> {
    /// All records in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.read().values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.records.read().get(id).cloned()
    }

    pub fn create(&self, new: T::New) -> T {
        let id = new_id();
        let record = T::from_new(id.clone(), new);
        self.records.write().insert(id, record.clone());
        record
    }

    /// Shallow-merge `patch` onto the record. The id never changes.
    pub fn update(&self, id: &str, patch: T::Patch) -> Option<T> {
        let mut records = self.records.write();
        let record = records.get_mut(id)?;
        record.apply(patch);
        Some(record.clone())
    }

    pub fn delete(&self, id: &str) -> bool {
        self.records.write().shift_remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// `(total, matching)` taken under a single read lock.
    pub fn tally(&self, pred: impl Fn(&T) -> bool) -> (usize, usize) {
        let records = self.records.read();
        let matching = records.values().filter(|r| pred(r)).count();
        (records.len(), matching)
    }
}

/// Owns every record collection. Construct one per process (or per test)
/// and hand it to the router behind an `Arc`.
#[derive(Default)]
pub struct Store {
    initiatives: Collection<Initiative>,
    franchise_groups: Collection<FranchiseGroup>,
    deliverables: Collection<Deliverable>,
    issues: Collection<Issue>,
    users: RwLock<IndexMap<String, User>>,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the rollout program's franchise groups
    /// and deliverables.
    pub fn seeded() -> Self {
        let store = Self::new();
        crate::seed::populate(&store);
        store
    }

    pub fn records<T: Record>(&self) -> &Collection<T> {
        T::collection(self)
    }

    pub fn initiatives(&self) -> &Collection<Initiative> {
        &self.initiatives
    }

    pub fn franchise_groups(&self) -> &Collection<FranchiseGroup> {
        &self.franchise_groups
    }

    pub fn deliverables(&self) -> &Collection<Deliverable> {
        &self.deliverables
    }

    pub fn issues(&self) -> &Collection<Issue> {
        &self.issues
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(self)
    }

    // -----------------------------------------------------------------------
    // Users
    // -----------------------------------------------------------------------

    pub fn create_user(&self, username: impl Into<String>, password: impl Into<String>) -> User {
        let user = User {
            id: new_id(),
            username: username.into(),
            password: password.into(),
        };
        self.users.write().insert(user.id.clone(), user.clone());
        user
    }

    pub fn get_user(&self, id: &str) -> Option<User> {
        self.users.read().get(id).cloned()
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .values()
            .find(|u| u.username == username)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initiative::{InitiativePatch, NewInitiative};
    use crate::issue::{IssuePatch, NewIssue};
    use crate::types::{InitiativeStatus, InitiativeType, IssueStatus};

    #[test]
    fn create_then_get_returns_record_with_defaults() {
        let store = Store::new();
        let created = store
            .initiatives()
            .create(NewInitiative::new("sync", InitiativeType::Agent));
        let fetched = store.initiatives().get(&created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.status, InitiativeStatus::Pending);
        assert_eq!(fetched.description, None);
        assert_eq!(fetched.scripts, None);
    }

    #[test]
    fn ids_are_unique() {
        let store = Store::new();
        let a = store.issues().create(NewIssue::new("a"));
        let b = store.issues().create(NewIssue::new("b"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = Store::new();
        for title in ["first", "second", "third"] {
            store.issues().create(NewIssue::new(title));
        }
        let titles: Vec<String> = store.issues().list().into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn update_merges_only_present_fields() {
        let store = Store::new();
        let mut new = NewIssue::new("printer jam");
        new.assignee = Some("dana".into());
        let issue = store.issues().create(new);

        let patch = IssuePatch {
            status: Some(IssueStatus::Resolved),
            ..Default::default()
        };
        let updated = store.issues().update(&issue.id, patch).unwrap();
        assert_eq!(updated.id, issue.id);
        assert_eq!(updated.status, IssueStatus::Resolved);
        assert_eq!(updated.title, "printer jam");
        assert_eq!(updated.assignee.as_deref(), Some("dana"));
    }

    #[test]
    fn update_with_explicit_null_clears_field() {
        let store = Store::new();
        let mut new = NewIssue::new("x");
        new.assignee = Some("dana".into());
        let issue = store.issues().create(new);
        let patch = IssuePatch {
            assignee: Some(None),
            ..Default::default()
        };
        let updated = store.issues().update(&issue.id, patch).unwrap();
        assert_eq!(updated.assignee, None);
    }

    #[test]
    fn missing_ids_are_absent_not_errors() {
        let store = Store::new();
        assert!(store.initiatives().get("nope").is_none());
        assert!(store
            .initiatives()
            .update("nope", InitiativePatch::default())
            .is_none());
        assert!(!store.initiatives().delete("nope"));
    }

    #[test]
    fn delete_is_idempotent() {
        let store = Store::new();
        let issue = store.issues().create(NewIssue::new("gone"));
        assert!(store.issues().delete(&issue.id));
        assert!(!store.issues().delete(&issue.id));
        assert!(store.issues().is_empty());
    }

    #[test]
    fn records_resolves_collection_by_type() {
        let store = Store::new();
        store.issues().create(NewIssue::new("a"));
        assert_eq!(store.records::<Issue>().len(), 1);
        assert_eq!(store.records::<Initiative>().len(), 0);
    }

    #[test]
    fn seeded_store_has_groups_and_deliverables() {
        let store = Store::seeded();
        assert_eq!(store.franchise_groups().len(), 13);
        assert_eq!(store.deliverables().len(), 8);
        assert!(store.initiatives().is_empty());
        assert!(store.issues().is_empty());
    }

    #[test]
    fn users_by_id_and_username() {
        let store = Store::new();
        let user = store.create_user("ops", "hunter2");
        assert_eq!(store.get_user(&user.id).unwrap().username, "ops");
        assert_eq!(store.get_user_by_username("ops").unwrap().id, user.id);
        assert!(store.get_user_by_username("nobody").is_none());
    }
}
