use crate::store::{Collection, Record, Store};
use crate::types::{IssuePriority, IssueStatus};
use crate::validate::{require, Fields, Mode, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tracked problem or request.
///
/// `franchise_group_id` is a plain lookup key; it is never checked against
/// the franchise group collection and may dangle after a group is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub priority: IssuePriority,
    pub status: IssueStatus,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub franchise_group_id: Option<String>,
    pub created_at: Option<String>,
    pub resolved_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub priority: Option<IssuePriority>,
    pub status: Option<IssueStatus>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub franchise_group_id: Option<String>,
    pub created_at: Option<String>,
    pub resolved_at: Option<String>,
}

impl NewIssue {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuePatch {
    pub title: Option<String>,
    pub priority: Option<IssuePriority>,
    pub status: Option<IssueStatus>,
    pub description: Option<Option<String>>,
    pub assignee: Option<Option<String>>,
    pub franchise_group_id: Option<Option<String>>,
    pub created_at: Option<Option<String>>,
    pub resolved_at: Option<Option<String>>,
}

fn read_fields(f: &mut Fields<'_>) -> IssuePatch {
    IssuePatch {
        title: f.required_string("title"),
        priority: f.defaulted_enum("priority"),
        status: f.defaulted_enum("status"),
        description: f.nullable_string("description"),
        assignee: f.nullable_string("assignee"),
        franchise_group_id: f.nullable_string("franchiseGroupId"),
        created_at: f.nullable_string("createdAt"),
        resolved_at: f.nullable_string("resolvedAt"),
    }
}

impl Record for Issue {
    const LABEL: &'static str = "Issue";

    type New = NewIssue;
    type Patch = IssuePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewIssue) -> Self {
        Self {
            id,
            title: new.title,
            priority: new.priority.unwrap_or_default(),
            status: new.status.unwrap_or_default(),
            description: new.description,
            assignee: new.assignee,
            franchise_group_id: new.franchise_group_id,
            created_at: new.created_at,
            resolved_at: new.resolved_at,
        }
    }

    fn apply(&mut self, patch: IssuePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.assignee {
            self.assignee = v;
        }
        if let Some(v) = patch.franchise_group_id {
            self.franchise_group_id = v;
        }
        if let Some(v) = patch.created_at {
            self.created_at = v;
        }
        if let Some(v) = patch.resolved_at {
            self.resolved_at = v;
        }
    }

    fn validate_new(body: &Value) -> Result<NewIssue, ValidationError> {
        let mut f = Fields::new(body, Mode::Create)?;
        let p = read_fields(&mut f);
        f.finish()?;
        Ok(NewIssue {
            title: require(p.title, "title")?,
            priority: p.priority,
            status: p.status,
            description: p.description.flatten(),
            assignee: p.assignee.flatten(),
            franchise_group_id: p.franchise_group_id.flatten(),
            created_at: p.created_at.flatten(),
            resolved_at: p.resolved_at.flatten(),
        })
    }

    fn validate_patch(body: &Value) -> Result<IssuePatch, ValidationError> {
        let mut f = Fields::new(body, Mode::Update)?;
        let patch = read_fields(&mut f);
        f.finish()?;
        Ok(patch)
    }

    fn collection(store: &Store) -> &Collection<Self> {
        store.issues()
    }
}
