use crate::store::{Collection, Record, Store};
use crate::types::{InitiativeStatus, InitiativeType};
use crate::validate::{require, Fields, Mode, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tracked agent, workflow or integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: InitiativeType,
    pub status: InitiativeStatus,
    pub description: Option<String>,
    pub category: Option<String>,
    pub purpose: Option<String>,
    pub pid: Option<String>,
    pub last_updated: Option<String>,
    pub scripts: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInitiative {
    pub name: String,
    pub kind: InitiativeType,
    pub status: Option<InitiativeStatus>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub purpose: Option<String>,
    pub pid: Option<String>,
    pub last_updated: Option<String>,
    pub scripts: Option<Vec<String>>,
}

impl NewInitiative {
    pub fn new(name: impl Into<String>, kind: InitiativeType) -> Self {
        Self {
            name: name.into(),
            kind,
            status: None,
            description: None,
            category: None,
            purpose: None,
            pid: None,
            last_updated: None,
            scripts: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitiativePatch {
    pub name: Option<String>,
    pub kind: Option<InitiativeType>,
    pub status: Option<InitiativeStatus>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub purpose: Option<Option<String>>,
    pub pid: Option<Option<String>>,
    pub last_updated: Option<Option<String>>,
    pub scripts: Option<Option<Vec<String>>>,
}

impl InitiativePatch {
    /// Start/stop shorthand: set the status and stamp `lastUpdated`.
    pub fn status_change(status: InitiativeStatus, at: DateTime<Utc>) -> Self {
        Self {
            status: Some(status),
            last_updated: Some(Some(at.to_rfc3339())),
            ..Default::default()
        }
    }
}

fn read_fields(f: &mut Fields<'_>) -> InitiativePatch {
    InitiativePatch {
        name: f.required_string("name"),
        kind: f.required_enum("type"),
        status: f.defaulted_enum("status"),
        description: f.nullable_string("description"),
        category: f.nullable_string("category"),
        purpose: f.nullable_string("purpose"),
        pid: f.nullable_string("pid"),
        last_updated: f.nullable_string("lastUpdated"),
        scripts: f.nullable_strings("scripts"),
    }
}

impl Record for Initiative {
    const LABEL: &'static str = "Initiative";

    type New = NewInitiative;
    type Patch = InitiativePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewInitiative) -> Self {
        Self {
            id,
            name: new.name,
            kind: new.kind,
            status: new.status.unwrap_or_default(),
            description: new.description,
            category: new.category,
            purpose: new.purpose,
            pid: new.pid,
            last_updated: new.last_updated,
            scripts: new.scripts,
        }
    }

    fn apply(&mut self, patch: InitiativePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(purpose) = patch.purpose {
            self.purpose = purpose;
        }
        if let Some(pid) = patch.pid {
            self.pid = pid;
        }
        if let Some(last_updated) = patch.last_updated {
            self.last_updated = last_updated;
        }
        if let Some(scripts) = patch.scripts {
            self.scripts = scripts;
        }
    }

    fn validate_new(body: &Value) -> Result<NewInitiative, ValidationError> {
        let mut f = Fields::new(body, Mode::Create)?;
        let p = read_fields(&mut f);
        f.finish()?;
        Ok(NewInitiative {
            name: require(p.name, "name")?,
            kind: require(p.kind, "type")?,
            status: p.status,
            description: p.description.flatten(),
            category: p.category.flatten(),
            purpose: p.purpose.flatten(),
            pid: p.pid.flatten(),
            last_updated: p.last_updated.flatten(),
            scripts: p.scripts.flatten(),
        })
    }

    fn validate_patch(body: &Value) -> Result<InitiativePatch, ValidationError> {
        let mut f = Fields::new(body, Mode::Update)?;
        let patch = read_fields(&mut f);
        f.finish()?;
        Ok(patch)
    }

    fn collection(store: &Store) -> &Collection<Self> {
        store.initiatives()
    }
}
