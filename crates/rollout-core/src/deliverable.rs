use crate::store::{Collection, Record, Store};
use crate::types::{DeliverableCategory, DeliverableStatus, DeliverableType};
use crate::validate::{require, Fields, Mode, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A rollout artifact with a review status. Dates are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: DeliverableType,
    pub status: DeliverableStatus,
    pub description: Option<String>,
    pub category: Option<DeliverableCategory>,
    pub file_url: Option<String>,
    pub sheet_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeliverable {
    pub title: String,
    pub kind: DeliverableType,
    pub status: Option<DeliverableStatus>,
    pub description: Option<String>,
    pub category: Option<DeliverableCategory>,
    pub file_url: Option<String>,
    pub sheet_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl NewDeliverable {
    pub fn new(title: impl Into<String>, kind: DeliverableType) -> Self {
        Self {
            title: title.into(),
            kind,
            status: None,
            description: None,
            category: None,
            file_url: None,
            sheet_url: None,
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliverablePatch {
    pub title: Option<String>,
    pub kind: Option<DeliverableType>,
    pub status: Option<DeliverableStatus>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<DeliverableCategory>>,
    pub file_url: Option<Option<String>>,
    pub sheet_url: Option<Option<String>>,
    pub created_at: Option<Option<String>>,
    pub updated_at: Option<Option<String>>,
}

fn read_fields(f: &mut Fields<'_>) -> DeliverablePatch {
    DeliverablePatch {
        title: f.required_string("title"),
        kind: f.required_enum("type"),
        status: f.defaulted_enum("status"),
        description: f.nullable_string("description"),
        category: f.nullable_enum("category"),
        file_url: f.nullable_string("fileUrl"),
        sheet_url: f.nullable_string("sheetUrl"),
        created_at: f.nullable_string("createdAt"),
        updated_at: f.nullable_string("updatedAt"),
    }
}

impl Record for Deliverable {
    const LABEL: &'static str = "Deliverable";

    type New = NewDeliverable;
    type Patch = DeliverablePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewDeliverable) -> Self {
        Self {
            id,
            title: new.title,
            kind: new.kind,
            status: new.status.unwrap_or_default(),
            description: new.description,
            category: new.category,
            file_url: new.file_url,
            sheet_url: new.sheet_url,
            created_at: new.created_at,
            updated_at: new.updated_at,
        }
    }

    fn apply(&mut self, patch: DeliverablePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.file_url {
            self.file_url = v;
        }
        if let Some(v) = patch.sheet_url {
            self.sheet_url = v;
        }
        if let Some(v) = patch.created_at {
            self.created_at = v;
        }
        if let Some(v) = patch.updated_at {
            self.updated_at = v;
        }
    }

    fn validate_new(body: &Value) -> Result<NewDeliverable, ValidationError> {
        let mut f = Fields::new(body, Mode::Create)?;
        let p = read_fields(&mut f);
        f.finish()?;
        Ok(NewDeliverable {
            title: require(p.title, "title")?,
            kind: require(p.kind, "type")?,
            status: p.status,
            description: p.description.flatten(),
            category: p.category.flatten(),
            file_url: p.file_url.flatten(),
            sheet_url: p.sheet_url.flatten(),
            created_at: p.created_at.flatten(),
            updated_at: p.updated_at.flatten(),
        })
    }

    fn validate_patch(body: &Value) -> Result<DeliverablePatch, ValidationError> {
        let mut f = Fields::new(body, Mode::Update)?;
        let patch = read_fields(&mut f);
        f.finish()?;
        Ok(patch)
    }

    fn collection(store: &Store) -> &Collection<Self> {
        store.deliverables()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_defaults_to_draft() {
        let new = Deliverable::validate_new(&json!({ "title": "Playbook", "type": "document" }))
            .unwrap();
        let d = Deliverable::from_new("d".into(), new);
        assert_eq!(d.status, DeliverableStatus::Draft);
        assert_eq!(d.category, None);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = Deliverable::validate_new(&json!({
            "title": "Deck",
            "type": "presentation",
            "category": "marketing"
        }))
        .unwrap_err();
        assert!(err.has_field("category"));
        assert_eq!(err.details.len(), 1);
    }

    #[test]
    fn category_can_be_cleared() {
        let mut new = NewDeliverable::new("Tracker", DeliverableType::Spreadsheet);
        new.category = Some(DeliverableCategory::Tracking);
        let mut d = Deliverable::from_new("d".into(), new);
        d.apply(Deliverable::validate_patch(&json!({ "category": null })).unwrap());
        assert_eq!(d.category, None);
    }

    #[test]
    fn dates_are_not_parsed() {
        let new = Deliverable::validate_new(&json!({
            "title": "Report",
            "type": "report",
            "createdAt": "sometime in december"
        }))
        .unwrap();
        assert_eq!(new.created_at.as_deref(), Some("sometime in december"));
    }
}
