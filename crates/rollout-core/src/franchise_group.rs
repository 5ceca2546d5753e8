use crate::store::{Collection, Record, Store};
use crate::types::FranchiseStatus;
use crate::validate::{require, Fields, Mode, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAX_PROGRESS: u8 = 100;

/// An organisational unit going through the rollout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseGroup {
    pub id: String,
    pub name: String,
    pub status: FranchiseStatus,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub location_count: u32,
    pub accounting_system: Option<String>,
    pub labor_payroll_system: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFranchiseGroup {
    pub name: String,
    pub status: Option<FranchiseStatus>,
    pub progress: Option<u8>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub location_count: Option<u32>,
    pub accounting_system: Option<String>,
    pub labor_payroll_system: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FranchiseGroupPatch {
    pub name: Option<String>,
    pub status: Option<FranchiseStatus>,
    pub progress: Option<u8>,
    pub contact_name: Option<Option<String>>,
    pub contact_email: Option<Option<String>>,
    pub contact_phone: Option<Option<String>>,
    pub location_count: Option<u32>,
    pub accounting_system: Option<Option<String>>,
    pub labor_payroll_system: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

fn read_fields(f: &mut Fields<'_>) -> FranchiseGroupPatch {
    FranchiseGroupPatch {
        name: f.required_string("name"),
        status: f.defaulted_enum("status"),
        progress: f
            .integer("progress", 0, Some(i64::from(MAX_PROGRESS)))
            .and_then(|n| u8::try_from(n).ok()),
        contact_name: f.nullable_string("contactName"),
        contact_email: f.nullable_string("contactEmail"),
        contact_phone: f.nullable_string("contactPhone"),
        location_count: f
            .integer("locationCount", 0, Some(i64::from(u32::MAX)))
            .and_then(|n| u32::try_from(n).ok()),
        accounting_system: f.nullable_string("accountingSystem"),
        labor_payroll_system: f.nullable_string("laborPayrollSystem"),
        notes: f.nullable_string("notes"),
    }
}

impl Record for FranchiseGroup {
    const LABEL: &'static str = "Franchise group";

    type New = NewFranchiseGroup;
    type Patch = FranchiseGroupPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewFranchiseGroup) -> Self {
        Self {
            id,
            name: new.name,
            status: new.status.unwrap_or_default(),
            progress: new.progress.unwrap_or(0),
            contact_name: new.contact_name,
            contact_email: new.contact_email,
            contact_phone: new.contact_phone,
            location_count: new.location_count.unwrap_or(0),
            accounting_system: new.accounting_system,
            labor_payroll_system: new.labor_payroll_system,
            notes: new.notes,
        }
    }

    fn apply(&mut self, patch: FranchiseGroupPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        if let Some(v) = patch.contact_name {
            self.contact_name = v;
        }
        if let Some(v) = patch.contact_email {
            self.contact_email = v;
        }
        if let Some(v) = patch.contact_phone {
            self.contact_phone = v;
        }
        if let Some(count) = patch.location_count {
            self.location_count = count;
        }
        if let Some(v) = patch.accounting_system {
            self.accounting_system = v;
        }
        if let Some(v) = patch.labor_payroll_system {
            self.labor_payroll_system = v;
        }
        if let Some(v) = patch.notes {
            self.notes = v;
        }
    }

    fn validate_new(body: &Value) -> Result<NewFranchiseGroup, ValidationError> {
        let mut f = Fields::new(body, Mode::Create)?;
        let p = read_fields(&mut f);
        f.finish()?;
        Ok(NewFranchiseGroup {
            name: require(p.name, "name")?,
            status: p.status,
            progress: p.progress,
            contact_name: p.contact_name.flatten(),
            contact_email: p.contact_email.flatten(),
            contact_phone: p.contact_phone.flatten(),
            location_count: p.location_count,
            accounting_system: p.accounting_system.flatten(),
            labor_payroll_system: p.labor_payroll_system.flatten(),
            notes: p.notes.flatten(),
        })
    }

    fn validate_patch(body: &Value) -> Result<FranchiseGroupPatch, ValidationError> {
        let mut f = Fields::new(body, Mode::Update)?;
        let patch = read_fields(&mut f);
        f.finish()?;
        Ok(patch)
    }

    fn collection(store: &Store) -> &Collection<Self> {
        store.franchise_groups()
    }
}
