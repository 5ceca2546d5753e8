use serde::{Deserialize, Serialize};
use std::fmt;

/// A string-backed enumeration with a closed set of accepted wire values.
pub trait ClosedEnum: Copy + Sized + 'static {
    /// Human-readable name used in error messages.
    const NAME: &'static str;

    fn all() -> &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == s)
    }

    /// `'a' | 'b' | 'c'`, the form used in validation messages.
    fn expected() -> String {
        Self::all()
            .iter()
            .map(|v| format!("'{}'", v.as_str()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl ClosedEnum for $name {
            const NAME: &'static str = $label;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::RolloutError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as ClosedEnum>::parse(s).ok_or_else(|| {
                    crate::error::RolloutError::InvalidEnum {
                        field: $label,
                        value: s.to_string(),
                        expected: <$name as ClosedEnum>::expected(),
                    }
                })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Initiative
// ---------------------------------------------------------------------------

closed_enum! {
    InitiativeType, "initiative type" {
        Agent => "agent",
        Workflow => "workflow",
        Integration => "integration",
    }
}

closed_enum! {
    /// Lifecycle of an agent, workflow or integration.
    InitiativeStatus, "initiative status" {
        Running => "running",
        Loaded => "loaded",
        Error => "error",
        Pending => "pending",
        Stopped => "stopped",
    }
}

impl Default for InitiativeStatus {
    fn default() -> Self {
        InitiativeStatus::Pending
    }
}

// ---------------------------------------------------------------------------
// FranchiseGroup
// ---------------------------------------------------------------------------

closed_enum! {
    FranchiseStatus, "franchise group status" {
        Pending => "pending",
        InProgress => "in_progress",
        Completed => "completed",
        OnHold => "on_hold",
    }
}

impl Default for FranchiseStatus {
    fn default() -> Self {
        FranchiseStatus::Pending
    }
}

// ---------------------------------------------------------------------------
// Deliverable
// ---------------------------------------------------------------------------

closed_enum! {
    DeliverableType, "deliverable type" {
        Document => "document",
        Spreadsheet => "spreadsheet",
        Presentation => "presentation",
        Report => "report",
        Other => "other",
    }
}

closed_enum! {
    DeliverableStatus, "deliverable status" {
        Draft => "draft",
        Review => "review",
        Final => "final",
    }
}

impl Default for DeliverableStatus {
    fn default() -> Self {
        DeliverableStatus::Draft
    }
}

closed_enum! {
    DeliverableCategory, "deliverable category" {
        Playbook => "playbook",
        Tracking => "tracking",
        Communication => "communication",
        Training => "training",
    }
}

// ---------------------------------------------------------------------------
// Issue
// ---------------------------------------------------------------------------

closed_enum! {
    IssuePriority, "issue priority" {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

impl Default for IssuePriority {
    fn default() -> Self {
        IssuePriority::Medium
    }
}

closed_enum! {
    IssueStatus, "issue status" {
        Open => "open",
        InProgress => "in_progress",
        Resolved => "resolved",
        Closed => "closed",
    }
}

impl Default for IssueStatus {
    fn default() -> Self {
        IssueStatus::Open
    }
}

impl IssueStatus {
    /// Open and in-progress issues count as outstanding on the dashboard.
    pub fn is_outstanding(self) -> bool {
        matches!(self, IssueStatus::Open | IssueStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_wire_values() {
        assert_eq!(
            "in_progress".parse::<FranchiseStatus>().unwrap(),
            FranchiseStatus::InProgress
        );
        assert_eq!(
            "critical".parse::<IssuePriority>().unwrap(),
            IssuePriority::Critical
        );
    }

    #[test]
    fn parse_rejects_unknown_value() {
        let err = "paused".parse::<InitiativeStatus>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("paused"), "{msg}");
        assert!(msg.contains("'running'"), "{msg}");
    }

    #[test]
    fn serde_uses_snake_case_wire_names() {
        let json = serde_json::to_string(&FranchiseStatus::OnHold).unwrap();
        assert_eq!(json, "\"on_hold\"");
        let back: IssueStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(back, IssueStatus::InProgress);
    }

    #[test]
    fn expected_lists_all_values() {
        assert_eq!(
            DeliverableStatus::expected(),
            "'draft' | 'review' | 'final'"
        );
    }

    #[test]
    fn defaults_match_documented_values() {
        assert_eq!(InitiativeStatus::default(), InitiativeStatus::Pending);
        assert_eq!(FranchiseStatus::default(), FranchiseStatus::Pending);
        assert_eq!(DeliverableStatus::default(), DeliverableStatus::Draft);
        assert_eq!(IssuePriority::default(), IssuePriority::Medium);
        assert_eq!(IssueStatus::default(), IssueStatus::Open);
    }

    #[test]
    fn outstanding_issue_statuses() {
        assert!(IssueStatus::Open.is_outstanding());
        assert!(IssueStatus::InProgress.is_outstanding());
        assert!(!IssueStatus::Resolved.is_outstanding());
        assert!(!IssueStatus::Closed.is_outstanding());
    }
}
