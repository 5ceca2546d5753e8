use crate::store::Store;
use crate::types::{FranchiseStatus, InitiativeStatus};
use serde::{Deserialize, Serialize};

/// Dashboard headline numbers, derived from the collections on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_initiatives: usize,
    pub running_agents: usize,
    pub franchise_groups_total: usize,
    pub franchise_groups_completed: usize,
    pub open_issues: usize,
    pub deliverables: usize,
}

impl DashboardStats {
    pub fn compute(store: &Store) -> Self {
        let (total_initiatives, running_agents) = store
            .initiatives()
            .tally(|i| i.status == InitiativeStatus::Running);
        let (franchise_groups_total, franchise_groups_completed) = store
            .franchise_groups()
            .tally(|g| g.status == FranchiseStatus::Completed);
        let (_, open_issues) = store.issues().tally(|i| i.status.is_outstanding());

        Self {
            total_initiatives,
            running_agents,
            franchise_groups_total,
            franchise_groups_completed,
            open_issues,
            deliverables: store.deliverables().len(),
        }
    }

    /// One-paragraph prose summary handed to the advisor as context.
    pub fn summary(&self) -> String {
        format!(
            "Initiatives: {} total ({} running). Franchise groups: {} total ({} completed). \
             Deliverables: {}. Open issues: {}.",
            self.total_initiatives,
            self.running_agents,
            self.franchise_groups_total,
            self.franchise_groups_completed,
            self.deliverables,
            self.open_issues,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::franchise_group::NewFranchiseGroup;
    use crate::initiative::NewInitiative;
    use crate::issue::NewIssue;
    use crate::types::{InitiativeType, IssueStatus};

    #[test]
    fn empty_store_is_all_zero() {
        assert_eq!(Store::new().stats(), DashboardStats::default());
    }

    #[test]
    fn counts_follow_statuses() {
        let store = Store::new();
        let mut running = NewInitiative::new("a", InitiativeType::Agent);
        running.status = Some(InitiativeStatus::Running);
        store.initiatives().create(running);
        store
            .initiatives()
            .create(NewInitiative::new("b", InitiativeType::Workflow));

        store.franchise_groups().create(NewFranchiseGroup {
            name: "done".into(),
            status: Some(FranchiseStatus::Completed),
            ..Default::default()
        });
        store.franchise_groups().create(NewFranchiseGroup {
            name: "todo".into(),
            ..Default::default()
        });

        for status in [
            IssueStatus::Open,
            IssueStatus::InProgress,
            IssueStatus::Resolved,
            IssueStatus::Closed,
        ] {
            store.issues().create(NewIssue {
                title: status.to_string(),
                status: Some(status),
                ..Default::default()
            });
        }

        let stats = store.stats();
        assert_eq!(stats.total_initiatives, 2);
        assert_eq!(stats.running_agents, 1);
        assert_eq!(stats.franchise_groups_total, 2);
        assert_eq!(stats.franchise_groups_completed, 1);
        assert_eq!(stats.open_issues, 2);
        assert_eq!(stats.deliverables, 0);
    }

    #[test]
    fn seeded_counts_are_consistent() {
        let stats = Store::seeded().stats();
        assert!(stats.running_agents <= stats.total_initiatives);
        assert!(stats.franchise_groups_completed <= stats.franchise_groups_total);
        assert_eq!(stats.franchise_groups_completed, 1);
        assert_eq!(stats.deliverables, 8);
    }

    #[test]
    fn serializes_with_dashboard_field_names() {
        let json = serde_json::to_value(DashboardStats::default()).unwrap();
        for key in [
            "totalInitiatives",
            "runningAgents",
            "franchiseGroupsTotal",
            "franchiseGroupsCompleted",
            "openIssues",
            "deliverables",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn summary_mentions_totals() {
        let stats = DashboardStats {
            total_initiatives: 4,
            running_agents: 2,
            franchise_groups_total: 13,
            franchise_groups_completed: 1,
            open_issues: 3,
            deliverables: 8,
        };
        let s = stats.summary();
        assert!(s.contains("4 total (2 running)"), "{s}");
        assert!(s.contains("13 total (1 completed)"), "{s}");
        assert!(s.contains("Open issues: 3"), "{s}");
    }
}
