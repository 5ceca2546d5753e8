//! Initial program data loaded at startup.
//!
//! Franchise groups and deliverables reflect the rollout as of the pilot's
//! completion. Initiatives and issues start empty.

use crate::deliverable::NewDeliverable;
use crate::franchise_group::NewFranchiseGroup;
use crate::store::Store;
use crate::types::{DeliverableCategory, DeliverableStatus, DeliverableType, FranchiseStatus};

struct GroupSeed {
    name: &'static str,
    contact_name: Option<&'static str>,
    contact_email: Option<&'static str>,
    contact_phone: Option<&'static str>,
    location_count: u32,
    status: FranchiseStatus,
    progress: u8,
    accounting_system: Option<&'static str>,
    labor_payroll_system: Option<&'static str>,
    notes: Option<&'static str>,
}

struct DeliverableSeed {
    title: &'static str,
    description: &'static str,
    kind: DeliverableType,
    category: DeliverableCategory,
    sheet_url: Option<&'static str>,
    created_at: &'static str,
    updated_at: &'static str,
    status: DeliverableStatus,
}

const GROUPS: &[GroupSeed] = &[
    GroupSeed {
        name: "Sugarloaf",
        contact_name: Some("Completed Pilot"),
        contact_email: Some("pilot@sugarloaf.com"),
        contact_phone: Some("(555) 100-0001"),
        location_count: 1,
        status: FranchiseStatus::Completed,
        progress: 100,
        accounting_system: Some("QuickBooks"),
        labor_payroll_system: Some("ADP"),
        notes: Some("First pilot location - completed 11/19/25"),
    },
    GroupSeed {
        name: "American Pub",
        contact_name: Some("Kishan Patel"),
        contact_email: Some("kishan@americanpub.us"),
        contact_phone: Some("(909) 264-1550"),
        location_count: 2,
        status: FranchiseStatus::Pending,
        progress: 0,
        accounting_system: Some("InfoSync"),
        labor_payroll_system: Some("InfoSync"),
        notes: None,
    },
    GroupSeed {
        name: "Jackmont Hospitality",
        contact_name: Some("Daniel Halpern"),
        contact_email: Some("dhalpern@jackmont.com"),
        contact_phone: Some("(404) 523-5744"),
        location_count: 21,
        status: FranchiseStatus::Pending,
        progress: 5,
        accounting_system: Some("Great Plains"),
        labor_payroll_system: None,
        notes: Some("Largest franchise group"),
    },
    GroupSeed {
        name: "Maui One",
        contact_name: Some("Anil Yadav"),
        contact_email: Some("anil@yadavgroup.net"),
        contact_phone: Some("(510) 792-2628"),
        location_count: 28,
        status: FranchiseStatus::InProgress,
        progress: 15,
        accounting_system: Some("Sage Intacct"),
        labor_payroll_system: None,
        notes: None,
    },
    GroupSeed {
        name: "Mera",
        contact_name: Some("Rafael Aguirre"),
        contact_email: Some("rafaelat@meracorporation.com"),
        contact_phone: Some("+52 (998) 845-6064"),
        location_count: 5,
        status: FranchiseStatus::Pending,
        progress: 0,
        accounting_system: Some("Sage Intacct"),
        labor_payroll_system: Some("UKG"),
        notes: None,
    },
    GroupSeed {
        name: "Metz Culinary",
        contact_name: Some("Jeff Metz"),
        contact_email: Some("jeffm@metzcorp.com"),
        contact_phone: Some("(570) 674-8731"),
        location_count: 7,
        status: FranchiseStatus::Pending,
        progress: 0,
        accounting_system: Some("Business Central"),
        labor_payroll_system: None,
        notes: None,
    },
    GroupSeed {
        name: "United Restaurant Group",
        contact_name: Some("Tony Grillo"),
        contact_email: Some("tgrillo@atlanticcoastdining.com"),
        contact_phone: Some("(804) 747-5050"),
        location_count: 9,
        status: FranchiseStatus::Pending,
        progress: 0,
        accounting_system: Some("Sage 100 ERP"),
        labor_payroll_system: Some("Paycom"),
        notes: None,
    },
    GroupSeed {
        name: "CFC Stripes",
        contact_name: Some("Jill Cygan"),
        contact_email: Some("jcygan@cfcmgmt.com"),
        contact_phone: Some("(216) 328-1121"),
        location_count: 2,
        status: FranchiseStatus::Pending,
        progress: 0,
        accounting_system: Some("Restaurant 365"),
        labor_payroll_system: Some("MinuteMen HR"),
        notes: None,
    },
    GroupSeed {
        name: "Bridgeport Restaurant Group",
        contact_name: Some("John Mosesso"),
        contact_email: Some("jmoerentals@frontier.com"),
        contact_phone: Some("(304) 203-4172"),
        location_count: 1,
        status: FranchiseStatus::Pending,
        progress: 0,
        accounting_system: Some("InProcess Company"),
        labor_payroll_system: Some("InProcess Company"),
        notes: None,
    },
    GroupSeed {
        name: "Cedar Fair",
        contact_name: Some("TBD"),
        contact_email: None,
        contact_phone: None,
        location_count: 1,
        status: FranchiseStatus::OnHold,
        progress: 0,
        accounting_system: Some("J.D. Edwards"),
        labor_payroll_system: Some("Kronos / UKG"),
        notes: Some("Contact to be verified"),
    },
    GroupSeed {
        name: "Village XIII",
        contact_name: Some("Dale Holt"),
        contact_email: Some("dholt44@sbcglobal.net"),
        contact_phone: Some("(217) 356-5789"),
        location_count: 1,
        status: FranchiseStatus::Pending,
        progress: 0,
        accounting_system: Some("QuickBooks"),
        labor_payroll_system: Some("Custom Computing Inc"),
        notes: None,
    },
    GroupSeed {
        name: "VNE",
        contact_name: Some("Jeremy Gardner"),
        contact_email: Some("jgardnermail@gmail.com"),
        contact_phone: Some("(501) 472-1000"),
        location_count: 2,
        status: FranchiseStatus::Pending,
        progress: 0,
        accounting_system: Some("QuickBooks"),
        labor_payroll_system: Some("Paychex PEO"),
        notes: None,
    },
    GroupSeed {
        name: "RLJ Development",
        contact_name: Some("Eric Rogers"),
        contact_email: Some("erogers@rljlodgingtrust.com"),
        contact_phone: Some("(301) 280-7754"),
        location_count: 1,
        status: FranchiseStatus::Pending,
        progress: 0,
        accounting_system: None,
        labor_payroll_system: Some("Kronos / UKG"),
        notes: None,
    },
];

const DELIVERABLES: &[DeliverableSeed] = &[
    DeliverableSeed {
        title: "Franchise Rollout Playbook",
        description: "Complete guide for remaining franchisees including process, communication, and training kit",
        kind: DeliverableType::Document,
        category: DeliverableCategory::Playbook,
        sheet_url: Some("https://www.dropbox.com/scl/fi/i6oaz9wdpzpuqirmpkz19/LESSONS_LEARNED_SURVEY_DISTRIBUTION_LIST_GM_OPS.md?rlkey=jmdkkjwcztatn9hklcz1nn86c&dl=0"),
        created_at: "2025-12-04",
        updated_at: "2025-12-31",
        status: DeliverableStatus::Review,
    },
    DeliverableSeed {
        title: "Master Rollout Tracker",
        description: "Centralized tracking for all franchise groups with schedule, surveys, and milestones",
        kind: DeliverableType::Spreadsheet,
        category: DeliverableCategory::Tracking,
        sheet_url: Some("https://www.dropbox.com/scl/fi/6x1ss3wqg8hbynojjyaor/ONBOARDING_FORMAL_KICKOFF_MEETING_AGENDA.md?rlkey=iiofuhklmlngdkwe0gan678fp&dl=0"),
        created_at: "2025-11-01",
        updated_at: "2025-12-31",
        status: DeliverableStatus::Final,
    },
    DeliverableSeed {
        title: "Site Survey Hardware Tracking",
        description: "Track site surveys and hardware orders/installation for each location",
        kind: DeliverableType::Spreadsheet,
        category: DeliverableCategory::Tracking,
        sheet_url: Some("https://www.dropbox.com/scl/fi/f465a7ve7jtnwnaufg9kf/ROLLOUT_TRACKING_ENHANCED_RECOMMENDATIONS.md?rlkey=l42w77xjgiq1er75a9fw44t95&dl=0"),
        created_at: "2025-11-15",
        updated_at: "2025-12-31",
        status: DeliverableStatus::Final,
    },
    DeliverableSeed {
        title: "Issue Management Log",
        description: "Centralized issue tracking for all rollout-related problems",
        kind: DeliverableType::Spreadsheet,
        category: DeliverableCategory::Tracking,
        sheet_url: Some("https://docs.google.com/spreadsheets/d/example-issues"),
        created_at: "2025-11-20",
        updated_at: "2025-12-18",
        status: DeliverableStatus::Final,
    },
    DeliverableSeed {
        title: "Franchisee Communication Templates",
        description: "Email and meeting templates for franchisee onboarding and updates",
        kind: DeliverableType::Document,
        category: DeliverableCategory::Communication,
        sheet_url: None,
        created_at: "2025-12-01",
        updated_at: "2025-12-15",
        status: DeliverableStatus::Draft,
    },
    DeliverableSeed {
        title: "CT/Toast Training Materials",
        description: "Training guides and resources for Crunchtime and Toast systems",
        kind: DeliverableType::Presentation,
        category: DeliverableCategory::Training,
        sheet_url: None,
        created_at: "2025-11-25",
        updated_at: "2025-12-10",
        status: DeliverableStatus::Final,
    },
    DeliverableSeed {
        title: "Integration Assessment Matrix",
        description: "System integration needs and nuances for each franchise group",
        kind: DeliverableType::Spreadsheet,
        category: DeliverableCategory::Tracking,
        sheet_url: Some("https://docs.google.com/spreadsheets/d/example-integration"),
        created_at: "2025-12-05",
        updated_at: "2025-12-16",
        status: DeliverableStatus::Review,
    },
    DeliverableSeed {
        title: "Sugarloaf Lessons Learned",
        description: "Key learnings from the Sugarloaf pilot rollout",
        kind: DeliverableType::Report,
        category: DeliverableCategory::Playbook,
        sheet_url: None,
        created_at: "2025-11-20",
        updated_at: "2025-12-04",
        status: DeliverableStatus::Final,
    },
];

fn owned(s: Option<&'static str>) -> Option<String> {
    s.map(str::to_string)
}

pub fn populate(store: &Store) {
    for g in GROUPS {
        store.franchise_groups().create(NewFranchiseGroup {
            name: g.name.to_string(),
            status: Some(g.status),
            progress: Some(g.progress),
            contact_name: owned(g.contact_name),
            contact_email: owned(g.contact_email),
            contact_phone: owned(g.contact_phone),
            location_count: Some(g.location_count),
            accounting_system: owned(g.accounting_system),
            labor_payroll_system: owned(g.labor_payroll_system),
            notes: owned(g.notes),
        });
    }
    for d in DELIVERABLES {
        let mut new = NewDeliverable::new(d.title, d.kind);
        new.description = Some(d.description.to_string());
        new.category = Some(d.category);
        new.sheet_url = owned(d.sheet_url);
        new.created_at = Some(d.created_at.to_string());
        new.updated_at = Some(d.updated_at.to_string());
        new.status = Some(d.status);
        store.deliverables().create(new);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pilot_group_is_completed() {
        let store = Store::new();
        populate(&store);
        let groups = store.franchise_groups().list();
        let pilot = groups.iter().find(|g| g.name == "Sugarloaf").unwrap();
        assert_eq!(pilot.status, FranchiseStatus::Completed);
        assert_eq!(pilot.progress, 100);
        let cedar = groups.iter().find(|g| g.name == "Cedar Fair").unwrap();
        assert_eq!(cedar.contact_email, None);
        assert_eq!(cedar.status, FranchiseStatus::OnHold);
    }

    #[test]
    fn seed_order_is_preserved() {
        let store = Store::new();
        populate(&store);
        let first = store.deliverables().list().remove(0);
        assert_eq!(first.title, "Franchise Rollout Playbook");
        assert_eq!(first.status, DeliverableStatus::Review);
        assert_eq!(first.file_url, None);
    }
}
