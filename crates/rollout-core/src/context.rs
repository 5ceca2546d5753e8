//! Dashboard snapshot sent to the advisor alongside a question.

use crate::store::Store;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

pub const PAGE_URL: &str = "/";
pub const PAGE_TITLE: &str = "Franchise Rollout Dashboard";

/// Build the context bundle: a prose summary, the raw stats, the first
/// `slice` initiatives, franchise groups and deliverables (in list order),
/// a page stub, and the image when one was supplied.
pub fn advisor_context(
    store: &Store,
    slice: usize,
    image: Option<&str>,
    now: DateTime<Utc>,
) -> Value {
    let stats = store.stats();

    let initiatives: Vec<Value> = store
        .initiatives()
        .list()
        .into_iter()
        .take(slice)
        .map(|i| {
            json!({
                "id": i.id,
                "name": i.name,
                "type": i.kind,
                "status": i.status,
            })
        })
        .collect();

    let franchise_groups: Vec<Value> = store
        .franchise_groups()
        .list()
        .into_iter()
        .take(slice)
        .map(|g| {
            json!({
                "id": g.id,
                "name": g.name,
                "status": g.status,
                "progress": g.progress,
            })
        })
        .collect();

    let deliverables: Vec<Value> = store
        .deliverables()
        .list()
        .into_iter()
        .take(slice)
        .map(|d| {
            json!({
                "id": d.id,
                "title": d.title,
                "type": d.kind,
                "status": d.status,
            })
        })
        .collect();

    let mut context = json!({
        "summary": stats.summary(),
        "stats": stats,
        "initiatives": initiatives,
        "franchiseGroups": franchise_groups,
        "deliverables": deliverables,
        "page": {
            "url": PAGE_URL,
            "title": PAGE_TITLE,
            "timestamp": now.to_rfc3339(),
        },
    });

    if let (Some(image), Value::Object(map)) = (image, &mut context) {
        map.insert("image".to_string(), Value::String(image.to_string()));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initiative::NewInitiative;
    use crate::types::InitiativeType;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn slices_are_bounded() {
        let store = Store::seeded();
        let ctx = advisor_context(&store, 3, None, fixed_now());
        assert_eq!(ctx["franchiseGroups"].as_array().unwrap().len(), 3);
        assert_eq!(ctx["deliverables"].as_array().unwrap().len(), 3);
        assert_eq!(ctx["initiatives"].as_array().unwrap().len(), 0);
        assert_eq!(ctx["franchiseGroups"][0]["name"], "Sugarloaf");
    }

    #[test]
    fn summary_and_page_stub_present() {
        let store = Store::new();
        store
            .initiatives()
            .create(NewInitiative::new("sync", InitiativeType::Agent));
        let ctx = advisor_context(&store, 2, None, fixed_now());
        assert!(ctx["summary"]
            .as_str()
            .unwrap()
            .contains("Initiatives: 1 total (0 running)"));
        assert_eq!(ctx["stats"]["totalInitiatives"], 1);
        assert_eq!(ctx["page"]["title"], PAGE_TITLE);
        assert_eq!(ctx["page"]["timestamp"], "2026-03-01T12:00:00+00:00");
        assert_eq!(ctx["initiatives"][0]["type"], "agent");
    }

    #[test]
    fn image_only_attached_when_supplied() {
        let store = Store::new();
        let without = advisor_context(&store, 3, None, fixed_now());
        assert!(without.get("image").is_none());
        let with = advisor_context(&store, 3, Some("data:image/png;base64,AAAA"), fixed_now());
        assert_eq!(with["image"], "data:image/png;base64,AAAA");
    }
}
