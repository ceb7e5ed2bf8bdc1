use crud_domain::entity::{Entity, EntityId};
use crud_domain::lifecycle::Lifecycle;
use crud_macros::{entity, entity_id};
use uuid::Uuid;

#[entity_id]
pub struct ChannelId(Uuid);

#[entity(id = ChannelId)]
pub struct Channel {
    pub name: String,
    pub members: u32,
}

#[entity]
pub struct Label {
    pub text: String,
}

#[test]
fn injected_fields_lead_the_struct() {
    let channel = Channel {
        id: ChannelId::generate(),
        lifecycle: Lifecycle::default(),
        name: "general".to_string(),
        members: 3,
    };
    let json = serde_json::to_value(&channel).unwrap();
    let keys: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    for key in ["id", "is_active", "is_deleted", "created_at", "updated_at", "name", "members"] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert!(json.get("lifecycle").is_none(), "lifecycle is flattened");
}

#[test]
fn serde_round_trip_keeps_lifecycle() {
    let mut label = Label {
        id: String::generate(),
        lifecycle: Lifecycle::default(),
        text: "urgent".to_string(),
    };
    label.lifecycle_mut().soft_delete(chrono::Utc::now());

    let json = serde_json::to_string(&label).unwrap();
    let back: Label = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id(), label.id());
    assert!(back.is_deleted());
    assert!(!back.is_active());
    assert_eq!(back.lifecycle(), label.lifecycle());
}

#[test]
fn generated_ids_are_distinct() {
    let a = ChannelId::generate();
    let b = ChannelId::generate();
    assert_ne!(a, b);
    assert_eq!(a.to_string().parse::<ChannelId>().unwrap(), a);
}
