use crud_domain::entity::EntityId;
use crud_macros::entity_id;
use uuid::Uuid;

#[entity_id]
struct AccountId(Uuid);

#[entity_id]
struct Slug(String);

fn main() {
    let id = AccountId::generate();
    let parsed: AccountId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    let _ = format!("{:?}", id);

    let raw: Uuid = id.clone().into();
    assert_eq!(AccountId::from(raw), id);
    assert_eq!(id.as_ref(), &raw);

    let slug = Slug::new("hello".to_string());
    assert_eq!(slug.to_string(), "hello");
    assert_ne!(Slug::generate(), Slug::generate());
}
