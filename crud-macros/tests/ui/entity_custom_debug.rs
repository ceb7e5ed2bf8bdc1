use crud_macros::{entity, entity_id};
use uuid::Uuid;

#[entity_id(debug = false)]
struct SecretId(Uuid);

impl std::fmt::Debug for SecretId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretId(..)")
    }
}

#[entity(id = SecretId, debug = false)]
struct Secret {
    value: String,
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret").field("id", &self.id).finish_non_exhaustive()
    }
}

fn main() {
    let secret = Secret {
        id: SecretId::new(Uuid::new_v4()),
        lifecycle: Default::default(),
        value: "hunter2".to_string(),
    };
    let rendered = format!("{:?}", secret);
    assert!(!rendered.contains(&secret.value));
}
