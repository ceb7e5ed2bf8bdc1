use crud_domain::entity::Entity;
use crud_macros::entity;

#[entity]
struct Bookmark {
    title: String,
    url: String,
}

#[entity(id = uuid::Uuid)]
#[derive(PartialEq)]
pub struct Visit {
    pub bookmark_id: String,
}

fn main() {
    let bookmark = Bookmark {
        id: "b-1".to_string(),
        lifecycle: Default::default(),
        title: "docs".to_string(),
        url: "https://docs.rs".to_string(),
    };
    assert_eq!(bookmark.id(), "b-1");
    assert!(bookmark.is_active());
    let _ = format!("{:?} {} {}", bookmark.clone(), bookmark.title, bookmark.url);

    let visit = Visit {
        id: uuid::Uuid::new_v4(),
        lifecycle: Default::default(),
        bookmark_id: bookmark.id,
    };
    assert!(visit == visit.clone());
    assert!(!visit.is_deleted());
}
