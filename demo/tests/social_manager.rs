use anyhow::Result as AnyResult;
use async_trait::async_trait;
use crud_application::GenericService;
use crud_application::message::MessageKey;
use crud_domain::entity::{Entity, EntityId};
use crud_domain::error::{DomainError, DomainResult};
use crud_domain::persist::{InMemoryRepository, InMemoryUnitOfWork};
use crud_domain::repository::DeletedFilter;
use crud_domain::unit_of_work::UnitOfWork;
use demo::social::{
    SocialAccount, SocialAccountCreateDto, SocialAccountId, SocialAccountManager,
    SocialAccountUpdateDto,
};
use std::sync::Arc;

fn manager() -> (InMemoryRepository<SocialAccount>, SocialAccountManager) {
    let store = InMemoryRepository::<SocialAccount>::new("social_account");
    let uow = InMemoryUnitOfWork::new().with_repository(&store);
    let manager = SocialAccountManager::new(Arc::new(store.clone()), Arc::new(uow));
    (store, manager)
}

fn account(name: &str, user_name: &str) -> SocialAccountCreateDto {
    SocialAccountCreateDto {
        name: name.to_string(),
        user_name: user_name.to_string(),
        url: format!("https://{name}.example/{user_name}"),
        icon: format!("{name}.svg"),
    }
}

fn rename(id: &SocialAccountId, url: &str) -> SocialAccountUpdateDto {
    SocialAccountUpdateDto {
        id: id.clone(),
        name: "github".to_string(),
        user_name: "octocat".to_string(),
        url: url.to_string(),
        icon: "github.svg".to_string(),
        is_active: None,
    }
}

#[tokio::test]
async fn add_and_fetch_round_trip() -> AnyResult<()> {
    let (_, manager) = manager();
    let added = manager.add(account("github", "octocat")).await;
    assert!(added.is_success());
    assert_eq!(added.message(), "Record created successfully.");
    let added = added.into_data().expect("added");

    let fetched = manager.get_by_id(&added.id).await.into_data().expect("fetched");
    assert_eq!(fetched, added);
    assert!(fetched.is_active);

    let detail = manager.get_detail_by_id(&added.id).await.into_data().expect("detail");
    assert_eq!(detail.url, "https://github.example/octocat");
    assert_eq!(detail.created_at, detail.updated_at);
    assert!(!detail.is_deleted);
    Ok(())
}

#[tokio::test]
async fn soft_deleted_account_is_gone_for_every_operation() -> AnyResult<()> {
    let (store, manager) = manager();
    let added = manager.add(account("github", "octocat")).await.into_data().expect("added");
    assert!(manager.remove(&added.id).await.is_success());

    assert_eq!(manager.get_by_id(&added.id).await.key(), MessageKey::NotFoundOnGet);
    assert_eq!(
        manager.update(rename(&added.id, "https://x")).await.key(),
        MessageKey::NotFoundOnUpdate
    );
    assert_eq!(manager.remove(&added.id).await.key(), MessageKey::NotFoundOnDelete);
    assert_eq!(manager.get_all().await.into_data(), Some(vec![]));

    let rows = store.snapshot_all().await;
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_deleted());
    assert!(!rows[0].is_active());
    assert_eq!(rows[0].url, "https://github.example/octocat");
    Ok(())
}

#[tokio::test]
async fn update_replaces_fields_and_moves_updated_at_forward() -> AnyResult<()> {
    let (_, manager) = manager();
    let added = manager.add(account("github", "octocat")).await.into_data().expect("added");
    let before = manager.get_detail_by_id(&added.id).await.into_data().expect("before");

    let result = manager.update(rename(&added.id, "https://github.com/octo-org")).await;
    assert!(result.is_success());
    assert_eq!(result.key(), MessageKey::Updated);

    let after = manager.get_detail_by_id(&added.id).await.into_data().expect("after");
    assert_eq!(after.url, "https://github.com/octo-org");
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
    assert!(after.is_active);
    Ok(())
}

#[tokio::test]
async fn unknown_id_changes_nothing() -> AnyResult<()> {
    let (store, manager) = manager();
    manager.add(account("github", "octocat")).await;
    let before = store.snapshot_all().await;

    let ghost = SocialAccountId::generate();
    assert!(manager.get_by_id(&ghost).await.is_failure());
    assert!(manager.update(rename(&ghost, "https://x")).await.is_failure());
    assert!(manager.remove(&ghost).await.is_failure());

    let after = store.snapshot_all().await;
    assert_eq!(before.len(), after.len());
    assert_eq!(before[0].lifecycle(), after[0].lifecycle());
    assert_eq!(before[0].url, after[0].url);
    Ok(())
}

#[tokio::test]
async fn empty_name_is_a_mapping_failure() -> AnyResult<()> {
    let (store, manager) = manager();
    let result = manager.add(account("  ", "octocat")).await;
    assert!(result.is_failure());
    assert_eq!(result.key(), MessageKey::MappingFailed);
    assert!(result.message().contains("must not be empty"));
    assert!(store.snapshot_all().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn lookup_by_platform_name() -> AnyResult<()> {
    let (_, manager) = manager();
    manager.add(account("github", "octocat")).await;
    let mastodon = manager.add(account("mastodon", "octocat")).await.into_data().expect("added");

    let found = manager.get_by_platform_name("mastodon").await;
    assert!(found.is_success());
    assert_eq!(found.key(), MessageKey::Fetched);
    assert_eq!(found.into_data(), Some(mastodon.clone()));

    manager.remove(&mastodon.id).await;
    let missing = manager.get_by_platform_name("mastodon").await;
    assert_eq!(missing.key(), MessageKey::NotFoundOnGet);
    assert!(manager.get_by_platform_name("myspace").await.is_failure());
    Ok(())
}

#[tokio::test]
async fn lookup_by_user_name() -> AnyResult<()> {
    let (_, manager) = manager();
    manager.add(account("github", "octocat")).await;
    let mastodon = manager.add(account("mastodon", "octocat")).await.into_data().expect("added");
    manager.add(account("linkedin", "jane-doe")).await;

    let found = manager.get_by_user_name("octocat").await.into_data().expect("found");
    let names: Vec<_> = found.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["github", "mastodon"]);

    manager.remove(&mastodon.id).await;
    let found = manager.get_by_user_name("octocat").await.into_data().expect("found");
    assert_eq!(found.len(), 1);

    let nobody = manager.get_by_user_name("nobody").await;
    assert!(nobody.is_success());
    assert_eq!(nobody.key(), MessageKey::Listed);
    assert_eq!(nobody.into_data(), Some(vec![]));
    Ok(())
}

#[tokio::test]
async fn audit_view_reports_soft_deleted_accounts() -> AnyResult<()> {
    let (_, manager) = manager();
    let audit = manager.clone().with_read_filter(DeletedFilter::IncludeDeleted);
    let added = manager.add(account("github", "octocat")).await.into_data().expect("added");
    assert!(manager.remove(&added.id).await.is_success());

    assert_eq!(manager.get_detail_by_id(&added.id).await.key(), MessageKey::NotFoundOnGet);

    let detail = audit.get_detail_by_id(&added.id).await.into_data().expect("detail");
    assert!(detail.is_deleted);
    assert!(!detail.is_active);
    assert!(detail.updated_at > detail.created_at);
    assert_eq!(audit.get_all().await.into_data().map(|all| all.len()), Some(1));

    // 写操作仍然排除已删除账号
    assert_eq!(audit.remove(&added.id).await.key(), MessageKey::NotFoundOnDelete);
    Ok(())
}

#[tokio::test]
async fn lookup_by_several_platform_names() -> AnyResult<()> {
    let (_, manager) = manager();
    manager.add(account("github", "octocat")).await;
    let mastodon = manager.add(account("mastodon", "octocat")).await.into_data().expect("added");
    manager.add(account("linkedin", "jane-doe")).await;

    let found = manager
        .get_by_platform_names(&["linkedin", "github", "myspace"])
        .await
        .into_data()
        .expect("found");
    let names: Vec<_> = found.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["github", "linkedin"]);

    let none = manager.get_by_platform_names(&[]).await;
    assert!(none.is_success());
    assert_eq!(none.into_data(), Some(vec![]));

    manager.remove(&mastodon.id).await;
    let found = manager.get_by_platform_names(&["mastodon"]).await.into_data();
    assert_eq!(found, Some(vec![]));
    Ok(())
}

#[tokio::test]
async fn lookup_by_platform_and_user_name() -> AnyResult<()> {
    let (_, manager) = manager();
    manager.add(account("github", "octocat")).await;
    let jane = manager.add(account("github", "jane-doe")).await.into_data().expect("added");
    manager.add(account("mastodon", "jane-doe")).await;

    let found = manager.get_account("github", "jane-doe").await;
    assert_eq!(found.key(), MessageKey::Fetched);
    assert_eq!(found.into_data(), Some(jane));

    let missing = manager.get_account("mastodon", "octocat").await;
    assert_eq!(missing.key(), MessageKey::NotFoundOnGet);
    Ok(())
}

struct RejectingUnitOfWork;

#[async_trait]
impl UnitOfWork for RejectingUnitOfWork {
    async fn commit(&self) -> DomainResult<()> {
        Err(DomainError::commit("database is read-only"))
    }
}

#[tokio::test]
async fn commit_failure_surfaces_in_the_result() -> AnyResult<()> {
    let store = InMemoryRepository::<SocialAccount>::new("social_account");
    let manager = SocialAccountManager::new(Arc::new(store.clone()), Arc::new(RejectingUnitOfWork));

    let result = manager.add(account("github", "octocat")).await;
    assert!(result.is_failure());
    assert_eq!(result.key(), MessageKey::PersistenceFailed);
    assert!(result.message().contains("database is read-only"));
    assert!(result.data().is_none());
    assert_eq!(manager.get_all().await.into_data(), Some(vec![]));
    Ok(())
}

#[tokio::test]
async fn service_result_serializes_for_api_consumers() -> AnyResult<()> {
    let (_, manager) = manager();
    let added = manager.add(account("github", "octocat")).await;
    let json = serde_json::to_value(&added)?;
    assert_eq!(json["success"], true);
    assert_eq!(json["key"], "created");
    assert_eq!(json["data"]["name"], "github");
    assert_eq!(json["data"]["is_active"], true);
    Ok(())
}
