use anyhow::{Result, bail};
use crud_application::GenericService;
use crud_domain::persist::{InMemoryRepository, InMemoryUnitOfWork};
use crud_domain::repository::DeletedFilter;
use demo::social::{
    SocialAccount, SocialAccountCreateDto, SocialAccountManager, SocialAccountUpdateDto,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = InMemoryRepository::<SocialAccount>::new("social_account");
    let uow = InMemoryUnitOfWork::new().with_repository(&store);
    let manager = SocialAccountManager::new(Arc::new(store.clone()), Arc::new(uow));

    let accounts = [
        ("github", "octocat", "https://github.com/octocat", "github.svg"),
        ("mastodon", "octocat", "https://mastodon.social/@octocat", "mastodon.svg"),
        ("linkedin", "jane-doe", "https://linkedin.com/in/jane-doe", "linkedin.svg"),
    ];
    let mut created = Vec::new();
    for (name, user_name, url, icon) in accounts {
        let result = manager
            .add(SocialAccountCreateDto {
                name: name.to_string(),
                user_name: user_name.to_string(),
                url: url.to_string(),
                icon: icon.to_string(),
            })
            .await;
        match result.into_data() {
            Some(account) => created.push(account),
            None => bail!("failed to add {name}"),
        }
    }

    let github = &created[0];
    let updated = manager
        .update(SocialAccountUpdateDto {
            id: github.id.clone(),
            name: github.name.clone(),
            user_name: github.user_name.clone(),
            url: "https://github.com/octo-org".to_string(),
            icon: github.icon.clone(),
            is_active: None,
        })
        .await;
    info!(success = updated.is_success(), message = updated.message(), "update github");

    let removed = manager.remove(&created[2].id).await;
    info!(success = removed.is_success(), message = removed.message(), "remove linkedin");

    let by_user = manager.get_by_user_name("octocat").await;
    info!(count = by_user.data().map(Vec::len).unwrap_or_default(), "accounts of octocat");

    let missing = manager.get_by_platform_name("linkedin").await;
    info!(key = %missing.key(), message = missing.message(), "lookup removed platform");

    let audit = manager.clone().with_read_filter(DeletedFilter::IncludeDeleted);
    let picked = audit.get_by_platform_names(&["github", "linkedin"]).await;
    info!(
        count = picked.data().map(Vec::len).unwrap_or_default(),
        "github or linkedin, including removed"
    );

    let listed = manager.get_all().await;
    println!("{}", serde_json::to_string_pretty(&listed)?);

    info!(stored = store.snapshot_all().await.len(), "rows kept including soft-deleted");
    Ok(())
}
