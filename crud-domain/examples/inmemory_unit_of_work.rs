/// InMemoryUnitOfWork 示例
/// 演示跨两个仓储的原子提交：同一批次中任一写操作校验失败，整批都不会落地
use anyhow::Result as AnyResult;
use chrono::Utc;
use crud_domain::entity::{Entity, EntityId};
use crud_domain::lifecycle::Lifecycle;
use crud_domain::persist::{InMemoryRepository, InMemoryUnitOfWork};
use crud_domain::repository::{DeletedFilter, Repository, RepositoryExt};
use crud_domain::specification::{MatchAll, Specification, spec_fn};
use crud_domain::unit_of_work::UnitOfWork;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Author {
    id: Uuid,
    name: String,
    lifecycle: Lifecycle,
}

#[derive(Debug, Clone)]
struct Post {
    id: String,
    author_id: Uuid,
    title: String,
    lifecycle: Lifecycle,
}

impl Entity for Author {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }
}

impl Entity for Post {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    let authors = InMemoryRepository::<Author>::new("author");
    let posts = InMemoryRepository::<Post>::new("post");
    let uow = InMemoryUnitOfWork::new()
        .with_repository(&authors)
        .with_repository(&posts);
    println!("registered: {:?}", uow.registered_repositories());

    // 1. 作者与两篇文章在同一批次提交
    let ada = Author {
        id: Uuid::generate(),
        name: "Ada".to_string(),
        lifecycle: Lifecycle::new(Utc::now()),
    };
    authors.insert(ada.clone()).await?;
    for title in ["Notes on the Analytical Engine", "Sketch of the Engine"] {
        posts
            .insert(Post {
                id: String::generate(),
                author_id: ada.id,
                title: title.to_string(),
                lifecycle: Lifecycle::new(Utc::now()),
            })
            .await?;
    }
    uow.commit().await?;

    // 2. 第二批次：一篇新文章 + 重复插入已存在的作者（冲突）
    posts
        .insert(Post {
            id: String::generate(),
            author_id: ada.id,
            title: "Never persisted".to_string(),
            lifecycle: Lifecycle::new(Utc::now()),
        })
        .await?;
    authors.insert(ada.clone()).await?;
    match uow.commit().await {
        Ok(()) => println!("unexpected: conflicting batch committed"),
        Err(err) => println!("batch rejected: {err}"),
    }

    let all_posts = posts.collect_many(&MatchAll, DeletedFilter::ExcludeDeleted).await?;
    println!("posts after rejected batch: {}", all_posts.len());

    // 3. 软删除一篇文章，默认读取将其排除
    let mut first = all_posts[0].clone();
    first.lifecycle_mut().soft_delete(Utc::now());
    posts.update(first).await?;
    uow.commit().await?;

    let ada_id = ada.id;
    let by_ada =
        spec_fn(move |p: &Post| p.author_id == ada_id).and(spec_fn(|p: &Post| !p.title.is_empty()));
    let visible = posts.collect_many(&by_ada, DeletedFilter::ExcludeDeleted).await?;
    let stored = posts.collect_many(&by_ada, DeletedFilter::IncludeDeleted).await?;
    println!("visible: {}, stored: {}", visible.len(), stored.len());

    if let Some(author) = authors.find_by_id(&ada.id, DeletedFilter::ExcludeDeleted).await? {
        println!("author {} has {} live post(s)", author.name, visible.len());
    }
    Ok(())
}
