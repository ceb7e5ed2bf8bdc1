//! 仓储协议（Repository）
//!
//! 每类实体一个仓储：按规约读取（单条/多条）、暂存插入与原地更新。
//! 仓储不提供删除操作，删除总是表达为翻转软删除标记的 `update`。
//! 写操作只做暂存，由 [`UnitOfWork`](crate::unit_of_work::UnitOfWork) 统一提交。
//!
use crate::{
    entity::Entity,
    error::DomainResult as Result,
    specification::{ById, Specification},
};
use async_trait::async_trait;
use futures_core::stream::BoxStream;
use futures_util::TryStreamExt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 软删除过滤策略，作为每个读取操作的显式参数
///
/// 默认排除已软删除的记录，使“未删除”不变量由仓储实现集中保证，
/// 而非依赖调用方记得附加谓词。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletedFilter {
    #[default]
    ExcludeDeleted,
    IncludeDeleted,
}

impl DeletedFilter {
    /// 判断实体是否能通过该过滤策略
    pub fn admits<E: Entity>(&self, entity: &E) -> bool {
        match self {
            DeletedFilter::ExcludeDeleted => !entity.is_deleted(),
            DeletedFilter::IncludeDeleted => true,
        }
    }
}

#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity,
{
    /// 惰性读取满足规约的全部实体
    fn find_many<'a>(
        &'a self,
        spec: &'a dyn Specification<E>,
        filter: DeletedFilter,
    ) -> BoxStream<'a, Result<E>>;

    /// 读取满足规约的第一个实体
    async fn find_one(
        &self,
        spec: &dyn Specification<E>,
        filter: DeletedFilter,
    ) -> Result<Option<E>>;

    /// 暂存插入，提交前不可见
    async fn insert(&self, entity: E) -> Result<()>;

    /// 暂存更新，提交前不可见
    async fn update(&self, entity: E) -> Result<()>;
}

#[async_trait]
pub trait RepositoryExt<E>: Repository<E>
where
    E: Entity,
{
    /// 按标识读取
    async fn find_by_id(&self, id: &E::Id, filter: DeletedFilter) -> Result<Option<E>> {
        self.find_one(&ById(id.clone()), filter).await
    }

    /// 读取并收集满足规约的全部实体
    async fn collect_many(
        &self,
        spec: &dyn Specification<E>,
        filter: DeletedFilter,
    ) -> Result<Vec<E>> {
        self.find_many(spec, filter).try_collect().await
    }
}

impl<E, T> RepositoryExt<E> for T
where
    E: Entity,
    T: Repository<E> + ?Sized,
{
}

#[async_trait]
impl<E, T> Repository<E> for Arc<T>
where
    E: Entity,
    T: Repository<E> + ?Sized,
{
    fn find_many<'a>(
        &'a self,
        spec: &'a dyn Specification<E>,
        filter: DeletedFilter,
    ) -> BoxStream<'a, Result<E>> {
        (**self).find_many(spec, filter)
    }

    async fn find_one(
        &self,
        spec: &dyn Specification<E>,
        filter: DeletedFilter,
    ) -> Result<Option<E>> {
        (**self).find_one(spec, filter).await
    }

    async fn insert(&self, entity: E) -> Result<()> {
        (**self).insert(entity).await
    }

    async fn update(&self, entity: E) -> Result<()> {
        (**self).update(entity).await
    }
}
