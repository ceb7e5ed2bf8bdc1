//! 通用 CRUD 服务实现（CrudService）
//!
//! 以映射器、仓储与工作单元三者组合出 `GenericService` 的完整实现：
//! 1. 经映射器转换输入；
//! 2. 调用对应的仓储操作（暂存写入/读取）；
//! 3. 更新/删除/读取单条时目标不存在则直接返回未找到，不做任何修改；
//! 4. 写操作经工作单元提交，读操作从不提交；
//! 5. 将实体映射回 DTO；
//! 6. 以规范消息键包装为成功结果。
//!
//! 任何映射器、仓储或工作单元的失败都在操作边界统一转换为失败结果。
//!
use crate::{
    dto::UpdateDto,
    error::{AppError, AppResult},
    mapper::EntityMapper,
    message::MessageKey,
    result::{IntoServiceResult, ServiceResult},
    service::GenericService,
};
use async_trait::async_trait;
use bon::Builder;
use chrono::Utc;
use crud_domain::{
    entity::{Entity, EntityId},
    error::DomainError,
    lifecycle::Lifecycle,
    repository::{DeletedFilter, Repository, RepositoryExt},
    specification::{MatchAll, Specification},
    unit_of_work::UnitOfWork,
};
use std::sync::Arc;
use tracing::{info, warn};

/// 服务运行选项
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrudOptions {
    /// 实体名称，用于日志字段与未找到描述
    #[builder(default = "entity")]
    entity_name: &'static str,
    /// 读取类操作使用的软删除过滤；更新与删除始终排除已删除记录
    #[builder(default)]
    read_filter: DeletedFilter,
}

impl CrudOptions {
    pub fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    pub fn read_filter(&self) -> DeletedFilter {
        self.read_filter
    }
}

impl Default for CrudOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

type EntityOf<M> = <M as EntityMapper>::Entity;
type IdOf<M> = <<M as EntityMapper>::Entity as Entity>::Id;

pub struct CrudService<M, R: ?Sized, W: ?Sized> {
    mapper: Arc<M>,
    repository: Arc<R>,
    unit_of_work: Arc<W>,
    options: CrudOptions,
}

impl<M, R: ?Sized, W: ?Sized> Clone for CrudService<M, R, W> {
    fn clone(&self) -> Self {
        Self {
            mapper: self.mapper.clone(),
            repository: self.repository.clone(),
            unit_of_work: self.unit_of_work.clone(),
            options: self.options,
        }
    }
}

impl<M, R, W> CrudService<M, R, W>
where
    M: EntityMapper,
    R: Repository<EntityOf<M>> + ?Sized,
    W: UnitOfWork + ?Sized,
{
    pub fn new(mapper: Arc<M>, repository: Arc<R>, unit_of_work: Arc<W>) -> Self {
        Self {
            mapper,
            repository,
            unit_of_work,
            options: CrudOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CrudOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CrudOptions {
        &self.options
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// 按规约读取并映射为响应视图（遵循 `read_filter`）
    pub async fn find_by(
        &self,
        spec: &dyn Specification<EntityOf<M>>,
    ) -> ServiceResult<Vec<M::Response>> {
        let outcome = self.try_find_by(spec).await;
        self.finish("find_by", outcome, MessageKey::Listed)
    }

    /// 按规约读取第一条并映射为响应视图；无匹配时返回未找到
    pub async fn find_one_by(
        &self,
        spec: &dyn Specification<EntityOf<M>>,
    ) -> ServiceResult<M::Response> {
        let outcome = self.try_find_one_by(spec).await;
        self.finish("find_one_by", outcome, MessageKey::Fetched)
    }

    async fn try_add(&self, dto: M::Create) -> AppResult<M::Response> {
        let mut entity = self.mapper.to_entity(<IdOf<M> as EntityId>::generate(), dto)?;
        *entity.lifecycle_mut() = Lifecycle::new(Utc::now());

        // 先映射响应，映射失败时不会留下已提交的记录
        let response = self.mapper.to_response(&entity)?;

        self.repository.insert(entity).await?;
        self.unit_of_work.commit().await?;
        Ok(response)
    }

    async fn try_update(&self, dto: M::Update) -> AppResult<()> {
        let id = dto.id().clone();
        let stored = self
            .load(&id, DeletedFilter::ExcludeDeleted, MessageKey::NotFoundOnUpdate)
            .await?;

        let mut entity = stored.clone();
        self.mapper.merge_update(&mut entity, dto)?;
        if entity.id() != stored.id() {
            return Err(DomainError::mapping(format!(
                "update must not change identity: {} -> {}",
                stored.id(),
                entity.id()
            ))
            .into());
        }
        entity
            .lifecycle_mut()
            .apply_update(stored.lifecycle(), Utc::now());

        self.repository.update(entity).await?;
        self.unit_of_work.commit().await?;
        Ok(())
    }

    async fn try_remove(&self, id: &IdOf<M>) -> AppResult<()> {
        let mut entity = self
            .load(id, DeletedFilter::ExcludeDeleted, MessageKey::NotFoundOnDelete)
            .await?;
        entity.lifecycle_mut().soft_delete(Utc::now());

        self.repository.update(entity).await?;
        self.unit_of_work.commit().await?;
        Ok(())
    }

    async fn try_get_all(&self) -> AppResult<Vec<M::Response>> {
        let entities = self
            .repository
            .collect_many(&MatchAll, self.options.read_filter)
            .await
            .map_err(|err| AppError::from(err).into_list_failure())?;
        Ok(self.mapper.to_responses(&entities)?)
    }

    async fn try_find_by(
        &self,
        spec: &dyn Specification<EntityOf<M>>,
    ) -> AppResult<Vec<M::Response>> {
        let entities = self
            .repository
            .collect_many(spec, self.options.read_filter)
            .await
            .map_err(|err| AppError::from(err).into_list_failure())?;
        Ok(self.mapper.to_responses(&entities)?)
    }

    async fn try_find_one_by(
        &self,
        spec: &dyn Specification<EntityOf<M>>,
    ) -> AppResult<M::Response> {
        let entity = self
            .repository
            .find_one(spec, self.options.read_filter)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    MessageKey::NotFoundOnGet,
                    self.options.entity_name,
                    "<specification>",
                )
            })?;
        Ok(self.mapper.to_response(&entity)?)
    }

    async fn load(
        &self,
        id: &IdOf<M>,
        filter: DeletedFilter,
        missing: MessageKey,
    ) -> AppResult<EntityOf<M>> {
        self.repository
            .find_by_id(id, filter)
            .await?
            .ok_or_else(|| AppError::not_found(missing, self.options.entity_name, id))
    }

    fn finish<T>(
        &self,
        op: &'static str,
        outcome: AppResult<T>,
        key: MessageKey,
    ) -> ServiceResult<T> {
        let entity = self.options.entity_name;
        match &outcome {
            Ok(_) => info!(entity, op, key = %key, "operation succeeded"),
            Err(err) => warn!(entity, op, key = %err.key(), error = %err, "operation failed"),
        }
        outcome.into_service_result(key)
    }
}

#[async_trait]
impl<M, R, W> GenericService<M::Entity, M::Response, M::Create, M::Update, M::Detail>
    for CrudService<M, R, W>
where
    M: EntityMapper,
    R: Repository<EntityOf<M>> + ?Sized,
    W: UnitOfWork + ?Sized,
{
    async fn add(&self, dto: M::Create) -> ServiceResult<M::Response> {
        let outcome = self.try_add(dto).await;
        self.finish("add", outcome, MessageKey::Created)
    }

    async fn update(&self, dto: M::Update) -> ServiceResult {
        let outcome = self.try_update(dto).await;
        self.finish("update", outcome, MessageKey::Updated)
            .without_data()
    }

    async fn remove(&self, id: &IdOf<M>) -> ServiceResult {
        let outcome = self.try_remove(id).await;
        self.finish("remove", outcome, MessageKey::Deleted)
            .without_data()
    }

    async fn get_by_id(&self, id: &IdOf<M>) -> ServiceResult<M::Response> {
        let outcome = match self
            .load(id, self.options.read_filter, MessageKey::NotFoundOnGet)
            .await
        {
            Ok(entity) => self.mapper.to_response(&entity).map_err(AppError::from),
            Err(err) => Err(err),
        };
        self.finish("get_by_id", outcome, MessageKey::Fetched)
    }

    async fn get_all(&self) -> ServiceResult<Vec<M::Response>> {
        let outcome = self.try_get_all().await;
        self.finish("get_all", outcome, MessageKey::Listed)
    }

    async fn get_detail_by_id(&self, id: &IdOf<M>) -> ServiceResult<M::Detail> {
        let outcome = match self
            .load(id, self.options.read_filter, MessageKey::NotFoundOnGet)
            .await
        {
            Ok(entity) => self.mapper.to_detail(&entity).map_err(AppError::from),
            Err(err) => Err(err),
        };
        self.finish("get_detail_by_id", outcome, MessageKey::Fetched)
    }
}
