//! 通用服务契约（GenericService）
//!
//! 对单一实体类型提供统一的增删改查操作。所有操作都返回 `ServiceResult`，
//! 不会把错误传播给调用方；写操作通过工作单元原子提交，读操作从不提交。
//!
use crate::{
    dto::{CreateDto, DetailDto, ResponseDto, UpdateDto},
    result::ServiceResult,
};
use async_trait::async_trait;
use crud_domain::entity::Entity;

#[async_trait]
pub trait GenericService<E, R, C, U, D>: Send + Sync
where
    E: Entity,
    R: ResponseDto,
    C: CreateDto,
    U: UpdateDto<Id = E::Id>,
    D: DetailDto,
{
    /// 新增：持久化为激活且未删除的实体，返回其响应视图
    async fn add(&self, dto: C) -> ServiceResult<R>;

    /// 更新：替换可变字段并刷新更新时间
    async fn update(&self, dto: U) -> ServiceResult;

    /// 软删除：标记删除并取消激活，记录仍保留在存储中
    async fn remove(&self, id: &E::Id) -> ServiceResult;

    /// 按标识读取未删除的实体
    async fn get_by_id(&self, id: &E::Id) -> ServiceResult<R>;

    /// 读取全部未删除的实体；结果为空同样是成功
    async fn get_all(&self) -> ServiceResult<Vec<R>>;

    /// 按标识读取详情视图
    async fn get_detail_by_id(&self, id: &E::Id) -> ServiceResult<D>;
}
