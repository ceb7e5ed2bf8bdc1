//! 实体映射（EntityMapper）
//!
//! 每个实体显式声明与四种 DTO 之间的转换，不依赖任何全局映射配置。
//! 所有转换都可能失败，失败时返回 `DomainError::Mapping`。
//!
use crate::dto::{CreateDto, DetailDto, ResponseDto, UpdateDto};
use crud_domain::{entity::Entity, error::DomainResult};

pub trait EntityMapper: Send + Sync + 'static {
    type Entity: Entity;
    type Create: CreateDto;
    type Update: UpdateDto<Id = <Self::Entity as Entity>::Id>;
    type Response: ResponseDto;
    type Detail: DetailDto;

    /// 由创建请求构造实体，标识由调用方生成
    ///
    /// 返回实体的生命周期会被服务层覆盖为新建状态。
    fn to_entity(
        &self,
        id: <Self::Entity as Entity>::Id,
        dto: Self::Create,
    ) -> DomainResult<Self::Entity>;

    /// 将更新请求合并到已存储的实体上
    fn merge_update(&self, entity: &mut Self::Entity, dto: Self::Update) -> DomainResult<()>;

    fn to_response(&self, entity: &Self::Entity) -> DomainResult<Self::Response>;

    fn to_detail(&self, entity: &Self::Entity) -> DomainResult<Self::Detail>;

    /// 批量映射为响应视图，保持输入顺序；任一失败即整体失败
    fn to_responses(&self, entities: &[Self::Entity]) -> DomainResult<Vec<Self::Response>> {
        entities.iter().map(|e| self.to_response(e)).collect()
    }
}
