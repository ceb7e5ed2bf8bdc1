use crud_domain::entity::EntityId;
use serde::Serialize;

/// 数据传输对象（DTO）
///
/// - 作为应用层的输入/输出载体，与实体解耦；
/// - 不携带生命周期字段，生命周期由服务层统一管理；
/// - 按用途细分为创建、更新、列表响应与详情四种形态。
pub trait Dto: Send + Sync + 'static {}

/// 创建请求，不包含标识（由服务层生成）
pub trait CreateDto: Dto {}

/// 更新请求，必须携带目标实体的标识
pub trait UpdateDto: Dto {
    type Id: EntityId;

    fn id(&self) -> &Self::Id;
}

/// 列表/新增/更新的响应视图
pub trait ResponseDto: Dto + Serialize {}

/// 单条记录的详情视图
pub trait DetailDto: Dto + Serialize {}
