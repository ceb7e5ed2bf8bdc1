//! 实体（Entity）基础抽象
//!
//! 为持久化记录提供统一的标识（Id）与生命周期（激活/软删除/时间戳）能力。
//!
use crate::lifecycle::Lifecycle;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};
use ulid::Ulid;
use uuid::Uuid;

/// 实体标识
///
/// 标识在创建时分配且不可变；由服务层在新增时调用 `generate` 生成，
/// 因此实体无需具备默认构造能力。
pub trait EntityId: Clone + Eq + Hash + Display + Debug + Send + Sync + 'static {
    /// 生成一个新的唯一标识
    fn generate() -> Self;
}

impl EntityId for Uuid {
    fn generate() -> Self {
        Uuid::new_v4()
    }
}

impl EntityId for String {
    fn generate() -> Self {
        Ulid::new().to_string()
    }
}

/// 具备唯一标识与生命周期的实体抽象
pub trait Entity: Clone + Send + Sync + 'static {
    /// 实体标识类型
    type Id: EntityId;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;

    /// 获取生命周期状态
    fn lifecycle(&self) -> &Lifecycle;

    /// 获取可变生命周期状态
    fn lifecycle_mut(&mut self) -> &mut Lifecycle;

    fn is_active(&self) -> bool {
        self.lifecycle().is_active()
    }

    fn is_deleted(&self) -> bool {
        self.lifecycle().is_deleted()
    }
}
