//! 工作单元（Unit of Work）
//!
//! 事务/提交边界：一次 `commit` 原子地落地自上次提交（或创建）以来暂存的全部插入与更新。
//! 不向服务层暴露回滚操作：提交失败即意味着没有任何暂存变更可被观察到。
//!
use crate::error::DomainResult as Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// 原子提交全部暂存变更
    async fn commit(&self) -> Result<()>;
}

#[async_trait]
impl<T> UnitOfWork for Arc<T>
where
    T: UnitOfWork + ?Sized,
{
    async fn commit(&self) -> Result<()> {
        (**self).commit().await
    }
}
