//! 内存版工作单元（InMemoryUnitOfWork）
//!
//! 两阶段提交：先让每个登记的仓储取出暂存变更并在写锁下校验，
//! 全部通过后再逐一落地；任一失败则整批丢弃，所有仓储的暂存区均被清空。
//!
use crate::error::DomainResult as Result;
use crate::unit_of_work::UnitOfWork;
use crate::{entity::Entity, persist::InMemoryRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// 已校验、待落地的变更
pub(crate) trait PreparedCommit: Send {
    /// 落地变更，返回写操作数量
    fn apply(self: Box<Self>) -> usize;
}

/// 参与提交的仓储
#[async_trait]
pub(crate) trait Participant: Send + Sync {
    fn name(&self) -> &'static str;

    /// 底层存储的标识，克隆出的仓储句柄共享同一标识
    fn storage_key(&self) -> usize;

    /// 取出暂存变更并校验；失败时暂存变更已被丢弃
    async fn prepare(&self) -> Result<Box<dyn PreparedCommit>>;

    /// 丢弃暂存变更，返回丢弃数量
    async fn discard(&self) -> usize;
}

/// 内存工作单元，可跨多个仓储原子提交
#[derive(Default)]
pub struct InMemoryUnitOfWork {
    participants: Vec<Arc<dyn Participant>>,
    // 串行化提交，避免两次提交交错校验
    commit_lock: Mutex<()>,
}

impl InMemoryUnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记仓储，使其暂存变更由本工作单元提交
    ///
    /// 同一存储（含其克隆句柄）只登记一次。
    pub fn with_repository<E: Entity>(mut self, repository: &InMemoryRepository<E>) -> Self {
        let key = repository.storage_key();
        if self.participants.iter().any(|p| p.storage_key() == key) {
            debug!(repository = repository.name(), "repository already registered");
            return self;
        }
        self.participants.push(Arc::new(repository.clone()));
        self
    }

    /// 已登记仓储名称列表（只读视图）
    pub fn registered_repositories(&self) -> Vec<&'static str> {
        self.participants.iter().map(|p| p.name()).collect()
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(&self) -> Result<()> {
        let _serial = self.commit_lock.lock().await;

        let mut prepared = Vec::with_capacity(self.participants.len());
        for participant in &self.participants {
            match participant.prepare().await {
                Ok(batch) => prepared.push(batch),
                Err(err) => {
                    // 已取得的写锁随 prepared 一并释放，其余仓储的暂存区同样清空
                    drop(prepared);
                    let mut dropped = 0;
                    for p in &self.participants {
                        dropped += p.discard().await;
                    }
                    warn!(
                        repository = participant.name(),
                        dropped,
                        error = %err,
                        "in-memory commit rejected"
                    );
                    return Err(err);
                }
            }
        }

        let applied: usize = prepared.into_iter().map(|batch| batch.apply()).sum();
        debug!(applied, "in-memory commit applied");
        Ok(())
    }
}
