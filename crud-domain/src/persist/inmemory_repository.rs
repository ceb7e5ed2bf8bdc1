//! 内存版仓储（InMemoryRepository）
//!
//! 已提交记录按插入顺序保存在 `RwLock<Vec<E>>` 中；`insert`/`update` 仅写入暂存区，
//! 由登记了该仓储的 `InMemoryUnitOfWork` 统一校验并落地。
//!
use super::inmemory_unit_of_work::{Participant, PreparedCommit};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult as Result};
use crate::repository::{DeletedFilter, Repository};
use crate::specification::Specification;
use async_trait::async_trait;
use futures_core::stream::BoxStream;
use futures_util::{StreamExt, stream};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedRwLockWriteGuard, RwLock};

/// 暂存的写操作
#[derive(Debug, Clone)]
enum Staged<E> {
    Insert(E),
    Update(E),
}

/// 简单的内存仓储实现，克隆后共享同一份数据
pub struct InMemoryRepository<E: Entity> {
    name: &'static str,
    rows: Arc<RwLock<Vec<E>>>,
    staged: Arc<Mutex<Vec<Staged<E>>>>,
}

impl<E: Entity> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            rows: Arc::clone(&self.rows),
            staged: Arc::clone(&self.staged),
        }
    }
}

impl<E: Entity> InMemoryRepository<E> {
    /// 创建空仓储，`name` 用于日志与错误描述
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: Arc::new(RwLock::new(Vec::new())),
            staged: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 以已提交状态预置数据（不经过工作单元）
    pub fn with_rows(name: &'static str, rows: Vec<E>) -> Self {
        Self {
            name,
            rows: Arc::new(RwLock::new(rows)),
            staged: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 物理保存的全部记录（含已软删除）
    pub async fn snapshot_all(&self) -> Vec<E> {
        self.rows.read().await.clone()
    }

    /// 当前暂存、尚未提交的写操作数量
    pub async fn staged_len(&self) -> usize {
        self.staged.lock().await.len()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn find_many<'a>(
        &'a self,
        spec: &'a dyn Specification<E>,
        filter: DeletedFilter,
    ) -> BoxStream<'a, Result<E>> {
        let rows = Arc::clone(&self.rows);
        let matched = async move {
            let rows = rows.read().await;
            rows.iter()
                .filter(|e| filter.admits(*e) && spec.is_satisfied_by(e))
                .cloned()
                .map(Ok)
                .collect::<Vec<_>>()
        };
        Box::pin(stream::once(matched).flat_map(stream::iter))
    }

    async fn find_one(
        &self,
        spec: &dyn Specification<E>,
        filter: DeletedFilter,
    ) -> Result<Option<E>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|e| filter.admits(*e) && spec.is_satisfied_by(e))
            .cloned())
    }

    async fn insert(&self, entity: E) -> Result<()> {
        self.staged.lock().await.push(Staged::Insert(entity));
        Ok(())
    }

    async fn update(&self, entity: E) -> Result<()> {
        self.staged.lock().await.push(Staged::Update(entity));
        Ok(())
    }
}

/// 已通过校验、持有写锁的一批变更
struct PreparedBatch<E: Entity> {
    rows: OwnedRwLockWriteGuard<Vec<E>>,
    ops: Vec<Staged<E>>,
}

impl<E: Entity> PreparedCommit for PreparedBatch<E> {
    fn apply(self: Box<Self>) -> usize {
        let PreparedBatch { mut rows, ops } = *self;
        let applied = ops.len();
        for op in ops {
            match op {
                Staged::Insert(entity) => rows.push(entity),
                Staged::Update(entity) => {
                    if let Some(slot) = rows.iter_mut().find(|e| e.id() == entity.id()) {
                        *slot = entity;
                    }
                }
            }
        }
        applied
    }
}

#[async_trait]
impl<E: Entity> Participant for InMemoryRepository<E> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn storage_key(&self) -> usize {
        Arc::as_ptr(&self.rows) as usize
    }

    async fn prepare(&self) -> Result<Box<dyn PreparedCommit>> {
        let rows = Arc::clone(&self.rows).write_owned().await;
        let ops = std::mem::take(&mut *self.staged.lock().await);

        // 按暂存顺序模拟执行，校验整批变更
        let mut known: HashSet<E::Id> = rows.iter().map(|e| e.id().clone()).collect();
        for op in &ops {
            match op {
                Staged::Insert(entity) => {
                    if !known.insert(entity.id().clone()) {
                        return Err(DomainError::conflict(format!(
                            "{} with id {} already exists",
                            self.name,
                            entity.id()
                        )));
                    }
                }
                Staged::Update(entity) => {
                    if !known.contains(entity.id()) {
                        return Err(DomainError::not_found(format!(
                            "{} with id {} does not exist",
                            self.name,
                            entity.id()
                        )));
                    }
                }
            }
        }

        Ok(Box::new(PreparedBatch { rows, ops }))
    }

    async fn discard(&self) -> usize {
        let mut staged = self.staged.lock().await;
        let dropped = staged.len();
        staged.clear();
        dropped
    }
}
