//! 实体生命周期（Lifecycle）
//!
//! 以值对象的形式承载实体的激活标记、软删除标记与创建/更新时间戳，
//! 序列化时通过 `#[serde(flatten)]` 平铺到实体上。
//!
//! 状态流转：新建（激活、未删除）→ 更新（刷新 `updated_at`）→ 软删除（终态，记录保留）。
//!
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// 实体生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    is_active: bool,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Lifecycle {
    /// 新建状态：激活、未删除，创建与更新时间一致
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            is_active: true,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// 从持久化数据还原（如数据库行），不做任何校正
    pub fn from_parts(
        is_active: bool,
        is_deleted: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            is_active,
            is_deleted,
            created_at,
            updated_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 切换激活状态；软删除为终态，已删除记录不会被重新激活
    pub fn set_active(&mut self, active: bool) {
        if !self.is_deleted {
            self.is_active = active;
        }
    }

    /// 刷新更新时间，保证严格大于上一次的值
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = match self.updated_at.checked_add_signed(TimeDelta::microseconds(1)) {
            Some(floor) => now.max(floor),
            // 已到可表示的上限，不再前进
            None => now.max(self.updated_at),
        };
    }

    /// 软删除：标记删除、取消激活并刷新更新时间
    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.is_deleted = true;
        self.is_active = false;
        self.touch(now);
    }

    /// 更新后的校正：创建时间与删除标记以存储值为准，再刷新更新时间
    ///
    /// 映射器合并更新 DTO 时可能改写整个生命周期（例如 DTO 携带了删除标记），
    /// 这里只保留激活状态的修改。
    pub fn apply_update(&mut self, stored: &Lifecycle, now: DateTime<Utc>) {
        self.created_at = stored.created_at;
        self.is_deleted = stored.is_deleted;
        if self.is_deleted {
            self.is_active = false;
        }
        self.updated_at = stored.updated_at;
        self.touch(now);
    }
}
