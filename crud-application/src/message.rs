use serde::{Deserialize, Serialize};
use std::fmt;

/// 规范消息键
///
/// 所有具体服务共享同一组成功/失败消息，调用方可直接匹配键值做分支，
/// 无需解析自由文本。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    Created,
    Updated,
    Deleted,
    Fetched,
    Listed,
    NotFoundOnGet,
    NotFoundOnUpdate,
    NotFoundOnDelete,
    ListFailed,
    PersistenceFailed,
    MappingFailed,
}

impl MessageKey {
    /// 稳定的键值（不随文案调整变化）
    pub const fn as_str(&self) -> &'static str {
        match self {
            MessageKey::Created => "created",
            MessageKey::Updated => "updated",
            MessageKey::Deleted => "deleted",
            MessageKey::Fetched => "fetched",
            MessageKey::Listed => "listed",
            MessageKey::NotFoundOnGet => "not_found_on_get",
            MessageKey::NotFoundOnUpdate => "not_found_on_update",
            MessageKey::NotFoundOnDelete => "not_found_on_delete",
            MessageKey::ListFailed => "list_failed",
            MessageKey::PersistenceFailed => "persistence_failed",
            MessageKey::MappingFailed => "mapping_failed",
        }
    }

    /// 默认的人类可读文案
    pub const fn text(&self) -> &'static str {
        match self {
            MessageKey::Created => "Record created successfully.",
            MessageKey::Updated => "Record updated successfully.",
            MessageKey::Deleted => "Record deleted successfully.",
            MessageKey::Fetched => "Record fetched successfully.",
            MessageKey::Listed => "Records listed successfully.",
            MessageKey::NotFoundOnGet => "Record not found.",
            MessageKey::NotFoundOnUpdate => "Record to update was not found.",
            MessageKey::NotFoundOnDelete => "Record to delete was not found.",
            MessageKey::ListFailed => "Records could not be listed.",
            MessageKey::PersistenceFailed => "Persistence operation failed.",
            MessageKey::MappingFailed => "Record could not be mapped.",
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(
            self,
            MessageKey::Created
                | MessageKey::Updated
                | MessageKey::Deleted
                | MessageKey::Fetched
                | MessageKey::Listed
        )
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            MessageKey::NotFoundOnGet | MessageKey::NotFoundOnUpdate | MessageKey::NotFoundOnDelete
        )
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
