use crate::message::MessageKey;
use crud_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{entity} not found: id={id}")]
    NotFound {
        key: MessageKey,
        entity: &'static str,
        id: String,
    },

    #[error(transparent)]
    ListFailed(DomainError),
}

impl AppError {
    pub fn not_found(key: MessageKey, entity: &'static str, id: impl ToString) -> Self {
        AppError::NotFound {
            key,
            entity,
            id: id.to_string(),
        }
    }

    /// 列表查询的持久化失败统一归为 `ListFailed`；映射失败保持原分类
    pub fn into_list_failure(self) -> Self {
        match self {
            AppError::Domain(err) if !err.is_mapping() => AppError::ListFailed(err),
            other => other,
        }
    }

    /// 失败对应的规范消息键
    pub fn key(&self) -> MessageKey {
        match self {
            AppError::NotFound { key, .. } => *key,
            AppError::ListFailed(_) => MessageKey::ListFailed,
            AppError::Domain(err) if err.is_mapping() => MessageKey::MappingFailed,
            AppError::Domain(_) => MessageKey::PersistenceFailed,
        }
    }

    /// 面向调用方的失败消息
    ///
    /// 未找到使用规范文案；其余失败携带底层错误描述。
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound { key, .. } => key.text().to_string(),
            other => other.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
