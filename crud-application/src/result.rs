//! 结果包装（ServiceResult）
//!
//! 所有服务操作都返回 `ServiceResult`，而不是把错误传播给调用方：
//! - `success` 为真时 `data`（若该操作返回数据）有效；
//! - `success` 为假时调用方不得信任 `data`，`message` 给出可读原因；
//! - `key` 为规范消息键，可用于程序化分支。
//!
//! 构造与访问均不会失败。
//!
use crate::error::{AppError, AppResult};
use crate::message::MessageKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResult<T = ()> {
    success: bool,
    message: String,
    key: MessageKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> ServiceResult<T> {
    /// 携带数据的成功结果，消息取键的默认文案
    pub fn success(data: T, key: MessageKey) -> Self {
        Self::success_with_message(data, key, key.text())
    }

    /// 携带数据与自定义消息的成功结果；空消息回退为默认文案
    pub fn success_with_message(data: T, key: MessageKey, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: non_empty(message.into(), key),
            key,
            data: Some(data),
        }
    }

    /// 失败结果，不携带数据；空消息回退为默认文案
    pub fn failure(key: MessageKey, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: non_empty(message.into(), key),
            key,
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn key(&self) -> MessageKey {
        self.key
    }

    /// 成功时的数据
    pub fn data(&self) -> Option<&T> {
        if self.success { self.data.as_ref() } else { None }
    }

    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }

    /// 转换数据，保留状态与消息
    pub fn map<U, F>(self, f: F) -> ServiceResult<U>
    where
        F: FnOnce(T) -> U,
    {
        ServiceResult {
            success: self.success,
            message: self.message,
            key: self.key,
            data: self.data.map(f),
        }
    }

    /// 丢弃数据，用于不返回数据的操作
    pub fn without_data(self) -> ServiceResult {
        ServiceResult {
            success: self.success,
            message: self.message,
            key: self.key,
            data: None,
        }
    }
}

impl ServiceResult {
    /// 不携带数据的成功结果
    pub fn ok(key: MessageKey) -> Self {
        Self {
            success: true,
            message: key.text().to_string(),
            key,
            data: None,
        }
    }
}

impl<T> From<AppError> for ServiceResult<T> {
    fn from(err: AppError) -> Self {
        ServiceResult::failure(err.key(), err.message())
    }
}

fn non_empty(message: String, key: MessageKey) -> String {
    if message.trim().is_empty() {
        key.text().to_string()
    } else {
        message
    }
}

/// 在操作边界把 `AppResult` 统一转换为 `ServiceResult`
pub trait IntoServiceResult<T> {
    fn into_service_result(self, key: MessageKey) -> ServiceResult<T>;
}

impl<T> IntoServiceResult<T> for AppResult<T> {
    fn into_service_result(self, key: MessageKey) -> ServiceResult<T> {
        match self {
            Ok(data) => ServiceResult::success(data, key),
            Err(err) => err.into(),
        }
    }
}
