//! CRUD 应用层（crud-application）
//!
//! 在领域契约之上编排通用的增删改查：
//! - `result`：成功/失败的标记结果，是所有服务操作唯一的返回通道；
//! - `message`：各服务共享的规范消息键；
//! - `dto` / `mapper`：四种 DTO 形态与显式的实体映射；
//! - `service`：通用服务契约 `GenericService` 及其实现 `CrudService`。
//!
pub mod crud_service;
pub mod dto;
pub mod error;
pub mod mapper;
pub mod message;
pub mod result;
pub mod service;

pub use crud_service::{CrudOptions, CrudService};
pub use result::{IntoServiceResult, ServiceResult};
pub use service::GenericService;
