//! 示例：基于通用 CRUD 服务的社交账号管理
//!
pub mod social;
