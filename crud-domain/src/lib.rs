//! CRUD 领域层基础库（crud-domain）
//!
//! 提供通用 CRUD 编排所依赖的领域侧抽象：
//! - 实体（`entity`）与实体生命周期（`lifecycle`：激活/软删除标记与时间戳）
//! - 规约（`specification`）：可组合的实体谓词
//! - 仓储协议（`repository`）：按谓词读取、暂存插入/更新，不提供物理删除
//! - 工作单元（`unit_of_work`）：一次性原子提交所有暂存变更
//! - 内存版持久化实现（`persist`，需启用 `inmemory` 特性）
//!
//! 本 crate 不关心具体存储引擎，仅定义契约与最小必要的错误类型，
//! 以便在不同基础设施（Postgres、内存等）上进行适配实现。
//!
//! 典型用法：
//! 1. 使用 `#[entity]` 宏（见 `crud-macros`）或手工实现 `Entity` 定义实体；
//! 2. 为实体提供 `Repository` 与 `UnitOfWork` 实现（或使用 `persist` 中的内存版）；
//! 3. 在应用层通过通用服务编排读写流程。
//!
pub mod entity;
pub mod error;
pub mod lifecycle;
#[cfg(feature = "inmemory")]
pub mod persist;
pub mod repository;
pub mod specification;
pub mod unit_of_work;
