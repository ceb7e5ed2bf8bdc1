//! 内存版持久化实现（persist）
//!
//! 提供满足 `Repository` 与 `UnitOfWork` 协议的内存实现：
//! - `InMemoryRepository`：按插入顺序保存已提交记录，写操作仅暂存；
//! - `InMemoryUnitOfWork`：登记任意多个仓储，提交时先整体校验再整体落地。
//!
//! 典型用途：测试环境、示例与本地开发。具体存储后端（如 Postgres）由上层提供实现并注入。
//!
mod inmemory_repository;
mod inmemory_unit_of_work;

pub use inmemory_repository::InMemoryRepository;
pub use inmemory_unit_of_work::InMemoryUnitOfWork;
