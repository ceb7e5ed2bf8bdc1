//! 规约（Specification）
//!
//! 仓储读取所使用的谓词：封装对实体字段的布尔判断，使其可复用、可组合和可测试。
//!
use crate::entity::Entity;

/// 规约模式的核心 trait
///
/// 需要 `Send + Sync`，以便在异步仓储调用中跨 await 持有。
pub trait Specification<T>: Send + Sync {
    /// 检查候选对象是否满足规约
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// 与另一个规约进行 AND 组合
    fn and<S>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        AndSpecification::new(Box::new(self), Box::new(other))
    }

    /// 与另一个规约进行 OR 组合
    fn or<S>(self, other: S) -> OrSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        OrSpecification::new(Box::new(self), Box::new(other))
    }

    /// 对规约进行 NOT 操作
    fn not(self) -> NotSpecification<T>
    where
        Self: Sized + 'static,
    {
        NotSpecification::new(Box::new(self))
    }
}

/// 为 Box<dyn Specification<T>> 实现 Specification trait
/// 使得可以直接使用 Box 类型的规约
impl<T> Specification<T> for Box<dyn Specification<T>> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.as_ref().is_satisfied_by(candidate)
    }
}

/// AND 组合规约
pub struct AndSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T> AndSpecification<T> {
    pub fn new(left: Box<dyn Specification<T>>, right: Box<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

impl<T> Specification<T> for AndSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }
}

/// OR 组合规约
pub struct OrSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T> OrSpecification<T> {
    pub fn new(left: Box<dyn Specification<T>>, right: Box<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

impl<T> Specification<T> for OrSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }
}

/// NOT 规约
pub struct NotSpecification<T> {
    inner: Box<dyn Specification<T>>,
}

impl<T> NotSpecification<T> {
    pub fn new(inner: Box<dyn Specification<T>>) -> Self {
        Self { inner }
    }
}

impl<T> Specification<T> for NotSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }
}

/// 由闭包构造的规约，见 [`spec_fn`]
pub struct FnSpecification<F>(F);

/// 以闭包作为规约，例如 `spec_fn(|a: &Account| a.owner == "alice")`
pub fn spec_fn<T, F>(f: F) -> FnSpecification<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    FnSpecification(f)
}

impl<T, F> Specification<T> for FnSpecification<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (self.0)(candidate)
    }
}

/// 匹配全部实体
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl<E: Entity> Specification<E> for MatchAll {
    fn is_satisfied_by(&self, _candidate: &E) -> bool {
        true
    }
}

/// 按标识匹配
#[derive(Debug, Clone)]
pub struct ById<Id>(pub Id);

impl<E: Entity> Specification<E> for ById<E::Id> {
    fn is_satisfied_by(&self, candidate: &E) -> bool {
        candidate.id() == &self.0
    }
}

/// 匹配未被软删除的实体
#[derive(Debug, Clone, Copy, Default)]
pub struct NotDeleted;

impl<E: Entity> Specification<E> for NotDeleted {
    fn is_satisfied_by(&self, candidate: &E) -> bool {
        !candidate.is_deleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Lifecycle;

    struct AlwaysTrueSpec;
    impl Specification<i32> for AlwaysTrueSpec {
        fn is_satisfied_by(&self, _: &i32) -> bool {
            true
        }
    }

    struct AlwaysFalseSpec;
    impl Specification<i32> for AlwaysFalseSpec {
        fn is_satisfied_by(&self, _: &i32) -> bool {
            false
        }
    }

    #[derive(Debug, Clone)]
    struct Note {
        id: String,
        lifecycle: Lifecycle,
    }

    impl Entity for Note {
        type Id = String;

        fn id(&self) -> &Self::Id {
            &self.id
        }

        fn lifecycle(&self) -> &Lifecycle {
            &self.lifecycle
        }

        fn lifecycle_mut(&mut self) -> &mut Lifecycle {
            &mut self.lifecycle
        }
    }

    #[test]
    fn test_and_specification() {
        let spec = AlwaysTrueSpec.and(AlwaysTrueSpec);
        assert!(spec.is_satisfied_by(&42));

        let spec = AlwaysTrueSpec.and(AlwaysFalseSpec);
        assert!(!spec.is_satisfied_by(&42));
    }

    #[test]
    fn test_or_specification() {
        let spec = AlwaysTrueSpec.or(AlwaysFalseSpec);
        assert!(spec.is_satisfied_by(&42));

        let spec = AlwaysFalseSpec.or(AlwaysFalseSpec);
        assert!(!spec.is_satisfied_by(&42));
    }

    #[test]
    fn test_not_specification() {
        assert!(!AlwaysTrueSpec.not().is_satisfied_by(&42));
        assert!(AlwaysFalseSpec.not().is_satisfied_by(&42));
    }

    #[test]
    fn test_closure_combination() {
        // (偶数 AND 大于 10) OR 等于 3
        let spec: OrSpecification<i32> = spec_fn(|n: &i32| n % 2 == 0)
            .and(spec_fn(|n: &i32| *n > 10))
            .or(spec_fn(|n: &i32| *n == 3));
        assert!(spec.is_satisfied_by(&12));
        assert!(spec.is_satisfied_by(&3));
        assert!(!spec.is_satisfied_by(&8));
    }

    #[test]
    fn test_not_deleted_and_match_all() {
        let mut row = Note {
            id: "n-0".to_string(),
            lifecycle: Lifecycle::default(),
        };
        assert!(NotDeleted.is_satisfied_by(&row));
        assert!(MatchAll.is_satisfied_by(&row));

        row.lifecycle.soft_delete(chrono::Utc::now());
        assert!(!NotDeleted.is_satisfied_by(&row));
        assert!(MatchAll.is_satisfied_by(&row));
    }

    #[test]
    fn test_by_id() {
        let note = Note {
            id: "n-1".to_string(),
            lifecycle: Lifecycle::default(),
        };
        assert!(ById("n-1".to_string()).is_satisfied_by(&note));
        assert!(!ById("n-2".to_string()).is_satisfied_by(&note));

        let spec: AndSpecification<Note> = ById("n-1".to_string()).and(NotDeleted);
        assert!(spec.is_satisfied_by(&note));
    }
}
