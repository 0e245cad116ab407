use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, OnceLock};

use super::type_resolver::{IdentityTypeResolver, TypeResolver};
use super::{Component, ValueObject};
use crate::error::{DomainError, DomainResult};

const HASH_SEED: u64 = 1;
const HASH_MULTIPLIER: u64 = 23;

static SHARED: OnceLock<StructuralComparer> = OnceLock::new();

/// 安装进程级的类型解析钩子
///
/// 必须在第一次使用 [`StructuralComparer::shared`]（包括宏生成的比较运算）之前调用，
/// 且只能安装一次。
pub fn install_type_resolver(resolver: Arc<dyn TypeResolver>) -> DomainResult<()> {
    SHARED
        .set(StructuralComparer::new(resolver))
        .map_err(|_| DomainError::InvalidState {
            reason: "type resolver already installed or comparer already in use".to_string(),
        })
}

/// 将具体值对象或 `dyn ValueObject` 统一视为 `&dyn ValueObject`
pub trait AsValueObject {
    fn as_value_object(&self) -> &dyn ValueObject;
}

impl<T: ValueObject> AsValueObject for T {
    fn as_value_object(&self) -> &dyn ValueObject {
        self
    }
}

impl AsValueObject for dyn ValueObject {
    fn as_value_object(&self) -> &dyn ValueObject {
        self
    }
}

/// 结构化比较器：基于相等分量实现相等、哈希与全序
///
/// 排序规则：
/// - 逻辑类型不同：按类型名做序数比较（仅作为稳定的兜底顺序）；
/// - 否则逐个比较分量，取第一个非零结果：
///   - 两者皆为 `Null` 视为相同，`Null` 排在非空之前；
///   - 同种分量按其自身顺序比较，嵌套值对象递归比较；
///   - 浮点数按 IEEE 754 全序（`f64::total_cmp`）比较：`NaN` 与自身相等，
///     `-0.0` 与 `0.0` 不相等且 `-0.0` 排在前面；
///   - 不同种类的分量没有相对顺序，除非按值相等，否则报告为“小于”。
///     这并不构成严格的全序（`a < b` 与 `b < a` 可能同时成立）；
/// - 前缀全部相同时，分量较少者在前。
#[derive(Clone)]
pub struct StructuralComparer {
    resolver: Arc<dyn TypeResolver>,
}

impl Default for StructuralComparer {
    fn default() -> Self {
        Self::new(Arc::new(IdentityTypeResolver))
    }
}

impl StructuralComparer {
    pub fn new(resolver: Arc<dyn TypeResolver>) -> Self {
        Self { resolver }
    }

    /// 进程级共享比较器，使用 [`install_type_resolver`] 安装的解析钩子（默认原样解析）
    pub fn shared() -> &'static StructuralComparer {
        SHARED.get_or_init(StructuralComparer::default)
    }

    /// 逻辑类型（经解析钩子去除包装后的类型名）
    pub fn logical_type<'a>(&self, value: &'a dyn ValueObject) -> Cow<'a, str> {
        self.resolver.resolve(value.value_type())
    }

    pub fn equals(&self, a: &dyn ValueObject, b: &dyn ValueObject) -> bool {
        if self.logical_type(a) != self.logical_type(b) {
            return false;
        }

        let (left, right) = (a.equality_components(), b.equality_components());
        left.len() == right.len()
            && left
                .iter()
                .zip(&right)
                .all(|(x, y)| self.component_eq(x, y))
    }

    /// 空值感知的相等：两者皆空为真，仅一方为空为假
    pub fn equals_opt<A, B>(&self, a: Option<&A>, b: Option<&B>) -> bool
    where
        A: AsValueObject + ?Sized,
        B: AsValueObject + ?Sized,
    {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.equals(a.as_value_object(), b.as_value_object()),
            _ => false,
        }
    }

    pub fn ne<A, B>(&self, a: Option<&A>, b: Option<&B>) -> bool
    where
        A: AsValueObject + ?Sized,
        B: AsValueObject + ?Sized,
    {
        !self.equals_opt(a, b)
    }

    /// 自种子 1 起，逐个分量执行 `hash * 23 + component_hash`，`Null` 记为 0
    pub fn hash(&self, value: &dyn ValueObject) -> u64 {
        value
            .equality_components()
            .iter()
            .fold(HASH_SEED, |acc, c| {
                acc.wrapping_mul(HASH_MULTIPLIER)
                    .wrapping_add(self.component_hash(c))
            })
    }

    pub fn compare(&self, a: &dyn ValueObject, b: &dyn ValueObject) -> Ordering {
        let (left_type, right_type) = (self.logical_type(a), self.logical_type(b));
        if left_type != right_type {
            return left_type.as_bytes().cmp(right_type.as_bytes());
        }

        let (left, right) = (a.equality_components(), b.equality_components());
        for (x, y) in left.iter().zip(&right) {
            match self.compare_components(x, y) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        left.len().cmp(&right.len())
    }

    /// 空值感知的比较：空值排在任何非空实例之前，两个空值顺序相同
    pub fn compare_opt<A, B>(&self, a: Option<&A>, b: Option<&B>) -> Ordering
    where
        A: AsValueObject + ?Sized,
        B: AsValueObject + ?Sized,
    {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.compare(a.as_value_object(), b.as_value_object()),
        }
    }

    pub fn lt<A, B>(&self, a: Option<&A>, b: Option<&B>) -> bool
    where
        A: AsValueObject + ?Sized,
        B: AsValueObject + ?Sized,
    {
        match a {
            None => b.is_some(),
            Some(_) => self.compare_opt(a, b) == Ordering::Less,
        }
    }

    pub fn le<A, B>(&self, a: Option<&A>, b: Option<&B>) -> bool
    where
        A: AsValueObject + ?Sized,
        B: AsValueObject + ?Sized,
    {
        match a {
            None => true,
            Some(_) => self.compare_opt(a, b) != Ordering::Greater,
        }
    }

    pub fn gt<A, B>(&self, a: Option<&A>, b: Option<&B>) -> bool
    where
        A: AsValueObject + ?Sized,
        B: AsValueObject + ?Sized,
    {
        self.lt(b, a)
    }

    pub fn ge<A, B>(&self, a: Option<&A>, b: Option<&B>) -> bool
    where
        A: AsValueObject + ?Sized,
        B: AsValueObject + ?Sized,
    {
        self.le(b, a)
    }

    fn compare_components(&self, x: &Component<'_>, y: &Component<'_>) -> Ordering {
        match (x, y) {
            (Component::Null, Component::Null) => Ordering::Equal,
            (Component::Null, _) => Ordering::Less,
            (_, Component::Null) => Ordering::Greater,
            _ => match self.natural_order(x, y) {
                Some(ordering) => ordering,
                None if self.component_eq(x, y) => Ordering::Equal,
                None => Ordering::Less,
            },
        }
    }

    // None: 两个分量之间没有相对顺序
    fn natural_order(&self, x: &Component<'_>, y: &Component<'_>) -> Option<Ordering> {
        match (x, y) {
            (Component::Bool(a), Component::Bool(b)) => Some(a.cmp(b)),
            (Component::Int(a), Component::Int(b)) => Some(a.cmp(b)),
            (Component::Float(a), Component::Float(b)) => Some(a.total_cmp(b)),
            (Component::Char(a), Component::Char(b)) => Some(a.cmp(b)),
            (Component::Str(a), Component::Str(b)) => Some(a.cmp(b)),
            (Component::Timestamp(a), Component::Timestamp(b)) => Some(a.cmp(b)),
            (Component::Uuid(a), Component::Uuid(b)) => Some(a.cmp(b)),
            (Component::Value(a), Component::Value(b)) => Some(self.compare(&**a, &**b)),
            _ => None,
        }
    }

    fn component_eq(&self, x: &Component<'_>, y: &Component<'_>) -> bool {
        match (x, y) {
            (Component::Null, Component::Null) => true,
            (Component::Value(a), Component::Value(b)) => self.equals(&**a, &**b),
            _ => self.natural_order(x, y) == Some(Ordering::Equal),
        }
    }

    fn component_hash(&self, c: &Component<'_>) -> u64 {
        let mut hasher = DefaultHasher::new();
        match c {
            Component::Null => return 0,
            Component::Value(v) => return self.hash(&**v),
            Component::Bool(b) => b.hash(&mut hasher),
            Component::Int(i) => i.hash(&mut hasher),
            Component::Float(f) => f.to_bits().hash(&mut hasher),
            Component::Char(ch) => ch.hash(&mut hasher),
            Component::Str(s) => s.hash(&mut hasher),
            Component::Timestamp(t) => t.hash(&mut hasher),
            Component::Uuid(u) => u.hash(&mut hasher),
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_object::{ProxyNamingConvention, ToComponent};

    #[derive(Debug)]
    struct TestValueObject(i32);

    impl ValueObject for TestValueObject {
        fn equality_components(&self) -> Vec<Component<'_>> {
            vec![self.0.to_component()]
        }
    }

    #[derive(Debug)]
    struct Label(Option<String>);

    impl ValueObject for Label {
        fn equality_components(&self) -> Vec<Component<'_>> {
            vec![self.0.to_component()]
        }
    }

    #[derive(Debug)]
    struct Parts<'a>(Vec<Component<'a>>);

    impl ValueObject for Parts<'_> {
        fn equality_components(&self) -> Vec<Component<'_>> {
            self.0.clone()
        }
    }

    #[derive(Debug)]
    struct TestValueObjectProxy(i32);

    impl ValueObject for TestValueObjectProxy {
        fn equality_components(&self) -> Vec<Component<'_>> {
            vec![self.0.to_component()]
        }
    }

    fn cmp() -> StructuralComparer {
        StructuralComparer::default()
    }

    #[test]
    fn equal_components_are_equal_with_equal_hash() {
        let (a, b) = (TestValueObject(1), TestValueObject(1));
        assert!(cmp().equals(&a, &b));
        assert_eq!(cmp().hash(&a), cmp().hash(&b));
        assert_eq!(cmp().compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn different_components_order_naturally() {
        let (a, b) = (TestValueObject(1), TestValueObject(2));
        assert!(!cmp().equals(&a, &b));
        assert_eq!(cmp().compare(&a, &b), Ordering::Less);
        assert_eq!(cmp().compare(&b, &a), Ordering::Greater);
        assert!(cmp().lt(Some(&a), Some(&b)));
        assert!(cmp().gt(Some(&b), Some(&a)));
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let values = [
            Parts(vec![Component::Float(f64::NAN)]),
            Parts(vec![Component::Null, Component::Str("x".into())]),
            Parts(vec![]),
        ];
        for a in &values {
            assert!(cmp().equals(a, a));
            for b in &values {
                assert_eq!(cmp().equals(a, b), cmp().equals(b, a));
                assert_eq!(
                    cmp().ne(Some(a), Some(b)),
                    !cmp().equals_opt(Some(a), Some(b))
                );
            }
        }
    }

    #[test]
    fn different_types_never_equal_and_order_by_type_name() {
        let a = TestValueObject(1);
        let b = Parts(vec![Component::Int(1)]);
        assert!(!cmp().equals(&a, &b));

        let expected = a.value_type().cmp(b.value_type());
        for _ in 0..3 {
            assert_eq!(cmp().compare(&a, &b), expected);
            assert_eq!(cmp().compare(&b, &a), expected.reverse());
        }
    }

    #[test]
    fn null_components_sort_first() {
        let missing = Label(None);
        let present = Label(Some("a".into()));

        assert_eq!(cmp().compare(&missing, &present), Ordering::Less);
        assert_eq!(cmp().compare(&present, &missing), Ordering::Greater);
        assert_eq!(cmp().compare(&missing, &Label(None)), Ordering::Equal);
        assert!(cmp().equals(&missing, &Label(None)));
        assert_eq!(cmp().hash(&missing), HASH_SEED.wrapping_mul(HASH_MULTIPLIER));
    }

    #[test]
    fn shorter_sequence_sorts_first_on_tie() {
        let short = Parts(vec![Component::Int(1)]);
        let long = Parts(vec![Component::Int(1), Component::Int(0)]);
        assert!(!cmp().equals(&short, &long));
        assert_eq!(cmp().compare(&short, &long), Ordering::Less);
        assert_eq!(cmp().compare(&long, &short), Ordering::Greater);
    }

    #[test]
    fn first_difference_wins() {
        let a = Parts(vec![Component::Int(1), Component::Str("z".into())]);
        let b = Parts(vec![Component::Int(2), Component::Str("a".into())]);
        assert_eq!(cmp().compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn unordered_kinds_report_less_both_ways() {
        let a = Parts(vec![Component::Int(1)]);
        let b = Parts(vec![Component::Str("1".into())]);

        assert!(!cmp().equals(&a, &b));
        assert_eq!(cmp().compare(&a, &b), Ordering::Less);
        assert_eq!(cmp().compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn nested_values_compare_structurally() {
        let (one, also_one, three) = (TestValueObject(1), TestValueObject(1), TestValueObject(3));
        let a = Parts(vec![Component::Value(&one)]);
        let b = Parts(vec![Component::Value(&also_one)]);
        let c = Parts(vec![Component::Value(&three)]);

        assert!(cmp().equals(&a, &b));
        assert_eq!(cmp().hash(&a), cmp().hash(&b));
        assert_eq!(cmp().compare(&a, &c), Ordering::Less);
    }

    #[test]
    fn signed_zeros_are_distinct_under_total_order() {
        let positive = Parts(vec![Component::Float(0.0)]);
        let negative = Parts(vec![Component::Float(-0.0)]);

        assert!(!cmp().equals(&positive, &negative));
        assert_eq!(cmp().compare(&negative, &positive), Ordering::Less);
        assert_eq!(cmp().compare(&positive, &negative), Ordering::Greater);
    }

    #[test]
    fn hash_mixes_left_to_right() {
        let ab = Parts(vec![Component::Int(1), Component::Int(2)]);
        let ba = Parts(vec![Component::Int(2), Component::Int(1)]);
        assert_ne!(cmp().hash(&ab), cmp().hash(&ba));
    }

    #[test]
    fn null_aware_relational_operators() {
        let none: Option<&TestValueObject> = None;
        let one = TestValueObject(1);

        assert!(cmp().lt(none, Some(&one)));
        assert!(!cmp().lt(none, none));
        assert!(cmp().le(none, none));
        assert!(cmp().le(none, Some(&one)));
        assert!(!cmp().lt(Some(&one), none));
        assert!(cmp().gt(Some(&one), none));
        assert!(cmp().ge(none, none));
        assert!(cmp().le(Some(&one), Some(&TestValueObject(1))));
        assert!(cmp().equals_opt(none, none));
        assert!(!cmp().equals_opt(Some(&one), none));
        assert_eq!(cmp().compare_opt(none, Some(&one)), Ordering::Less);
    }

    #[test]
    fn dyn_values_use_the_same_rules() {
        let a: Arc<dyn ValueObject> = Arc::new(TestValueObject(4));
        let b: Arc<dyn ValueObject> = Arc::new(TestValueObject(4));
        assert!(cmp().equals_opt(Some(&*a), Some(&*b)));
        assert_eq!(cmp().compare(&*a, &*b), Ordering::Equal);
    }

    #[test]
    fn resolver_unwraps_proxy_types() {
        let proxied = StructuralComparer::new(Arc::new(ProxyNamingConvention::default()));
        let (plain, proxy) = (TestValueObject(5), TestValueObjectProxy(5));

        assert!(!cmp().equals(&plain, &proxy));
        assert!(proxied.equals(&plain, &proxy));
        assert_eq!(proxied.hash(&plain), proxied.hash(&proxy));
        assert_eq!(proxied.compare(&plain, &proxy), Ordering::Equal);
        assert_eq!(proxied.logical_type(&proxy), plain.value_type());
    }
}
