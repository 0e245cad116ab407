use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::sync::Arc;
use uuid::Uuid;

use super::ValueObject;

/// 相等分量：参与值对象比较的原子值
///
/// 同种分量之间可排序；不同种类的分量之间没有相对顺序。
/// 字符串与嵌套值对象借用自所属值对象，比较过程中不复制字段数据。
#[derive(Debug, Clone)]
pub enum Component<'a> {
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    Char(char),
    Str(Cow<'a, str>),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    /// 嵌套的值对象，按结构递归比较
    Value(&'a dyn ValueObject),
}

impl Component<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// 分量种类名（用于诊断）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::Str(_) => "str",
            Self::Timestamp(_) => "timestamp",
            Self::Uuid(_) => "uuid",
            Self::Value(_) => "value",
        }
    }
}

/// 转换为相等分量
pub trait ToComponent {
    fn to_component(&self) -> Component<'_>;
}

macro_rules! int_component {
    ($($ty:ty),*) => {
        $(
            impl ToComponent for $ty {
                fn to_component(&self) -> Component<'_> {
                    Component::Int(i128::from(*self))
                }
            }
        )*
    };
}

int_component!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl ToComponent for isize {
    fn to_component(&self) -> Component<'_> {
        Component::Int(*self as i128)
    }
}

impl ToComponent for usize {
    fn to_component(&self) -> Component<'_> {
        Component::Int(*self as i128)
    }
}

impl ToComponent for bool {
    fn to_component(&self) -> Component<'_> {
        Component::Bool(*self)
    }
}

impl ToComponent for f32 {
    fn to_component(&self) -> Component<'_> {
        Component::Float(f64::from(*self))
    }
}

impl ToComponent for f64 {
    fn to_component(&self) -> Component<'_> {
        Component::Float(*self)
    }
}

impl ToComponent for char {
    fn to_component(&self) -> Component<'_> {
        Component::Char(*self)
    }
}

impl ToComponent for str {
    fn to_component(&self) -> Component<'_> {
        Component::Str(Cow::Borrowed(self))
    }
}

impl ToComponent for String {
    fn to_component(&self) -> Component<'_> {
        Component::Str(Cow::Borrowed(self.as_str()))
    }
}

impl ToComponent for DateTime<Utc> {
    fn to_component(&self) -> Component<'_> {
        Component::Timestamp(*self)
    }
}

impl ToComponent for Uuid {
    fn to_component(&self) -> Component<'_> {
        Component::Uuid(*self)
    }
}

impl ToComponent for Component<'_> {
    fn to_component(&self) -> Component<'_> {
        self.clone()
    }
}

impl ToComponent for Arc<dyn ValueObject> {
    fn to_component(&self) -> Component<'_> {
        Component::Value(&**self)
    }
}

impl ToComponent for Box<dyn ValueObject> {
    fn to_component(&self) -> Component<'_> {
        Component::Value(&**self)
    }
}

impl<T> ToComponent for Option<T>
where
    T: ToComponent,
{
    fn to_component(&self) -> Component<'_> {
        self.as_ref().map_or(Component::Null, ToComponent::to_component)
    }
}

impl<T> ToComponent for &T
where
    T: ToComponent + ?Sized,
{
    fn to_component(&self) -> Component<'_> {
        (**self).to_component()
    }
}
