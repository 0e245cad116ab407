use std::slice::Iter;
use std::sync::Arc;

use super::domain_event_trait::DomainEvent;
use super::event_source::EventHolder;

/// 实体内嵌的待分发事件队列
///
/// - 按登记顺序保存事件，分发时保持该顺序；
/// - 对外只暴露只读视图（`pending`/`iter`），登记由所属实体在自身行为中完成；
/// - 由分发器通过 [`EventHolder::drain`] 一次性取走并清空。
#[derive(Debug, Clone)]
pub struct EventQueue<E> {
    events: Vec<E>,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 待分发事件的只读视图
    pub fn pending(&self) -> &[E] {
        &self.events
    }

    /// 在队尾登记事件；应仅由所属实体的行为方法调用
    pub fn register(&mut self, event: E) {
        self.events.push(event);
    }

    /// 清空队列，空队列上调用为无操作
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// 取出全部事件并清空队列
    pub fn take(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, E> {
        self.events.iter()
    }
}

impl<'a, E> IntoIterator for &'a EventQueue<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl<E> EventHolder for EventQueue<E>
where
    E: DomainEvent,
{
    fn has_pending_events(&self) -> bool {
        !self.is_empty()
    }

    fn pending_count(&self) -> usize {
        self.len()
    }

    fn drain(&mut self) -> Vec<Arc<dyn DomainEvent>> {
        self.take()
            .into_iter()
            .map(|e| Arc::new(e) as Arc<dyn DomainEvent>)
            .collect()
    }
}
