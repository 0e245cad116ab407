//! 内存版仓储（InMemoryRepository）
//!
//! 以 `id.to_string()` 为键保存实体副本：
//! - `add` 遇到已存在的标识返回 `AlreadyExists`；
//! - `update`/`delete` 遇到不存在的标识返回 `NotFound`。
//!
use super::{ReadRepository, Repository};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult as Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct InMemoryRepository<E> {
    items: RwLock<HashMap<String, E>>,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已保存的实体数量；锁中毒时返回 `DomainError::Repository`
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, E>>> {
        self.items
            .read()
            .map_err(|e| DomainError::repository(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, E>>> {
        self.items
            .write()
            .map_err(|e| DomainError::repository(e.to_string()))
    }
}

#[async_trait]
impl<E> ReadRepository<E> for InMemoryRepository<E>
where
    E: Entity + Clone,
{
    async fn get(&self, id: &E::Id) -> Result<Option<E>> {
        Ok(self.read()?.get(&id.to_string()).cloned())
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone,
{
    async fn add(&self, entity: &E) -> Result<()> {
        let key = entity.id().to_string();
        let mut items = self.write()?;
        if items.contains_key(&key) {
            return Err(DomainError::AlreadyExists { reason: key });
        }
        items.insert(key, entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &E) -> Result<()> {
        let key = entity.id().to_string();
        let mut items = self.write()?;
        match items.get_mut(&key) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound { reason: key }),
        }
    }

    async fn delete(&self, entity: &E) -> Result<()> {
        let key = entity.id().to_string();
        self.write()?
            .remove(&key)
            .map(|_| ())
            .ok_or(DomainError::NotFound { reason: key })
    }
}
