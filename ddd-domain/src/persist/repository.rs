use crate::entity::Entity;
use crate::error::DomainResult as Result;
use async_trait::async_trait;
use std::sync::Arc;

/// 只读仓储
#[async_trait]
pub trait ReadRepository<E>: Send + Sync
where
    E: Entity,
{
    async fn get(&self, id: &E::Id) -> Result<Option<E>>;
}

/// 读写仓储
#[async_trait]
pub trait Repository<E>: ReadRepository<E>
where
    E: Entity,
{
    async fn add(&self, entity: &E) -> Result<()>;

    async fn update(&self, entity: &E) -> Result<()>;

    async fn delete(&self, entity: &E) -> Result<()>;
}

#[async_trait]
impl<E, T> ReadRepository<E> for Arc<T>
where
    E: Entity,
    T: ReadRepository<E> + ?Sized,
{
    async fn get(&self, id: &E::Id) -> Result<Option<E>> {
        (**self).get(id).await
    }
}

#[async_trait]
impl<E, T> Repository<E> for Arc<T>
where
    E: Entity,
    T: Repository<E> + ?Sized,
{
    async fn add(&self, entity: &E) -> Result<()> {
        (**self).add(entity).await
    }

    async fn update(&self, entity: &E) -> Result<()> {
        (**self).update(entity).await
    }

    async fn delete(&self, entity: &E) -> Result<()> {
        (**self).delete(entity).await
    }
}
