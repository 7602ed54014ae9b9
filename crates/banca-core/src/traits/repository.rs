//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::traits::example::Example;
use crate::types::pagination::PageRequest;

/// Generic CRUD repository over one entity type.
///
/// Every operation runs inside a caller-provided storage session, so
/// the caller decides where the unit of work begins and ends.
/// Entity-specific operations are defined on the concrete repositories.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Stored entity.
    type Entity: Send + Sync + serde::Serialize + 'static;
    /// Primary key.
    type Id: Send + Sync + 'static;
    /// Example type used by [`Repository::search`].
    type Example: Example + Send + Sync + 'static;
    /// Data accepted by [`Repository::persist`].
    type New: Send + Sync + 'static;
    /// Storage session (transaction) the operations run in.
    type Session: Send;

    /// Find entities matching the example, bounded by the page window.
    async fn search(
        &self,
        session: &mut Self::Session,
        example: &Self::Example,
        page: &PageRequest,
    ) -> AppResult<Vec<Self::Entity>>;

    /// Insert a new entity and return the stored version.
    async fn persist(&self, session: &mut Self::Session, new: &Self::New)
    -> AppResult<Self::Entity>;

    /// Fetch an entity by primary key, failing with `NotFound` when absent.
    async fn obtain(&self, session: &mut Self::Session, id: &Self::Id) -> AppResult<Self::Entity>;

    /// Replace the mutable fields of an existing entity.
    async fn update(
        &self,
        session: &mut Self::Session,
        entity: &Self::Entity,
    ) -> AppResult<Self::Entity>;

    /// Remove an entity, returning the value it held before removal.
    async fn delete(&self, session: &mut Self::Session, id: &Self::Id) -> AppResult<Self::Entity>;
}
