//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! The crate ships an in-memory implementation; a host application can put
//! its own storage behind the same traits.

use async_trait::async_trait;
use crate::domain::{Entity, FolderMember, Ranked, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// List all entities in display order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: &T::Id) -> DomainResult<()>;
}

/// Rank maintenance for a repository of ranked entities
#[async_trait]
pub trait RankPositioningOperations<T: Ranked>: Repository<T> {
    /// Rank that appends to the end of `group`
    async fn next_rank(&self, group: &T::Group) -> DomainResult<f64>;

    /// Move an entity to display `index` within its current group
    async fn move_to(&self, id: &T::Id, index: i64) -> DomainResult<T>;

    /// Whether every group is free of collisions
    async fn is_balanced(&self) -> DomainResult<bool>;

    /// Renumber all groups; returns how many entities were rewritten
    async fn rebalance(&self) -> DomainResult<usize>;
}

/// Moves between folders for conversations and prompts
#[async_trait]
pub trait FolderMoveOperations<T: FolderMember>: RankPositioningOperations<T> {
    /// Move an entity into `folder_id` (None = root) at display `index`
    async fn move_to_folder(
        &self,
        id: &T::Id,
        folder_id: Option<String>,
        index: i64,
    ) -> DomainResult<T>;
}
