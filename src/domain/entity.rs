//! Domain Layer - Core Entity Traits
//!
//! `Entity` is the basic contract for everything the store holds.
//! `Ranked` adds the ordering capability the rank engine works on, and
//! `FolderMember` marks entities that live inside a folder.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone + 'static {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash + Debug + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// An entity with a sparse sort key inside a grouping dimension.
///
/// Two entities only compete for ranks when their `group()` is equal.
pub trait Ranked: Entity {
    /// Grouping dimension (folder id, folder type, ...)
    type Group: Clone + Ord + Eq + Hash + Debug + Send + Sync;

    fn rank(&self) -> f64;

    fn set_rank(&mut self, rank: f64);

    fn is_deleted(&self) -> bool;

    fn group(&self) -> Self::Group;

    /// Record a modification at `at_utc` (epoch milliseconds)
    fn touch(&mut self, at_utc: i64);
}

/// A conversation or prompt: ranked inside the folder it belongs to
/// (`None` = root level).
pub trait FolderMember: Ranked<Group = Option<String>> {
    fn folder_id(&self) -> Option<&str>;

    fn set_folder_id(&mut self, folder_id: Option<String>);
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Conflict(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
