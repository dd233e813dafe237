//! Repository Layer
//!
//! Data access abstractions and an in-memory implementation that keeps
//! ranks healthy on every write.
//! - traits: CRUD, positioning and folder-move interfaces
//! - memory_repo: Core CRUD operations
//! - positioning: Moves and rebalancing

mod traits;
mod memory_repo;
mod positioning;


pub use traits::{Repository, RankPositioningOperations, FolderMoveOperations};
pub use memory_repo::MemoryRepository;
