//! Domain Layer
//!
//! Contains the ranked entities and the capability traits the rank engine
//! is generic over.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod conversation;
mod prompt;
mod folder;

pub use entity::{Entity, Ranked, FolderMember, DomainError, DomainResult};
pub use conversation::Conversation;
pub use prompt::Prompt;
pub use folder::{Folder, FolderType};
