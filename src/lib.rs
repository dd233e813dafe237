//! Chat Rank
//!
//! Sparse rank ordering for conversations, prompts and folders: inserting or
//! dragging an item rewrites only that item's rank, and collisions are
//! detected and renumbered on demand.
//!
//! Layered architecture:
//! - domain: Ranked entities and capability traits
//! - rank: Pure ordering engine (generate, sort, balance, reorder)
//! - repository: Async in-memory store applying the engine on writes
//! - config: Rank step and rebalance policy

pub mod domain;
pub mod rank;
pub mod repository;
pub mod config;

pub use config::RankConfig;
pub use domain::{
    Conversation, DomainError, DomainResult, Entity, Folder, FolderMember, FolderType, Prompt,
    Ranked,
};
pub use rank::{
    are_folders_balanced, generate_rank, rebalance_folders, sort_by_rank_and_folder,
    sort_by_rank_and_folder_type,
};
