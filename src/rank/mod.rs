//! Rank Engine
//!
//! Pure, synchronous functions over in-memory collections of ranked
//! entities. Nothing here mutates its input or performs I/O:
//! - generate: rank for an insertion point
//! - sort: display ordering
//! - balance: collision detection and renumbering
//! - reorder: drag-and-drop moves built on the three above

mod generate;
mod sort;
mod balance;
mod reorder;

pub use generate::{generate_rank, generate_rank_with_step, next_rank, DEFAULT_RANK_STEP};
pub use sort::{
    sort_by_rank, sort_by_rank_and_group, sort_by_rank_and_folder, sort_by_rank_and_folder_type,
};
pub use balance::{
    is_balanced, rebalance, rebalance_with_step,
    are_folders_balanced, rebalance_folders,
    are_items_balanced, rebalance_items,
};
pub use reorder::{reorder_item, reorder_folder, reorder_with_step};

pub(crate) use balance::renumber_where;
