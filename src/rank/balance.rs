//! Imbalance Detection and Rebalancing
//!
//! A collection is balanced when no two live siblings of one group share a
//! rank and every live rank is positive. Rebalancing renumbers each group's
//! live members to `step, 2*step, 3*step, ...` keeping their relative order,
//! and leaves deleted entities alone.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::generate::DEFAULT_RANK_STEP;
use crate::domain::{Folder, FolderMember, Ranked};

/// True when no live ranks collide within a group and all are positive
pub fn is_balanced<T: Ranked>(items: &[T]) -> bool {
    let mut seen = HashSet::new();

    for item in items.iter().filter(|i| !i.is_deleted()) {
        let rank = item.rank();
        let positive = rank.is_finite() && rank > 0.0;
        if !positive {
            return false;
        }
        if !seen.insert((item.group(), rank.to_bits())) {
            return false;
        }
    }

    true
}

/// Renumber live entities per group with the default step
pub fn rebalance<T: Ranked>(items: &[T]) -> Vec<T> {
    rebalance_with_step(items, DEFAULT_RANK_STEP)
}

/// Renumber live entities per group to multiples of `step`.
///
/// Output has the same length and order as the input; only ranks and
/// timestamps of live entities change.
pub fn rebalance_with_step<T: Ranked>(items: &[T], step: f64) -> Vec<T> {
    let mut result = items.to_vec();
    renumber_where(&mut result, step, |_| true);
    result
}

/// True when the live members of `group` alone are balanced
pub(crate) fn is_group_balanced<T: Ranked>(items: &[T], group: &T::Group) -> bool {
    let members: Vec<T> = items
        .iter()
        .filter(|i| &i.group() == group)
        .cloned()
        .collect();
    is_balanced(&members)
}

/// Renumber, in place, the live entities accepted by `include`, per group.
/// Returns how many entities were rewritten.
pub(crate) fn renumber_where<T, F>(items: &mut [T], step: f64, include: F) -> usize
where
    T: Ranked,
    F: Fn(&T) -> bool,
{
    let now = chrono::Utc::now().timestamp_millis();

    // Indices of live entities per group, in input order
    let mut groups: HashMap<T::Group, Vec<usize>> = HashMap::new();
    for (idx, item) in items.iter().enumerate() {
        if !item.is_deleted() && include(item) {
            groups.entry(item.group()).or_default().push(idx);
        }
    }

    let mut rewritten = 0;
    for (group, mut indices) in groups {
        // stable: equal ranks keep their array order
        indices.sort_by(|a, b| items[*a].rank().total_cmp(&items[*b].rank()));

        for (position, idx) in indices.iter().enumerate() {
            let entity = &mut items[*idx];
            entity.set_rank(step * (position + 1) as f64);
            entity.touch(now);
        }
        debug!("Rebalanced {} entities in group {:?}", indices.len(), group);
        rewritten += indices.len();
    }

    rewritten
}

/// Folder balance: collisions only count within the same folder type
pub fn are_folders_balanced(folders: &[Folder]) -> bool {
    is_balanced(folders)
}

/// Renumber live folders to 100, 200, ... independently per folder type
pub fn rebalance_folders(folders: &[Folder]) -> Vec<Folder> {
    rebalance(folders)
}

/// Balance of conversations or prompts, grouped by folder
pub fn are_items_balanced<T: FolderMember>(items: &[T]) -> bool {
    is_balanced(items)
}

/// Renumber live conversations or prompts independently per folder
pub fn rebalance_items<T: FolderMember>(items: &[T]) -> Vec<T> {
    rebalance(items)
}
