//! Drag-and-Drop Reordering
//!
//! Moves one entity to a display position inside a group by giving it a
//! fresh rank between its new neighbours. Only the moved entity changes,
//! unless its group ends up with a collision, in which case the group's
//! other members are renumbered first and the rank is generated again.

use log::{debug, warn};

use super::balance::{is_group_balanced, renumber_where};
use super::generate::{generate_rank_with_step, DEFAULT_RANK_STEP};
use crate::domain::{Folder, FolderMember, Ranked};

/// Move a conversation or prompt into `target_folder_id` at display `index`
/// among that folder's live members. Unknown ids leave the input unchanged.
pub fn reorder_item<T: FolderMember>(
    items: &[T],
    item_id: &T::Id,
    target_folder_id: Option<&str>,
    index: i64,
) -> Vec<T> {
    let folder = target_folder_id.map(str::to_string);
    reorder_with_step(items, item_id, index, DEFAULT_RANK_STEP, move |item| {
        item.set_folder_id(folder)
    })
}

/// Move a folder to display `index` among live folders of its own type
pub fn reorder_folder(folders: &[Folder], folder_id: &str, index: i64) -> Vec<Folder> {
    reorder_with_step(folders, &folder_id.to_string(), index, DEFAULT_RANK_STEP, |_| {})
}

/// Generic move: `regroup` is applied to the moved entity first, and the
/// group it ends up in is the one it is ranked against.
pub fn reorder_with_step<T, F>(
    items: &[T],
    item_id: &T::Id,
    index: i64,
    step: f64,
    regroup: F,
) -> Vec<T>
where
    T: Ranked,
    F: FnOnce(&mut T),
{
    let mut result = items.to_vec();
    let Some(pos) = result.iter().position(|i| i.id() == item_id) else {
        warn!("Reorder skipped: entity {:?} not found", item_id);
        return result;
    };

    regroup(&mut result[pos]);
    let target_group = result[pos].group();
    place_at(&mut result, pos, &target_group, index, step);

    if !result[pos].is_deleted() && !is_group_balanced(&result, &target_group) {
        debug!("Collision after moving {:?}, renumbering group {:?}", item_id, target_group);
        let moved = item_id.clone();
        renumber_where(&mut result, step, |i| i.group() == target_group && i.id() != &moved);
        place_at(&mut result, pos, &target_group, index, step);
    }

    result
}

fn place_at<T: Ranked>(items: &mut [T], pos: usize, group: &T::Group, index: i64, step: f64) {
    let moved_id = items[pos].id().clone();
    let mut siblings: Vec<T> = items
        .iter()
        .filter(|i| !i.is_deleted() && &i.group() == group && i.id() != &moved_id)
        .cloned()
        .collect();
    siblings.sort_by(|a, b| a.rank().total_cmp(&b.rank()));

    let rank = generate_rank_with_step(&siblings, index, step);
    let entity = &mut items[pos];
    entity.set_rank(rank);
    entity.touch(chrono::Utc::now().timestamp_millis());
}
