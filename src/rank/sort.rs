//! Display Ordering
//!
//! Stable sorts producing the flat sidebar order: live entities before
//! deleted ones, each group kept contiguous, ascending rank inside a group.

use std::cmp::Ordering;

use crate::domain::{Folder, FolderMember, Ranked};

/// Plain ascending rank order (stable)
pub fn sort_by_rank<T: Ranked>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| a.rank().total_cmp(&b.rank()));
    sorted
}

/// Order by (deleted, group, rank). Groups follow `T::Group`'s ordering.
pub fn sort_by_rank_and_group<T: Ranked>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(compare_by_rank_and_group);
    sorted
}

/// Conversations or prompts: root items first, then each folder's members
/// together (folders by id), ascending rank within a folder.
pub fn sort_by_rank_and_folder<T: FolderMember>(items: &[T]) -> Vec<T> {
    // Option orders None before Some, which puts the root group first
    sort_by_rank_and_group(items)
}

/// Folders: chat folders before prompt folders, ascending rank within a type.
pub fn sort_by_rank_and_folder_type(folders: &[Folder]) -> Vec<Folder> {
    sort_by_rank_and_group(folders)
}

fn compare_by_rank_and_group<T: Ranked>(a: &T, b: &T) -> Ordering {
    a.is_deleted()
        .cmp(&b.is_deleted())
        .then_with(|| a.group().cmp(&b.group()))
        .then_with(|| a.rank().total_cmp(&b.rank()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Conversation, FolderType, Prompt};

    fn conv(id: &str, folder_id: Option<&str>, rank: f64, deleted: bool) -> Conversation {
        let mut c = Conversation::new(id, format!("Conversation {}", id), rank);
        c.folder_id = folder_id.map(str::to_string);
        c.deleted = deleted;
        c
    }

    fn folder(id: &str, folder_type: FolderType, rank: f64, deleted: bool) -> Folder {
        let mut f = Folder::new(id, format!("Folder {}", id), folder_type, rank);
        f.deleted = deleted;
        f
    }

    fn ids<T: Ranked<Id = String>>(items: &[T]) -> Vec<&str> {
        items.iter().map(|i| i.id().as_str()).collect()
    }

    #[test]
    fn test_sort_by_rank_and_folder() {
        let items = vec![
            conv("2", Some("1"), 500.0, false),
            conv("4", Some("2"), 200.0, true),
            conv("5", None, 200.0, false),
            conv("7", Some("2"), 100.0, false),
            conv("3", None, 400.0, false),
            conv("1", None, 300.0, true),
            conv("6", Some("2"), 400.0, false),
        ];

        let sorted = sort_by_rank_and_folder(&items);
        assert_eq!(ids(&sorted), vec!["5", "3", "2", "7", "6", "1", "4"]);
        // input untouched
        assert_eq!(items[0].id, "2");
    }

    #[test]
    fn test_sort_by_rank_and_folder_prompts() {
        let a = Prompt::new("a", "", "", 300.0).in_folder("x");
        let b = Prompt::new("b", "", "", 100.0).in_folder("x");
        let c = Prompt::new("c", "", "", 900.0);

        let sorted = sort_by_rank_and_folder(&[a, b, c]);
        assert_eq!(ids(&sorted), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_by_rank_and_folder_type() {
        let folders = vec![
            folder("1", FolderType::Chat, 200.0, false),
            folder("3", FolderType::Prompt, 500.0, false),
            folder("5", FolderType::Chat, 100.0, true),
            folder("2", FolderType::Chat, 400.0, false),
            folder("6", FolderType::Prompt, 250.0, true),
            folder("4", FolderType::Prompt, 300.0, false),
        ];

        let sorted = sort_by_rank_and_folder_type(&folders);
        assert_eq!(ids(&sorted), vec!["1", "2", "4", "3", "5", "6"]);
    }

    #[test]
    fn test_equal_ranks_keep_input_order() {
        let items = vec![
            conv("b", None, 100.0, false),
            conv("a", None, 100.0, false),
            conv("c", None, 50.0, false),
        ];
        assert_eq!(ids(&sort_by_rank(&items)), vec!["c", "b", "a"]);
        assert_eq!(ids(&sort_by_rank_and_folder(&items)), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Folder> = Vec::new();
        assert!(sort_by_rank_and_folder_type(&empty).is_empty());
    }
}
