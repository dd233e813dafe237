//! Rank Generation
//!
//! Computes the rank for an item inserted at a position among its siblings
//! without touching any sibling.
//!
//! Repeated insertions into the same gap halve the gap each time, so after
//! roughly fifty of them the midpoint stops being representable. Callers
//! recover with a rebalance (see `balance`).

use crate::domain::Ranked;

/// Gap left between consecutive ranks, and the rank of the first item
pub const DEFAULT_RANK_STEP: f64 = 100.0;

/// Rank for inserting at `index` among `siblings` (sorted ascending, non-deleted,
/// same group). Out-of-range indices mean "append".
pub fn generate_rank<T: Ranked>(siblings: &[T], index: i64) -> f64 {
    generate_rank_with_step(siblings, index, DEFAULT_RANK_STEP)
}

/// Same as [`generate_rank`] with a custom step
pub fn generate_rank_with_step<T: Ranked>(siblings: &[T], index: i64, step: f64) -> f64 {
    let len = siblings.len();
    let (first, last) = match (siblings.first(), siblings.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return step,
    };

    let index = usize::try_from(index)
        .ok()
        .filter(|i| *i <= len)
        .unwrap_or(len);

    if index == 0 {
        first.rank() / 2.0
    } else if index == len {
        last.rank() + step
    } else {
        (siblings[index - 1].rank() + siblings[index].rank()) / 2.0
    }
}

/// Rank for appending after the last sibling
pub fn next_rank<T: Ranked>(siblings: &[T]) -> f64 {
    generate_rank(siblings, siblings.len() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Folder, FolderType};

    fn siblings() -> Vec<Folder> {
        [100.0, 200.0, 300.0]
            .iter()
            .enumerate()
            .map(|(i, rank)| Folder::new(format!("f{}", i), "", FolderType::Chat, *rank))
            .collect()
    }

    #[test]
    fn test_insert_at_start() {
        assert_eq!(generate_rank(&siblings(), 0), 50.0);
    }

    #[test]
    fn test_insert_in_middle() {
        assert_eq!(generate_rank(&siblings(), 1), 150.0);
        assert_eq!(generate_rank(&siblings(), 2), 250.0);
    }

    #[test]
    fn test_insert_at_end() {
        assert_eq!(generate_rank(&siblings(), 3), 400.0);
        assert_eq!(next_rank(&siblings()), 400.0);
    }

    #[test]
    fn test_out_of_range_appends() {
        assert_eq!(generate_rank(&siblings(), -1), 400.0);
        assert_eq!(generate_rank(&siblings(), 4), 400.0);
        assert_eq!(generate_rank(&siblings(), i64::MIN), 400.0);
    }

    #[test]
    fn test_empty_siblings() {
        let empty: Vec<Folder> = Vec::new();
        assert_eq!(generate_rank(&empty, 0), 100.0);
        assert_eq!(generate_rank(&empty, 7), 100.0);
        assert_eq!(generate_rank_with_step(&empty, 0, 10.0), 10.0);
    }

    #[test]
    fn test_custom_step() {
        assert_eq!(generate_rank_with_step(&siblings(), 3, 1000.0), 1300.0);
        // step never affects midpoints
        assert_eq!(generate_rank_with_step(&siblings(), 1, 1000.0), 150.0);
    }

    #[test]
    fn test_repeated_start_insertions_stay_positive() {
        let mut items = siblings();
        for i in 0..20 {
            let rank = generate_rank(&items, 0);
            assert!(rank > 0.0);
            items.insert(0, Folder::new(format!("n{}", i), "", FolderType::Chat, rank));
        }
        assert!(items.windows(2).all(|w| w[0].rank < w[1].rank));
    }
}
