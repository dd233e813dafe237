//! Rank Positioning Operations
//!
//! Moves and rebalancing for the in-memory repository, built on the rank
//! engine's pure functions.

use async_trait::async_trait;
use log::{debug, info};

use crate::domain::{FolderMember, Ranked, DomainError, DomainResult};
use crate::rank::{generate_rank_with_step, is_balanced, renumber_where, reorder_with_step};
use super::memory_repo::{live_siblings, MemoryRepository};
use super::traits::{FolderMoveOperations, RankPositioningOperations};

impl<T: Ranked> MemoryRepository<T> {
    /// Shared move path. `regroup` runs first and decides the destination
    /// group. With `auto_rebalance` off a collision is left for an explicit
    /// `rebalance` call.
    async fn move_within(
        &self,
        id: &T::Id,
        index: i64,
        regroup: impl FnOnce(&mut T) + Send,
    ) -> DomainResult<T> {
        let mut entities = self.entities.lock().await;

        let pos = entities
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("Entity {:?} not found", id)))?;

        if self.config.auto_rebalance {
            *entities =
                reorder_with_step(entities.as_slice(), id, index, self.config.step, regroup);
        } else {
            // no renumbering: only the moved entity is rewritten
            regroup(&mut entities[pos]);
            let group = entities[pos].group();
            let siblings = live_siblings(entities.as_slice(), &group, Some(id));
            let rank = generate_rank_with_step(&siblings, index, self.config.step);
            let entity = &mut entities[pos];
            entity.set_rank(rank);
            entity.touch(chrono::Utc::now().timestamp_millis());
        }

        let moved = entities[pos].clone();
        debug!("Moved {:?} to index {} of group {:?}", id, index, moved.group());
        Ok(moved)
    }
}

#[async_trait]
impl<T: Ranked> RankPositioningOperations<T> for MemoryRepository<T> {
    async fn next_rank(&self, group: &T::Group) -> DomainResult<f64> {
        let entities = self.entities.lock().await;
        let siblings = live_siblings(entities.as_slice(), group, None);
        Ok(generate_rank_with_step(&siblings, siblings.len() as i64, self.config.step))
    }

    async fn move_to(&self, id: &T::Id, index: i64) -> DomainResult<T> {
        self.move_within(id, index, |_| {}).await
    }

    async fn is_balanced(&self) -> DomainResult<bool> {
        let entities = self.entities.lock().await;
        Ok(is_balanced(entities.as_slice()))
    }

    async fn rebalance(&self) -> DomainResult<usize> {
        let mut entities = self.entities.lock().await;
        let rewritten = renumber_where(entities.as_mut_slice(), self.config.step, |_| true);
        info!("Rebalanced {} entities", rewritten);
        Ok(rewritten)
    }
}

#[async_trait]
impl<T: FolderMember> FolderMoveOperations<T> for MemoryRepository<T> {
    async fn move_to_folder(
        &self,
        id: &T::Id,
        folder_id: Option<String>,
        index: i64,
    ) -> DomainResult<T> {
        self.move_within(id, index, move |entity| entity.set_folder_id(folder_id))
            .await
    }
}
