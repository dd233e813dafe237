//! In-Memory Repository - Core CRUD Operations
//!
//! Holds one collection of ranked entities behind a tokio mutex.
//! Rank maintenance lives in `positioning`.

use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::RankConfig;
use crate::domain::{Ranked, DomainError, DomainResult};
use crate::rank::{
    generate_rank_with_step, is_balanced, renumber_where, sort_by_rank, sort_by_rank_and_group,
};
use super::traits::Repository;

/// In-memory store for one entity type (conversations, prompts or folders)
pub struct MemoryRepository<T: Ranked> {
    pub(super) entities: Arc<Mutex<Vec<T>>>,
    pub(super) config: RankConfig,
}

impl<T: Ranked> MemoryRepository<T> {
    pub fn new(config: RankConfig) -> Self {
        Self::with_entities(Vec::new(), config)
    }

    /// Start from a snapshot loaded by the host's persistence layer
    pub fn with_entities(entities: Vec<T>, config: RankConfig) -> Self {
        Self {
            entities: Arc::new(Mutex::new(entities)),
            config,
        }
    }

    /// Current collection in storage order, for the host to persist
    pub async fn snapshot(&self) -> Vec<T> {
        self.entities.lock().await.clone()
    }

    /// Live entities of `group`, ascending rank
    pub async fn siblings(&self, group: &T::Group) -> Vec<T> {
        let entities = self.entities.lock().await;
        live_siblings(entities.as_slice(), group, None)
    }
}

/// Live members of `group` sorted by rank, optionally leaving one id out
pub(super) fn live_siblings<T: Ranked>(
    entities: &[T],
    group: &T::Group,
    exclude: Option<&T::Id>,
) -> Vec<T> {
    let members: Vec<T> = entities
        .iter()
        .filter(|e| !e.is_deleted() && &e.group() == group && Some(e.id()) != exclude)
        .cloned()
        .collect();
    sort_by_rank(&members)
}

/// Renumber `group` if the configured policy asks for it and it has a collision
pub(super) fn settle_group<T: Ranked>(entities: &mut [T], group: &T::Group, config: &RankConfig) {
    if !config.auto_rebalance || is_balanced(&live_siblings(entities, group, None)) {
        return;
    }
    let rewritten = renumber_where(entities, config.step, |e| &e.group() == group);
    info!("Auto-rebalanced group {:?}: {} entities renumbered", group, rewritten);
}

#[async_trait]
impl<T: Ranked> Repository<T> for MemoryRepository<T> {
    async fn create(&self, entity: &T) -> DomainResult<T> {
        let mut entities = self.entities.lock().await;

        if entities.iter().any(|e| e.id() == entity.id()) {
            return Err(DomainError::Conflict(format!("Entity {:?} already exists", entity.id())));
        }

        let mut created = entity.clone();
        let group = created.group();
        if !(created.rank().is_finite() && created.rank() > 0.0) {
            let siblings = live_siblings(entities.as_slice(), &group, None);
            let end = siblings.len() as i64;
            created.set_rank(generate_rank_with_step(&siblings, end, self.config.step));
        }
        created.touch(chrono::Utc::now().timestamp_millis());

        debug!("Creating {:?} in group {:?} at rank {}", created.id(), group, created.rank());
        entities.push(created.clone());
        settle_group(entities.as_mut_slice(), &group, &self.config);

        // settling may have renumbered the new entity
        Ok(entities
            .iter()
            .find(|e| e.id() == created.id())
            .cloned()
            .unwrap_or(created))
    }

    async fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>> {
        let entities = self.entities.lock().await;
        Ok(entities.iter().find(|e| e.id() == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<T>> {
        let entities = self.entities.lock().await;
        Ok(sort_by_rank_and_group(entities.as_slice()))
    }

    async fn update(&self, entity: &T) -> DomainResult<T> {
        let mut entities = self.entities.lock().await;

        let pos = entities
            .iter()
            .position(|e| e.id() == entity.id())
            .ok_or_else(|| DomainError::NotFound(format!("Entity {:?} not found", entity.id())))?;

        let previous_group = entities[pos].group();
        let mut updated = entity.clone();
        updated.touch(chrono::Utc::now().timestamp_millis());
        let group = updated.group();
        entities[pos] = updated;

        if previous_group != group {
            debug!("Entity {:?} regrouped {:?} -> {:?}", entity.id(), previous_group, group);
        }
        settle_group(entities.as_mut_slice(), &group, &self.config);

        Ok(entities[pos].clone())
    }

    async fn delete(&self, id: &T::Id) -> DomainResult<()> {
        let mut entities = self.entities.lock().await;

        let before = entities.len();
        entities.retain(|e| e.id() != id);
        if entities.len() == before {
            return Err(DomainError::NotFound(format!("Entity {:?} not found", id)));
        }

        info!("Deleted entity {:?}", id);
        Ok(())
    }
}
