//! Conversation Entity
//!
//! A chat conversation, optionally filed inside a chat folder.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, FolderMember, Ranked};

/// A chat conversation as seen by the ordering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Owning folder (None = root level)
    #[serde(default)]
    pub folder_id: Option<String>,
    /// Sort key within the folder
    pub rank: f64,
    /// Soft-deleted, awaiting cleanup by the sync layer
    #[serde(default)]
    pub deleted: bool,
    /// Last modification, epoch milliseconds
    #[serde(default, rename = "lastUpdateAtUTC")]
    pub last_update_at_utc: i64,
}

impl Conversation {
    /// Create a new root-level conversation
    pub fn new(id: impl Into<String>, name: impl Into<String>, rank: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            folder_id: None,
            rank,
            deleted: false,
            last_update_at_utc: 0,
        }
    }

    /// Place the conversation inside a folder
    pub fn in_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }
}

impl Entity for Conversation {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Ranked for Conversation {
    type Group = Option<String>;

    fn rank(&self) -> f64 {
        self.rank
    }

    fn set_rank(&mut self, rank: f64) {
        self.rank = rank;
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }

    fn group(&self) -> Self::Group {
        self.folder_id.clone()
    }

    fn touch(&mut self, at_utc: i64) {
        self.last_update_at_utc = at_utc;
    }
}

impl FolderMember for Conversation {
    fn folder_id(&self) -> Option<&str> {
        self.folder_id.as_deref()
    }

    fn set_folder_id(&mut self, folder_id: Option<String>) {
        self.folder_id = folder_id;
    }
}
