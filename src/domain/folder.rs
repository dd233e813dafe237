//! Folder Entity
//!
//! Folders group conversations or prompts. Chat folders and prompt folders
//! are ranked independently of each other.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, Ranked};

/// Folder type determines which sidebar (and ranking space) it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FolderType {
    /// Holds conversations
    #[default]
    Chat,
    /// Holds prompts
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique identifier
    pub id: String,
    /// Folder name
    #[serde(default)]
    pub name: String,
    /// Ranking space
    #[serde(rename = "type")]
    pub folder_type: FolderType,
    /// Sort key among folders of the same type
    pub rank: f64,
    #[serde(default)]
    pub deleted: bool,
    /// Last modification, epoch milliseconds
    #[serde(default, rename = "lastUpdateAtUTC")]
    pub last_update_at_utc: i64,
}

impl Folder {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        folder_type: FolderType,
        rank: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            folder_type,
            rank,
            deleted: false,
            last_update_at_utc: 0,
        }
    }
}

impl Entity for Folder {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Ranked for Folder {
    type Group = FolderType;

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
        self.folder_type
    }

    fn touch(&mut self, at_utc: i64) {
        self.last_update_at_utc = at_utc;
    }
}
