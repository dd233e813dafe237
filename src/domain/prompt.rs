//! Prompt Entity
//!
//! A saved prompt template, optionally filed inside a prompt folder.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, FolderMember, Ranked};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Template text
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub folder_id: Option<String>,
    pub rank: f64,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, rename = "lastUpdateAtUTC")]
    pub last_update_at_utc: i64,
}

impl Prompt {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        rank: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
            folder_id: None,
            rank,
            deleted: false,
            last_update_at_utc: 0,
        }
    }

    pub fn in_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }
}

impl Entity for Prompt {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Ranked for Prompt {
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

impl FolderMember for Prompt {
    fn folder_id(&self) -> Option<&str> {
        self.folder_id.as_deref()
    }

    fn set_folder_id(&mut self, folder_id: Option<String>) {
        self.folder_id = folder_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_folder_membership() {
        let mut prompt = Prompt::new("p1", "Summarize", "Summarize {{text}}", 100.0);
        assert_eq!(prompt.folder_id(), None);

        prompt.set_folder_id(Some("f9".to_string()));
        assert_eq!(prompt.group(), Some("f9".to_string()));
    }
}
