//! Tags (read only)

use crate::client::SkalinClient;
use crate::codec::{null_as_default, Entity};
use crate::error::{Error, Result};
use crate::pagination::GetParams;
use serde::{Deserialize, Serialize};

/// Collection path
pub const TAGS_PATH: &str = "/tags";

/// Path of a single tag
pub fn tag_path(id: &str) -> String {
    format!("{TAGS_PATH}/{id}")
}

/// A tag; every field decodes `null` as empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    /// Entity kind the tag applies to
    #[serde(deserialize_with = "null_as_default")]
    pub entity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
}

impl Entity for Tag {
    const KIND: &'static str = "tag";

    fn id(&self) -> Option<&str> {
        Some(self.id.as_str()).filter(|id| !id.is_empty())
    }
}

impl SkalinClient {
    /// List every tag matching `params`, following pagination
    pub async fn get_tags(&self, params: Option<GetParams>) -> Result<Vec<Tag>> {
        self.get_all(TAGS_PATH, params).await
    }

    /// Fetch one tag by id
    pub async fn get_tag(&self, id: &str) -> Result<Tag> {
        if id.is_empty() {
            return Err(Error::precondition("tag id is empty"));
        }
        self.get_one(&tag_path(id)).await
    }
}
