use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored text object. Content lives in memory; anything durable is the
/// job of whatever sits behind this tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl StoredObject {
    pub fn new(name: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            content,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> ObjectSummary {
        ObjectSummary {
            id: self.id,
            name: self.name.clone(),
            size: self.content.len(),
            created_at: self.created_at,
        }
    }
}

/// Listing entry: metadata only, bodies come from the fetch route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    pub id: Uuid,
    pub name: String,
    pub size: usize,
    pub created_at: DateTime<Utc>,
}

/// Body of the upload route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadObject {
    pub name: String,
    pub content: String,
}
