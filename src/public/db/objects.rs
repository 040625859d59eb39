use dashmap::DashMap;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::public::structure::object::{ObjectSummary, StoredObject};

/// In-memory object registry backing the data routes. Durable persistence
/// is out of scope for this tier.
pub static OBJECT_STORE: LazyLock<ObjectRegistry> = LazyLock::new(ObjectRegistry::default);

#[derive(Default)]
pub struct ObjectRegistry {
    objects: DashMap<Uuid, StoredObject>,
}

impl ObjectRegistry {
    pub fn insert(&self, object: StoredObject) -> Uuid {
        let id = object.id;
        self.objects.insert(id, object);
        id
    }

    pub fn fetch(&self, id: &Uuid) -> Option<StoredObject> {
        self.objects.get(id).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, id: &Uuid) -> Option<StoredObject> {
        self.objects.remove(id).map(|(_, object)| object)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Summaries sorted newest first, windowed by [start, end).
    pub fn summaries(&self, start: usize, mut end: usize) -> Vec<ObjectSummary> {
        let mut summaries: Vec<ObjectSummary> = self
            .objects
            .iter()
            .map(|entry| entry.value().summary())
            .collect();
        summaries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        end = end.min(summaries.len());
        if start >= end {
            return Vec::new();
        }
        summaries[start..end].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn object_at(name: &str, seconds_ago: i64) -> StoredObject {
        StoredObject {
            id: Uuid::new_v4(),
            name: name.to_string(),
            content: format!("content of {name}"),
            created_at: Utc::now() - Duration::seconds(seconds_ago),
        }
    }

    #[test]
    fn insert_fetch_remove_round_trip() {
        let registry = ObjectRegistry::default();
        let object = object_at("notes", 0);
        let id = registry.insert(object.clone());

        assert_eq!(registry.fetch(&id), Some(object.clone()));
        assert_eq!(registry.remove(&id), Some(object));
        assert_eq!(registry.fetch(&id), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn summaries_are_newest_first() {
        let registry = ObjectRegistry::default();
        registry.insert(object_at("oldest", 30));
        registry.insert(object_at("middle", 20));
        registry.insert(object_at("newest", 10));

        let names: Vec<String> = registry
            .summaries(0, 10)
            .into_iter()
            .map(|summary| summary.name)
            .collect();
        assert_eq!(names, ["newest", "middle", "oldest"]);
    }

    #[test]
    fn summary_windows_clamp_to_the_registry() {
        let registry = ObjectRegistry::default();
        for i in 0..5 {
            registry.insert(object_at(&format!("object-{i}"), i));
        }

        assert_eq!(registry.summaries(0, 2).len(), 2);
        assert_eq!(registry.summaries(3, 100).len(), 2);
        assert_eq!(registry.summaries(5, 10), Vec::new());
        assert_eq!(registry.summaries(2, 2), Vec::new());
        assert_eq!(registry.summaries(4, 1), Vec::new());
    }

    #[test]
    fn summaries_carry_content_sizes_without_bodies() {
        let registry = ObjectRegistry::default();
        let object = object_at("sized", 0);
        let expected = object.content.len();
        registry.insert(object);

        let summaries = registry.summaries(0, 1);
        assert_eq!(summaries[0].size, expected);
    }
}
