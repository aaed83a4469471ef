//! Photo memories. Image uploads are not stored; each uploaded file name
//! becomes a placeholder URL.

use chrono::Utc;
use tripdeck_core::{ActivityKind, Memory, NewActivity, NewMemory};

use crate::seed::sample_memories;
use crate::{new_id, require, MemoryStore, StoreError};

/// Stand-in URL for the `index`-th image of an upload made at `stamp` (ms).
#[must_use]
pub fn placeholder_image(stamp: i64, index: usize) -> String {
    format!("/placeholder.svg?height=300&width=400&t={stamp}&i={index}")
}

impl MemoryStore {
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the title or location is blank.
    pub async fn create_memory(&self, user_id: &str, new: NewMemory) -> Result<Memory, StoreError> {
        require("title", &new.title)?;
        require("location", &new.location)?;

        let now = Utc::now();
        let stamp = now.timestamp_millis();
        let memory = Memory {
            id: new_id("memory"),
            user_id: user_id.to_string(),
            title: new.title,
            location: new.location,
            date: now.date_naive(),
            images: (0..new.image_names.len())
                .map(|i| placeholder_image(stamp, i))
                .collect(),
            description: new.description,
            tags: new.tags,
            trip: None,
            likes: 0,
            is_liked: false,
            created_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.memories.push(memory.clone());
        tables.push_activity(
            user_id,
            NewActivity {
                kind: ActivityKind::MemoryCreated,
                title: "New Memory".to_string(),
                description: format!("Added memory from {}", memory.location),
                related_id: Some(memory.id.clone()),
            },
        );
        Ok(memory)
    }

    /// The user's own memories newest first, followed by the sample album.
    pub async fn list_memories(&self, user_id: &str) -> Vec<Memory> {
        let tables = self.tables.read().await;
        let mut memories: Vec<Memory> = tables
            .memories
            .iter()
            .rev()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        memories.extend(sample_memories(user_id));
        memories
    }
}

#[cfg(test)]
mod tests {
    use tripdeck_core::NewMemory;

    use crate::{MemoryStore, StoreError};

    fn new_memory(title: &str, location: &str, images: usize) -> NewMemory {
        NewMemory {
            title: title.to_string(),
            location: location.to_string(),
            description: String::new(),
            tags: vec!["beach".to_string()],
            image_names: (0..images).map(|i| format!("photo{i}.jpg")).collect(),
        }
    }

    #[tokio::test]
    async fn list_starts_with_sample_album() {
        let store = MemoryStore::new();
        let memories = store.list_memories("user_a").await;
        assert_eq!(memories.len(), 2);
        assert_eq!(memories[0].title, "Sunset at Santorini");
    }

    #[tokio::test]
    async fn created_memory_is_listed_first_with_placeholder_images() {
        let store = MemoryStore::new();
        let memory = store
            .create_memory("user_a", new_memory("Bondi", "Sydney, Australia", 3))
            .await
            .expect("create");

        assert!(memory.id.starts_with("memory_"));
        assert_eq!(memory.images.len(), 3);
        assert!(memory.images[2].starts_with("/placeholder.svg?height=300&width=400&t="));
        assert!(memory.images[2].ends_with("&i=2"));
        assert_eq!(memory.likes, 0);

        let listed = store.list_memories("user_a").await;
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].id, memory.id);
        assert_eq!(store.list_memories("user_b").await.len(), 2);
    }

    #[tokio::test]
    async fn title_and_location_are_required() {
        let store = MemoryStore::new();
        assert_eq!(
            store
                .create_memory("user_a", new_memory("", "Sydney", 0))
                .await
                .expect_err("title"),
            StoreError::Validation("title is required".to_string())
        );
        assert_eq!(
            store
                .create_memory("user_a", new_memory("Bondi", " ", 0))
                .await
                .expect_err("location"),
            StoreError::Validation("location is required".to_string())
        );
    }
}
