//! Persistence of the resume document snapshot.
//!
//! The whole document is stored as one JSON blob under a fixed key, written
//! on every mutation and read once at startup. Hydration merges the stored
//! document against the current default shape and never hard-fails: a
//! corrupt blob logs a warning and yields the default document.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use cvkit_core::Result;
use cvkit_core::resume::ResumeData;

use crate::merge::merge_with_default;
use crate::state_store::StateStore;

/// Fixed storage key for the persisted document blob.
pub const STORAGE_KEY: &str = "resume-storage";

/// Wire shape of the persisted blob.
///
/// `has_hydrated` is carried for compatibility with existing blobs but is
/// not meaningful when persisted: it is recomputed true on every load.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct PersistedState {
    resume: Value,
    has_hydrated: bool,
}

/// Reads and writes the document snapshot through a [`StateStore`].
pub struct ResumeRepository {
    store: Arc<dyn StateStore>,
}

impl ResumeRepository {
    /// Creates a repository over the given state store.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Loads the persisted document, merged against the current default
    /// shape. Any failure (missing key, unreadable blob, malformed JSON)
    /// resolves to the default document; load never fails.
    pub async fn hydrate(&self) -> ResumeData {
        let blob = match self.store.get(STORAGE_KEY).await {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!("no persisted document; starting from default");
                return ResumeData::default();
            }
            Err(err) => {
                warn!(error = %err, "failed to read persisted document; using default");
                return ResumeData::default();
            }
        };

        match serde_json::from_str::<PersistedState>(&blob) {
            Ok(persisted) => merge_with_default(&persisted.resume),
            Err(err) => {
                warn!(error = %err, "persisted document is corrupt; using default");
                ResumeData::default()
            }
        }
    }

    /// Persists the full document snapshot. Called after every mutation.
    pub async fn persist(&self, resume: &ResumeData) -> Result<()> {
        let persisted = PersistedState {
            resume: serde_json::to_value(resume)?,
            has_hydrated: true,
        };
        let blob = serde_json::to_string(&persisted)?;
        self.store.set(STORAGE_KEY, &blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_store::MemoryStateStore;
    use cvkit_core::resume::Experience;

    #[tokio::test]
    async fn test_hydrate_without_stored_state_yields_default() {
        let repo = ResumeRepository::new(Arc::new(MemoryStateStore::new()));
        assert_eq!(repo.hydrate().await, ResumeData::default());
    }

    #[tokio::test]
    async fn test_persist_then_hydrate_round_trip() {
        let repo = ResumeRepository::new(Arc::new(MemoryStateStore::new()));
        let mut resume = ResumeData::default();
        resume.personal_info.name = "Jane".to_string();
        resume.experience.push(Experience {
            company: "Acme".to_string(),
            ..Experience::new()
        });

        repo.persist(&resume).await.unwrap();
        assert_eq!(repo.hydrate().await, resume);
    }

    #[tokio::test]
    async fn test_corrupt_blob_yields_default() {
        let store = Arc::new(MemoryStateStore::new());
        store.set(STORAGE_KEY, "{ not json").await.unwrap();
        let repo = ResumeRepository::new(store);
        assert_eq!(repo.hydrate().await, ResumeData::default());
    }

    #[tokio::test]
    async fn test_hydrate_merges_older_schema_blobs() {
        let store = Arc::new(MemoryStateStore::new());
        // a blob from a revision without theme or customSections
        store
            .set(
                STORAGE_KEY,
                r#"{"resume":{"personalInfo":{"name":"Jane"}},"hasHydrated":false}"#,
            )
            .await
            .unwrap();
        let repo = ResumeRepository::new(store);
        let resume = repo.hydrate().await;
        assert_eq!(resume.personal_info.name, "Jane");
        assert_eq!(resume.sections.len(), 5);
        assert_eq!(resume.theme.font_family, "Inter");
    }
}
