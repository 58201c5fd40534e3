use std::collections::HashMap;

use anyhow::Result;

use crate::fallback::fallback_ideas;
use crate::models::{CurationFlags, Idea};
use crate::store::overlay::CurationOverlay;

/// Where the session's ideas came from. Fixed at load time; every curation
/// decision dispatches on it, so there is no mixed mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSource {
    /// Listing succeeded; the service owns curation flags.
    Remote,
    /// Bundled dataset; the local overlay owns curation flags.
    Fallback,
}

/// In-memory idea list for the session - single source of truth for the
/// projection. Built once per mount, mutated only by flag application.
pub struct IdeaStore {
    ideas: Vec<Idea>,
    index: HashMap<String, usize>,
    source: StoreSource,
}

impl IdeaStore {
    pub fn from_remote(ideas: Vec<Idea>) -> Self {
        Self::build(ideas, StoreSource::Remote)
    }

    /// Bundled dataset with the local overlay's flags merged in.
    pub fn from_fallback(overlay: &CurationOverlay) -> Self {
        let mut ideas = fallback_ideas();
        for idea in &mut ideas {
            idea.set_flags(overlay.flags_for(&idea.id));
        }
        Self::build(ideas, StoreSource::Fallback)
    }

    fn build(ideas: Vec<Idea>, source: StoreSource) -> Self {
        let index = ideas
            .iter()
            .enumerate()
            .map(|(i, idea)| (idea.id.clone(), i))
            .collect();
        Self {
            ideas,
            index,
            source,
        }
    }

    pub fn source(&self) -> StoreSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == StoreSource::Fallback
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Idea> {
        self.index.get(id).map(|&i| &self.ideas[i])
    }

    /// Replace one idea's curation flags (normalized). Returns false when the
    /// id is not in the store.
    pub fn apply_flags(&mut self, id: &str, flags: CurationFlags) -> bool {
        match self.index.get(id) {
            Some(&i) => {
                self.ideas[i].set_flags(flags);
                true
            }
            None => {
                tracing::warn!("flags for unknown idea {} dropped", id);
                false
            }
        }
    }
}

/// Loader policy: a failed, timed-out, or empty listing falls through to the
/// bundled dataset. Never fatal - the projection always has candidates.
pub fn store_from_listing(listing: Result<Vec<Idea>>, overlay: &CurationOverlay) -> IdeaStore {
    match listing {
        Ok(ideas) if !ideas.is_empty() => {
            tracing::info!("session store: {} ideas from service", ideas.len());
            IdeaStore::from_remote(ideas)
        }
        Ok(_) => {
            tracing::warn!("listing was empty, using bundled dataset");
            IdeaStore::from_fallback(overlay)
        }
        Err(e) => {
            tracing::warn!("listing failed ({}), using bundled dataset", e);
            IdeaStore::from_fallback(overlay)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, IdeaMetrics, Regions};
    use tempfile::tempdir;

    fn idea(id: &str, score: f64) -> Idea {
        Idea {
            id: id.to_string(),
            title: format!("Idea {id}"),
            description: None,
            emoji: "💡".to_string(),
            source: "test".to_string(),
            category: Category::Saas,
            created_at: 1000,
            score,
            is_trending: false,
            regions: Regions::default(),
            metrics: IdeaMetrics::default(),
            is_favorite: false,
            is_hidden: false,
        }
    }

    #[test]
    fn test_remote_listing_becomes_store() {
        let store = store_from_listing(
            Ok(vec![idea("a", 8.0), idea("b", 6.0)]),
            &CurationOverlay::load(tempdir().unwrap().path()),
        );
        assert_eq!(store.source(), StoreSource::Remote);
        assert_eq!(store.len(), 2);
        assert!(store.get("b").is_some());
    }

    #[test]
    fn test_failed_listing_falls_back_non_empty() {
        let dir = tempdir().unwrap();
        let overlay = CurationOverlay::load(dir.path());
        let store = store_from_listing(Err(anyhow::anyhow!("connection refused")), &overlay);
        assert!(store.is_fallback());
        assert!(!store.is_empty());
    }

    #[test]
    fn test_empty_listing_falls_back() {
        let dir = tempdir().unwrap();
        let overlay = CurationOverlay::load(dir.path());
        let store = store_from_listing(Ok(Vec::new()), &overlay);
        assert!(store.is_fallback());
        assert!(!store.is_empty());
    }

    #[test]
    fn test_fallback_merges_overlay() {
        let dir = tempdir().unwrap();
        let mut overlay = CurationOverlay::load(dir.path());
        overlay.set(
            "1",
            CurationFlags {
                is_favorite: true,
                is_hidden: false,
            },
        );
        overlay.set(
            "3",
            CurationFlags {
                is_favorite: false,
                is_hidden: true,
            },
        );

        let store = IdeaStore::from_fallback(&overlay);
        assert!(store.get("1").unwrap().is_favorite);
        assert!(store.get("3").unwrap().is_hidden);
        assert!(!store.get("2").unwrap().is_favorite);
    }

    #[test]
    fn test_apply_flags() {
        let mut store = IdeaStore::from_remote(vec![idea("a", 8.0)]);
        assert!(store.apply_flags(
            "a",
            CurationFlags {
                is_favorite: true,
                is_hidden: false,
            }
        ));
        assert!(store.get("a").unwrap().is_favorite);
        assert!(!store.apply_flags("zzz", CurationFlags::default()));
    }
}
