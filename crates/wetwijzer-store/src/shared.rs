//! Hot-reloadable knowledge base handle.
//!
//! Readers take a snapshot per call and keep it for the whole analysis, so
//! a reload never shows them a half-updated knowledge base. A reload builds
//! the new knowledge base completely before swapping it in; if the build
//! fails, the old snapshot stays in service.

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{info, warn};
use wetwijzer_core::{KnowledgeBase, KnowledgeSource};

use crate::{StoreError, loader};

/// Cloneable handle to the current knowledge base.
#[derive(Clone)]
pub struct SharedKnowledgeBase {
    current: Arc<ArcSwap<KnowledgeBase>>,
}

impl SharedKnowledgeBase {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(kb)),
        }
    }

    /// Replace the current snapshot. Returns the previous one.
    pub fn replace(&self, kb: KnowledgeBase) -> Arc<KnowledgeBase> {
        let previous = self.current.swap(Arc::new(kb));
        info!("knowledge base snapshot replaced");
        previous
    }

    /// Load `data_dir` and swap it in. On failure nothing changes.
    pub fn reload_from(&self, data_dir: &Path) -> Result<(), StoreError> {
        match loader::load_dir(data_dir) {
            Ok(kb) => {
                self.replace(kb);
                Ok(())
            }
            Err(e) => {
                warn!(dir = %data_dir.display(), error = %e, "reload failed, keeping current knowledge base");
                Err(e)
            }
        }
    }
}

impl KnowledgeSource for SharedKnowledgeBase {
    fn snapshot(&self) -> Arc<KnowledgeBase> {
        self.current.load_full()
    }
}

impl From<KnowledgeBase> for SharedKnowledgeBase {
    fn from(kb: KnowledgeBase) -> Self {
        Self::new(kb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use wetwijzer_core::Normalizer;

    fn empty_kb() -> KnowledgeBase {
        KnowledgeBase::new(vec![], &[], Normalizer::default()).unwrap()
    }

    #[test]
    fn old_snapshot_survives_replace() {
        let shared = SharedKnowledgeBase::new(empty_kb());
        let before = shared.snapshot();
        assert_eq!(before.laws().len(), 0);

        shared.replace(loader::builtin().unwrap());

        // The reader that took a snapshot still sees the old one.
        assert_eq!(before.laws().len(), 0);
        assert_eq!(shared.snapshot().laws().len(), 8);
    }

    #[test]
    fn clones_share_the_same_slot() {
        let a = SharedKnowledgeBase::new(empty_kb());
        let b = a.clone();
        a.replace(loader::builtin().unwrap());
        assert_eq!(b.snapshot().laws().len(), 8);
    }

    #[test]
    fn failed_reload_keeps_current() {
        let shared = SharedKnowledgeBase::new(loader::builtin().unwrap());
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(loader::LAWS_DIR)).unwrap();
        fs::write(dir.path().join(loader::CATEGORIES_FILE), "not = [valid").unwrap();

        assert!(shared.reload_from(dir.path()).is_err());
        assert_eq!(shared.snapshot().laws().len(), 8);
    }

    #[test]
    fn concurrent_readers_see_whole_snapshots() {
        let shared = SharedKnowledgeBase::new(empty_kb());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = shared.clone();
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        let kb = reader.snapshot();
                        let n = kb.laws().len();
                        assert!(n == 0 || n == 8);
                        assert_eq!(kb.laws().len(), n);
                    }
                })
            })
            .collect();

        for _ in 0..20 {
            shared.replace(loader::builtin().unwrap());
            shared.replace(empty_kb());
        }
        for h in handles {
            h.join().unwrap();
        }
    }
}
