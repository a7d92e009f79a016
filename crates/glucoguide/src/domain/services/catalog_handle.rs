//! Shared catalog handle
//!
//! Readers take a cheap `Arc` snapshot; a reload swaps in a fully built
//! catalog so no reader ever sees a partial one.

use std::sync::{Arc, OnceLock, RwLock};

use crate::domain::entities::PromptCatalog;

static GLOBAL: OnceLock<CatalogHandle> = OnceLock::new();

/// Process-wide handle, initialized with the built-in catalog on first use
pub fn global() -> &'static CatalogHandle {
    GLOBAL.get_or_init(|| CatalogHandle::new(PromptCatalog::builtin()))
}

/// Install `catalog` as the process-wide catalog
///
/// The first call decides the initial catalog; later calls swap it.
pub fn install_global(catalog: PromptCatalog) {
    install_into(&GLOBAL, catalog);
}

fn install_into(cell: &OnceLock<CatalogHandle>, catalog: PromptCatalog) {
    let mut pending = Some(catalog);
    let handle = cell.get_or_init(|| {
        CatalogHandle::new(pending.take().unwrap_or_else(PromptCatalog::builtin))
    });
    if let Some(catalog) = pending {
        handle.replace(catalog);
    }
}

/// Holder for the current catalog
#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<PromptCatalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: PromptCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Snapshot of the current catalog
    pub fn current(&self) -> Arc<PromptCatalog> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Swap in a new catalog, returning the one it replaced
    pub fn replace(&self, catalog: PromptCatalog) -> Arc<PromptCatalog> {
        let next = Arc::new(catalog);
        let previous = {
            let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
            std::mem::replace(&mut *guard, Arc::clone(&next))
        };

        tracing::info!(
            templates = next.template_count(),
            loaded_at = %next.loaded_at(),
            "Prompt catalog reloaded"
        );

        previous
    }
}

impl Default for CatalogHandle {
    fn default() -> Self {
        Self::new(PromptCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Category;

    fn custom_catalog(system_prompt: &str) -> PromptCatalog {
        let mut source = PromptCatalog::builtin().to_source();
        source.system_prompt = system_prompt.to_string();
        PromptCatalog::from_source(source).unwrap()
    }

    #[test]
    fn test_replace_is_visible_to_new_readers() {
        let handle = CatalogHandle::default();
        let before = handle.current();

        let previous = handle.replace(custom_catalog("Reloaded persona"));

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(handle.current().system_prompt(), "Reloaded persona");
        assert_ne!(before.system_prompt(), "Reloaded persona");
    }

    #[test]
    fn test_old_snapshot_stays_intact() {
        let handle = CatalogHandle::default();
        let snapshot = handle.current();
        let meal_plans = snapshot.templates(Category::MealPlanning).to_vec();

        handle.replace(custom_catalog("Another persona"));

        assert_eq!(snapshot.templates(Category::MealPlanning), meal_plans.as_slice());
        assert_eq!(snapshot.system_prompt(), PromptCatalog::builtin().system_prompt());
    }

    #[test]
    fn test_concurrent_readers_see_whole_catalogs() {
        let handle = Arc::new(CatalogHandle::default());
        let builtin_prompt = PromptCatalog::builtin().system_prompt().to_string();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                let builtin_prompt = builtin_prompt.clone();
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        let catalog = handle.current();
                        let prompt = catalog.system_prompt();
                        assert!(prompt == builtin_prompt || prompt == "Swapped");
                        assert_eq!(catalog.guidelines().len(), 5);
                    }
                })
            })
            .collect();

        for _ in 0..20 {
            handle.replace(custom_catalog("Swapped"));
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }

    #[test]
    fn test_install_initializes_then_swaps() {
        let cell = OnceLock::new();

        install_into(&cell, custom_catalog("First persona"));
        let first = cell.get().unwrap().current();
        assert_eq!(first.system_prompt(), "First persona");

        install_into(&cell, custom_catalog("Second persona"));
        assert_eq!(cell.get().unwrap().current().system_prompt(), "Second persona");
        assert_eq!(first.system_prompt(), "First persona");
    }

    #[test]
    fn test_global_defaults_to_builtin() {
        let catalog = global().current();
        assert_eq!(catalog.list_categories().len(), 7);
    }
}
