//! Catalog file loading
//!
//! Catalog files hold a `CatalogSource` as TOML, or JSON when the file ends
//! in `.json`.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use glucoguide::{CatalogSource, PromptCatalog};

/// Load the catalog at `path`, or the built-in one when no path is given
pub fn load_catalog(path: Option<&Path>) -> Result<PromptCatalog> {
    match path {
        Some(path) => load_catalog_file(path),
        None => Ok(PromptCatalog::builtin()),
    }
}

pub fn load_catalog_file(path: &Path) -> Result<PromptCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog from {:?}", path))?;

    let source = parse_source(path, &content)
        .with_context(|| format!("Failed to parse catalog file {:?}", path))?;

    let catalog = PromptCatalog::from_source(source)
        .with_context(|| format!("Invalid catalog in {:?}", path))?;

    tracing::info!(path = %path.display(), templates = catalog.template_count(), "Loaded catalog file");
    Ok(catalog)
}

fn parse_source(path: &Path, content: &str) -> Result<CatalogSource> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(toml::from_str(content)?)
    }
}

/// Render a catalog as TOML
pub fn dump_toml(catalog: &PromptCatalog) -> Result<String> {
    toml::to_string_pretty(&catalog.to_source()).context("Failed to serialize catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use glucoguide::Category;

    #[test]
    fn test_no_path_is_builtin() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.system_prompt(), PromptCatalog::builtin().system_prompt());
    }

    #[test]
    fn test_dumped_toml_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, dump_toml(&PromptCatalog::builtin()).unwrap()).unwrap();

        let catalog = load_catalog(Some(&path)).unwrap();
        assert_eq!(
            catalog.templates(Category::Type1Guidance),
            PromptCatalog::builtin().templates(Category::Type1Guidance)
        );
    }

    #[test]
    fn test_json_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string(&PromptCatalog::builtin().to_source()).unwrap();
        fs::write(&path, json).unwrap();

        let catalog = load_catalog_file(&path).unwrap();
        assert_eq!(catalog.guidelines().len(), 5);
    }

    #[test]
    fn test_invalid_catalog_reports_reason() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            "system_prompt = \"Hi\"\nguidelines = [\"Be kind\"]\n\n[categories]\nmeal_planning = [\"Plan lunch\"]\n",
        )
        .unwrap();

        let err = load_catalog_file(&path).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("carb_counting has no templates"), "{}", chain);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_catalog_file(&dir.path().join("nope.toml")).is_err());
    }
}
