//! Template store backed by a two-level directory tree
//!
//! The layout is `<root>/<category>/<template>.txt`. Categories are the
//! immediate subdirectories of the root and templates are the `.txt` files
//! directly inside a category. Nothing is cached: every call lists the
//! filesystem again.

use crate::error::{PromptBuilderError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension (without the dot) that marks a template file
pub const TEMPLATE_EXTENSION: &str = "txt";

/// A named grouping of templates, backed by a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Directory name, unique within the store
    pub name: String,
    /// Full path to the category directory
    pub path: PathBuf,
}

/// A template file belonging to one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// File name including the extension, e.g. `blog_post.txt`
    pub file_name: String,
    /// File stem, used as the question table key, e.g. `blog_post`
    pub id: String,
    /// Name of the owning category
    pub category: String,
    /// Full path to the template file
    pub path: PathBuf,
}

impl Template {
    fn from_path(category: &str, path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        let id = path.file_stem()?.to_str()?.to_string();
        Some(Self {
            file_name,
            id,
            category: category.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Read-only access to a directory of categorized templates
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at `root`. The directory is not touched until
    /// the first listing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every category, sorted by name
    ///
    /// Fails with [`PromptBuilderError::StoreUnavailable`] if the root does
    /// not exist or is not a directory. An empty store is not an error.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> = list_children(&self.root)?
            .into_iter()
            .filter(|(_, is_dir)| *is_dir)
            .filter_map(|(path, _)| {
                let name = path.file_name()?.to_str()?.to_string();
                Some(Category { name, path })
            })
            .collect();

        categories.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(
            "Found {} categories under {}",
            categories.len(),
            self.root.display()
        );
        Ok(categories)
    }

    /// List every template in `category`, sorted by file name
    ///
    /// Only regular files with the [`TEMPLATE_EXTENSION`] directly inside the
    /// category directory count. Fails with
    /// [`PromptBuilderError::StoreUnavailable`] if the category is missing.
    pub fn list_templates(&self, category: &str) -> Result<Vec<Template>> {
        let category_dir = self.root.join(category);
        let mut templates: Vec<Template> = list_children(&category_dir)?
            .into_iter()
            .filter(|(path, is_dir)| !*is_dir && has_template_extension(path))
            .filter_map(|(path, _)| Template::from_path(category, &path))
            .collect();

        templates.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        tracing::debug!(
            "Found {} templates in category '{}'",
            templates.len(),
            category
        );
        Ok(templates)
    }

    /// Read a template's raw text
    pub fn read_template(&self, template: &Template) -> Result<String> {
        tracing::debug!("Reading template {}", template.path.display());
        fs::read_to_string(&template.path)
            .map_err(|e| PromptBuilderError::template_unreadable(&template.path, e))
    }
}

fn has_template_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(TEMPLATE_EXTENSION)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Immediate, non-hidden children of `dir` paired with whether each is a
/// directory
fn list_children(dir: &Path) -> Result<Vec<(PathBuf, bool)>> {
    let metadata =
        fs::metadata(dir).map_err(|e| PromptBuilderError::store_unavailable(dir, e))?;
    if !metadata.is_dir() {
        return Err(PromptBuilderError::store_unavailable(
            dir,
            io::Error::new(io::ErrorKind::Other, "not a directory"),
        ));
    }

    let mut children = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            // A child that cannot be resolved, such as a dangling symlink
            Err(e) if e.depth() > 0 => {
                tracing::debug!(
                    "Skipping unreadable entry {}: {}",
                    e.path().unwrap_or(dir).display(),
                    e
                );
                continue;
            }
            Err(e) => {
                let source = e.into_io_error().unwrap_or_else(|| {
                    io::Error::new(io::ErrorKind::Other, "directory walk failed")
                });
                return Err(PromptBuilderError::store_unavailable(dir, source));
            }
        };

        let path = entry.path();
        if is_hidden(path) {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_dir() {
            children.push((path.to_path_buf(), true));
        } else if file_type.is_file() {
            children.push((path.to_path_buf(), false));
        }
    }

    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_store() -> (TempDir, TemplateStore) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("technical")).unwrap();
        fs::create_dir(root.join("content_creation")).unwrap();
        fs::create_dir(root.join("empty")).unwrap();
        fs::write(root.join("README.txt"), "not a category").unwrap();

        let technical = root.join("technical");
        fs::write(technical.join("debug_code.txt"), "Debug this {{language}} code").unwrap();
        fs::write(technical.join("code_snippet.txt"), "Write {{language}}").unwrap();
        fs::write(technical.join("notes.md"), "ignored").unwrap();
        fs::create_dir(technical.join("nested.txt")).unwrap();

        let store = TemplateStore::new(root);
        (temp_dir, store)
    }

    #[test]
    fn test_list_categories_sorted_directories_only() {
        let (_temp_dir, store) = create_store();

        let names: Vec<_> = store
            .list_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, vec!["content_creation", "empty", "technical"]);
    }

    #[test]
    fn test_list_categories_skips_hidden_directories() {
        let (temp_dir, store) = create_store();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();

        let categories = store.list_categories().unwrap();
        assert!(categories.iter().all(|c| c.name != ".git"));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_categories_skips_dangling_symlink() {
        let (temp_dir, store) = create_store();
        std::os::unix::fs::symlink(
            temp_dir.path().join("gone"),
            temp_dir.path().join("stale_link"),
        )
        .unwrap();

        let names: Vec<_> = store
            .list_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, vec!["content_creation", "empty", "technical"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_templates_skips_dangling_symlink() {
        let (temp_dir, store) = create_store();
        let technical = temp_dir.path().join("technical");
        std::os::unix::fs::symlink(technical.join("gone.txt"), technical.join("stale.txt"))
            .unwrap();

        let ids: Vec<_> = store
            .list_templates("technical")
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();

        assert_eq!(ids, vec!["code_snippet", "debug_code"]);
    }

    #[test]
    fn test_list_categories_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::new(temp_dir.path());

        assert!(store.list_categories().unwrap().is_empty());
    }

    #[test]
    fn test_list_categories_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::new(temp_dir.path().join("does-not-exist"));

        let err = store.list_categories().unwrap_err();
        assert!(matches!(err, PromptBuilderError::StoreUnavailable { .. }));
    }

    #[test]
    fn test_list_categories_root_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("templates");
        fs::write(&file, "").unwrap();
        let store = TemplateStore::new(file);

        let err = store.list_categories().unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_list_templates_filters_extension_and_directories() {
        let (_temp_dir, store) = create_store();

        let templates = store.list_templates("technical").unwrap();
        let file_names: Vec<_> = templates.iter().map(|t| t.file_name.as_str()).collect();

        assert_eq!(file_names, vec!["code_snippet.txt", "debug_code.txt"]);
        assert_eq!(templates[1].id, "debug_code");
        assert_eq!(templates[1].category, "technical");
    }

    #[test]
    fn test_list_templates_empty_category() {
        let (_temp_dir, store) = create_store();

        assert!(store.list_templates("empty").unwrap().is_empty());
    }

    #[test]
    fn test_list_templates_missing_category() {
        let (_temp_dir, store) = create_store();

        let err = store.list_templates("nope").unwrap_err();
        assert!(matches!(err, PromptBuilderError::StoreUnavailable { .. }));
    }

    #[test]
    fn test_read_template() {
        let (_temp_dir, store) = create_store();
        let templates = store.list_templates("technical").unwrap();

        let text = store.read_template(&templates[1]).unwrap();
        assert_eq!(text, "Debug this {{language}} code");
    }

    #[test]
    fn test_read_template_removed_after_listing() {
        let (_temp_dir, store) = create_store();
        let templates = store.list_templates("technical").unwrap();
        fs::remove_file(&templates[0].path).unwrap();

        let err = store.read_template(&templates[0]).unwrap_err();
        assert!(matches!(err, PromptBuilderError::TemplateUnreadable { .. }));
    }

    #[test]
    fn test_read_template_invalid_utf8() {
        let (temp_dir, store) = create_store();
        let path = temp_dir.path().join("technical").join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let template = store
            .list_templates("technical")
            .unwrap()
            .into_iter()
            .find(|t| t.id == "binary")
            .unwrap();

        let err = store.read_template(&template).unwrap_err();
        assert!(matches!(err, PromptBuilderError::TemplateUnreadable { .. }));
    }
}
