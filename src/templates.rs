//! Page-template discovery.
//!
//! Templates are plain files in a configured directory. A missing primary
//! directory falls back to the configured secondary one, then to an empty
//! listing; discovery never fails.

use crate::config::SiteSettings;
use crate::i18n::capitalize;
use crate::links::Site;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Lists plain files in a directory.
pub trait FileLister {
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// Filesystem-backed [`FileLister`]. Subdirectories are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskLister;

impl FileLister for DiskLister {
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    files.push(name.to_string());
                }
            }
        }
        Ok(files)
    }
}

/// Primary template directory from settings.
pub fn template_dir(settings: &SiteSettings) -> PathBuf {
    Path::new(&settings.views_root).join(&settings.template_dir)
}

/// Selectable page templates as `(name, label)` pairs, name-sorted, with a
/// leading `("", "Default")` entry.
///
/// `directory` overrides the configured template directory when given.
/// Partials (names starting with '_') and the `master`/`default` layouts
/// are never selectable.
pub fn list_templates(
    lister: &dyn FileLister,
    settings: &SiteSettings,
    directory: Option<&Path>,
) -> Vec<(String, String)> {
    let primary = match directory {
        Some(dir) => dir.to_path_buf(),
        None => template_dir(settings),
    };
    let files = match lister.list_files(&primary) {
        Ok(files) => files,
        Err(err) => {
            warn!(
                "Cannot list templates in {}: {}, trying fallback",
                primary.display(),
                err
            );
            list_fallback(lister, settings)
        }
    };

    let mut names: Vec<String> = files
        .iter()
        .filter_map(|file| template_name(file))
        .collect();
    names.sort();
    names.dedup();

    let mut templates = Vec::with_capacity(names.len() + 1);
    templates.push((String::new(), "Default".to_string()));
    templates.extend(names.into_iter().map(|name| {
        let label = capitalize(&name);
        (name, label)
    }));
    templates
}

fn list_fallback(lister: &dyn FileLister, settings: &SiteSettings) -> Vec<String> {
    let Some(fallback) = settings.template_fallback_dir.as_deref() else {
        return Vec::new();
    };
    lister.list_files(Path::new(fallback)).unwrap_or_else(|err| {
        warn!("Cannot list templates in {}: {}", fallback, err);
        Vec::new()
    })
}

/// Selectable template name for a file, when it is selectable. The name is
/// the filename up to the first '.'.
fn template_name(file: &str) -> Option<String> {
    let name = file.split('.').next().unwrap_or(file);
    if name.is_empty() || name.starts_with('_') || name == "master" || name == "default" {
        return None;
    }
    Some(name.to_string())
}

impl Site<'_> {
    /// Selectable page templates for this site. See [`list_templates`].
    pub fn templates(
        &self,
        lister: &dyn FileLister,
        directory: Option<&Path>,
    ) -> Vec<(String, String)> {
        list_templates(lister, self.settings, directory)
    }
}
