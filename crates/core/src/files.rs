//! Tracked file selection
//!
//! Pure functions that turn the raw output of the version-control listing
//! into the ordered set of files a run will touch.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default extension of the files that get documented.
pub const DEFAULT_EXTENSION: &str = "py";

/// The files selected for a run.
///
/// `files` are relative to `root`, in the order the version-control tool
/// reported them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSet {
    pub root: PathBuf,
    pub files: Vec<String>,
}

impl FileSet {
    pub fn new(root: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            root: root.into(),
            files,
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Absolute path of a file in the set.
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }
}

/// Filters applied on top of the tracked file listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
    /// Extension every file must carry, with or without the leading dot.
    pub extension: String,
    /// Keep only files ending with one of these suffixes.
    pub include: Option<Vec<String>>,
    /// Drop files ending with one of these suffixes.
    pub exclude: Option<Vec<String>>,
    /// Keep only these exact paths.
    pub only: Option<Vec<String>>,
}

impl FileFilter {
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            ..Default::default()
        }
    }

    pub fn include(mut self, patterns: Vec<String>) -> Self {
        self.include = non_empty(patterns);
        self
    }

    pub fn exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = non_empty(patterns);
        self
    }

    pub fn only(mut self, paths: Vec<String>) -> Self {
        self.only = non_empty(paths);
        self
    }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Split `git ls-files` output into paths.
///
/// Accepts both the NUL separated (`-z`) and the newline separated form.
pub fn parse_tracked_files(output: &str) -> Vec<String> {
    output
        .split(|c: char| c == '\0' || c == '\n')
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize an extension into its dotted suffix form (`py` -> `.py`).
pub fn extension_suffix(extension: &str) -> String {
    format!(".{}", extension.trim_start_matches('.'))
}

fn ends_with_any(file: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| file.ends_with(pattern.as_str()))
}

/// Apply the extension, allow-list, deny-list and explicit path filters,
/// in that order, preserving the input order.
pub fn filter_files(files: Vec<String>, filter: &FileFilter) -> Vec<String> {
    let suffix = extension_suffix(&filter.extension);

    files
        .into_iter()
        .filter(|file| file.ends_with(&suffix))
        .filter(|file| match &filter.include {
            Some(patterns) => ends_with_any(file, patterns),
            None => true,
        })
        .filter(|file| match &filter.exclude {
            Some(patterns) => !ends_with_any(file, patterns),
            None => true,
        })
        .filter(|file| match &filter.only {
            Some(paths) => paths.iter().any(|path| path == file),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracked() -> Vec<String> {
        vec![
            "__init__.py".to_string(),
            "src/base.py".to_string(),
            "src/models/base.py".to_string(),
            "src/models/user.py".to_string(),
            "src/models/__init__.py".to_string(),
            "README.md".to_string(),
            "setup.cfg".to_string(),
        ]
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_tracked_files_skips_blank_lines() {
        let output = "a.py\nsrc/b.py\n\n";
        assert_eq!(parse_tracked_files(output), strings(&["a.py", "src/b.py"]));
    }

    #[test]
    fn test_parse_tracked_files_nul_separated() {
        let output = "a.py\0dir with space/b.py\0";
        assert_eq!(
            parse_tracked_files(output),
            strings(&["a.py", "dir with space/b.py"])
        );
    }

    #[test]
    fn test_parse_tracked_files_empty_output() {
        assert!(parse_tracked_files("").is_empty());
        assert!(parse_tracked_files("\n").is_empty());
    }

    #[test]
    fn test_extension_suffix() {
        assert_eq!(extension_suffix("py"), ".py");
        assert_eq!(extension_suffix(".py"), ".py");
    }

    #[test]
    fn test_no_filters_keeps_every_matching_file() {
        let files = filter_files(tracked(), &FileFilter::with_extension("py"));

        assert_eq!(files.len(), 5);
        assert!(files.iter().all(|f| f.ends_with(".py")));
        // Entry point files are only dropped when asked to.
        assert!(files.contains(&"__init__.py".to_string()));
    }

    #[test]
    fn test_include_is_intersective() {
        let filter = FileFilter::with_extension("py").include(strings(&["base.py"]));
        let files = filter_files(tracked(), &filter);

        assert_eq!(files, strings(&["src/base.py", "src/models/base.py"]));
    }

    #[test]
    fn test_exclude_is_subtractive() {
        let filter = FileFilter::with_extension("py").exclude(strings(&["__init__.py"]));
        let files = filter_files(tracked(), &filter);

        assert_eq!(
            files,
            strings(&["src/base.py", "src/models/base.py", "src/models/user.py"])
        );
    }

    #[test]
    fn test_include_and_exclude_commute() {
        let include = strings(&["base.py", "user.py"]);
        let exclude = strings(&["models/base.py"]);

        let both = filter_files(
            tracked(),
            &FileFilter::with_extension("py")
                .include(include.clone())
                .exclude(exclude.clone()),
        );
        let include_then_exclude = filter_files(
            filter_files(tracked(), &FileFilter::with_extension("py").include(include)),
            &FileFilter::with_extension("py").exclude(exclude),
        );

        assert_eq!(both, strings(&["src/base.py", "src/models/user.py"]));
        assert_eq!(both, include_then_exclude);
    }

    #[test]
    fn test_empty_pattern_lists_are_ignored() {
        let filter = FileFilter::with_extension("py")
            .include(vec![])
            .exclude(vec![]);
        assert_eq!(filter.include, None);
        assert_eq!(filter_files(tracked(), &filter).len(), 5);
    }

    #[test]
    fn test_only_restricts_to_named_paths() {
        let filter =
            FileFilter::with_extension("py").only(strings(&["src/models/user.py", "missing.py"]));
        assert_eq!(
            filter_files(tracked(), &filter),
            strings(&["src/models/user.py"])
        );
    }

    #[test]
    fn test_other_extension() {
        let files = filter_files(tracked(), &FileFilter::with_extension(".md"));
        assert_eq!(files, strings(&["README.md"]));
    }

    #[test]
    fn test_file_set_resolve() {
        let set = FileSet::new("/repo", strings(&["src/a.py"]));
        assert_eq!(set.resolve("src/a.py"), PathBuf::from("/repo/src/a.py"));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }
}
