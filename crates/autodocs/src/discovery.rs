use crate::prelude::*;
use autodocs_core::files::{filter_files, parse_tracked_files, FileFilter, FileSet};
use std::ffi::OsString;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Lists the files known to version control under a directory.
pub trait TrackedFiles {
    /// Paths relative to `dir`.
    fn list_tracked_files(
        &self,
        dir: &Path,
    ) -> impl Future<Output = std::result::Result<Vec<String>, Error>> + Send;
}

/// [`TrackedFiles`] backed by `git ls-files`.
#[derive(Debug, Clone, Default)]
pub struct GitLsFiles {
    envs: Vec<(String, OsString)>,
}

impl GitLsFiles {
    /// Set an environment variable on the spawned git process only.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

impl TrackedFiles for GitLsFiles {
    async fn list_tracked_files(&self, dir: &Path) -> std::result::Result<Vec<String>, Error> {
        which::which("git")
            .map_err(|_| Error::Discovery("git executable not found on PATH".to_string()))?;

        let output = tokio::process::Command::new("git")
            .args(["ls-files", "-z"])
            .current_dir(dir)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .output()
            .await
            .map_err(|e| {
                Error::Discovery(f!("Failed to run git ls-files in {}: {}", dir.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Discovery(f!(
                "git ls-files failed in {}: {}",
                dir.display(),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_tracked_files(&stdout))
    }
}

/// Resolve `directory` and select the tracked files matching `filter`.
pub async fn discover_files<T: TrackedFiles>(
    lister: &T,
    directory: &Path,
    filter: &FileFilter,
) -> std::result::Result<FileSet, Error> {
    let root = resolve_directory(directory).await?;
    log::debug!("Listing tracked files in {}", root.display());

    let tracked = lister.list_tracked_files(&root).await?;
    let files = filter_files(tracked, filter);
    log::debug!("{} file(s) selected in {}", files.len(), root.display());

    Ok(FileSet::new(root, files))
}

async fn resolve_directory(directory: &Path) -> std::result::Result<PathBuf, Error> {
    let root = tokio::fs::canonicalize(directory).await.map_err(|e| {
        Error::Discovery(f!("Cannot resolve directory {}: {}", directory.display(), e))
    })?;

    if !root.is_dir() {
        return Err(Error::Discovery(f!("{} is not a directory", root.display())));
    }

    Ok(root)
}
