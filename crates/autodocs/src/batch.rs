use crate::documenter::Generator;
use crate::prelude::*;
use autodocs_core::files::FileSet;
use autodocs_core::report::FileOutcome;
use futures::future::join_all;
use indicatif::ProgressBar;
use std::path::Path;

/// Read, document and overwrite a single file.
///
/// The file is only written once generation succeeded, so any error leaves
/// it exactly as it was.
pub async fn document_file<G: Generator>(
    path: &Path,
    generator: &G,
) -> std::result::Result<(), Error> {
    log::debug!("Reading {}", path.display());
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(path.display(), e))?;

    log::debug!("Generating documentation for {}", path.display());
    let documented = generator.generate(&content).await?;

    log::debug!("Writing {}", path.display());
    tokio::fs::write(path, documented)
        .await
        .map_err(|e| Error::io(path.display(), e))?;

    Ok(())
}

/// Document every file of the set concurrently.
///
/// All pipelines are started together and awaited as a whole. A failing
/// file becomes a failed [`FileOutcome`] and never stops its siblings.
/// Outcomes come back in the order of `files`.
pub async fn document_files<G: Generator>(
    files: &FileSet,
    generator: &G,
    progress: Option<&ProgressBar>,
) -> Vec<FileOutcome> {
    let pipelines = files.files.iter().map(|file| async move {
        let outcome = match document_file(&files.resolve(file), generator).await {
            Ok(()) => {
                log::info!("Documented {}", file);
                FileOutcome::succeeded(file.as_str())
            }
            Err(e) => {
                log::error!("Failed to document {}: {}", file, e);
                FileOutcome::failed(file.as_str(), e.to_string())
            }
        };

        if let Some(bar) = progress {
            bar.set_message(f!("{} done", file));
            bar.inc(1);
        }

        outcome
    });

    join_all(pipelines).await
}
