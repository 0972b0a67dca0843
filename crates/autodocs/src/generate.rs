use crate::batch::document_files;
use crate::confirm::{confirm_action, confirm_with};
use crate::discovery::{discover_files, GitLsFiles};
use crate::documenter::{select_documenter, BackendConfig, DocumenterOptions, Generator};
use crate::prelude::{eprintln, println, *};
use autodocs_core::files::{FileFilter, FileSet, DEFAULT_EXTENSION};
use autodocs_core::report::{BatchReport, FileOutcome};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Which tracked files a command works on.
#[derive(Debug, Clone, clap::Args)]
pub struct SelectionOptions {
    /// Directory inside the git working tree to scan
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Only keep files ending with this suffix (repeatable, e.g. --include base.py)
    #[arg(long, value_name = "SUFFIX")]
    pub include: Vec<String>,

    /// Drop files ending with this suffix (repeatable, e.g. --exclude __init__.py)
    #[arg(long, value_name = "SUFFIX")]
    pub exclude: Vec<String>,

    /// Only handle these tracked files, relative to DIRECTORY (repeatable)
    #[arg(long, value_name = "PATH")]
    pub file: Vec<String>,

    /// Extension of the files to document
    #[arg(long, env = "AUTODOCS_EXTENSION", default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

impl SelectionOptions {
    pub fn filter(&self) -> FileFilter {
        FileFilter::with_extension(self.extension.clone())
            .include(self.include.clone())
            .exclude(self.exclude.clone())
            .only(self.file.clone())
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct GenerateOptions {
    #[clap(flatten)]
    pub selection: SelectionOptions,

    /// Documenter to use: a gpt model (gpt-4, ChatGPT), an Ollama model (llama3, qwen2.5-coder) or mock
    #[arg(short, long, env = "AUTODOCS_DOCUMENTER", default_value = "gpt-4")]
    pub documenter: String,

    /// Timeout in seconds for a single backend call
    #[arg(short, long, env = "AUTODOCS_TIMEOUT", default_value = "100")]
    pub timeout: u64,

    /// Retries of a failed backend call
    #[arg(long, env = "AUTODOCS_RETRIES", default_value = "3")]
    pub retries: u32,

    /// Ollama base URL (overrides OLLAMA_URL env var)
    #[arg(long)]
    pub ollama_url: Option<String>,

    /// Output the batch report as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateOptions {
    fn documenter_options(&self) -> DocumenterOptions {
        DocumenterOptions {
            extension: self.selection.extension.clone(),
            timeout: Duration::from_secs(self.timeout),
            retries: self.retries,
            backend: BackendConfig::from_env().with_overrides(self.ollama_url.clone()),
        }
    }
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let documenter = select_documenter(&options.documenter, &options.documenter_options())?;

    if global.verbose {
        eprintln!("Documenter: {}", documenter.describe());
        eprintln!("Timeout: {}s, retries: {}", options.timeout, options.retries);
    }

    let files = discover_files(
        &GitLsFiles::default(),
        &options.selection.directory,
        &options.selection.filter(),
    )
    .await?;

    if global.verbose {
        eprintln!("Repository directory: {}", files.root.display());
    }

    if files.is_empty() {
        println!(
            "No tracked .{} files found in {}. Aborting.",
            options.selection.extension.trim_start_matches('.'),
            files.root.display()
        );
        return Ok(());
    }

    if !confirm_action(&files.files).await? {
        println!("{}", "Action aborted by the user.".yellow());
        return Ok(());
    }

    let progress = new_progress_bar(files.len());
    let outcomes = document_files(&files, &documenter, Some(&progress)).await;
    progress.finish_and_clear();

    let report = BatchReport::new(documenter.describe(), outcomes);

    if options.json {
        output_json(&report)?;
    } else {
        print!("{}", format_report_text(&report));
    }

    Ok(())
}

/// Gate the batch behind the operator's answer.
///
/// Returns `None` when the operator declines, in which case nothing on disk
/// was touched.
pub async fn confirm_and_document<G, R, W>(
    files: &FileSet,
    generator: &G,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Vec<FileOutcome>>>
where
    G: Generator,
    R: BufRead,
    W: Write,
{
    if !confirm_with(&files.files, input, output)? {
        return Ok(None);
    }

    Ok(Some(document_files(files, generator, None).await))
}

fn new_progress_bar(len: usize) -> ProgressBar {
    let progress = ProgressBar::new(len as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

fn output_json(report: &BatchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
    println!("{}", json);
    Ok(())
}

/// Convert a batch report to formatted text with colors
fn format_report_text(report: &BatchReport) -> String {
    let mut result = String::new();

    for outcome in report.outcomes.iter().filter(|o| o.is_success()) {
        result.push_str(&f!("{} {}\n", "✓".green().bold(), outcome.file));
    }

    for (file, error) in report.failures() {
        result.push_str(&f!("{} {}: {}\n", "✗".red().bold(), file, error.red()));
    }

    result.push_str(&f!("\n{}\n", report.summary().bright_cyan().bold()));
    result
}
