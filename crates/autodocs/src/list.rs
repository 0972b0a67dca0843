use crate::discovery::{discover_files, GitLsFiles};
use crate::generate::SelectionOptions;
use crate::prelude::{eprintln, println, *};
use autodocs_core::files::FileSet;
use colored::Colorize;

#[derive(Debug, Clone, clap::Args)]
pub struct ListOptions {
    #[clap(flatten)]
    pub selection: SelectionOptions,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Print the files `generate` would rewrite, without touching them.
pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let files = discover_files(
        &GitLsFiles::default(),
        &options.selection.directory,
        &options.selection.filter(),
    )
    .await?;

    if global.verbose {
        eprintln!("Repository directory: {}", files.root.display());
    }

    if options.json {
        let json = serde_json::to_string_pretty(&files)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_file_set_text(&files));
    }

    Ok(())
}

fn format_file_set_text(files: &FileSet) -> String {
    let mut result = String::new();

    for file in &files.files {
        result.push_str(&f!("{}\n", file));
    }

    result.push_str(&f!(
        "{}\n",
        f!("{} file(s) in {}", files.len(), files.root.display()).bright_cyan()
    ));
    result
}
