use crate::prelude::*;
use clap::Parser;

mod batch;
mod confirm;
mod discovery;
mod documenter;
mod error;
mod generate;
mod list;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Add docstrings to every git tracked source file using a text generation model"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "AUTODOCS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Document tracked files in place
    Generate(crate::generate::GenerateOptions),

    /// List the tracked files that would be documented
    List(crate::list::ListOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Generate(options) => crate::generate::run(options, app.global).await,
        SubCommands::List(options) => crate::list::run(options, app.global).await,
    }
}
