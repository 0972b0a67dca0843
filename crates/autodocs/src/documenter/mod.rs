mod remote;
mod stub;

use crate::prelude::*;
use autodocs_core::documenter::{parse_selector, DocumenterKind};
use std::future::Future;
use std::time::Duration;

pub use remote::{BackendConfig, RemoteDocumenter};
pub use stub::StubDocumenter;

/// Turns the content of a file into the same content with documentation.
pub trait Generator {
    /// Never mutates `content`; any fault is reported as [`Error::Generation`].
    fn generate(
        &self,
        content: &str,
    ) -> impl Future<Output = std::result::Result<String, Error>> + Send;
}

/// Settings shared by every documenter built for a run.
#[derive(Debug, Clone)]
pub struct DocumenterOptions {
    pub extension: String,
    pub timeout: Duration,
    pub retries: u32,
    pub backend: BackendConfig,
}

/// The documenter chosen for a run.
#[derive(Debug)]
pub enum Documenter {
    Remote(RemoteDocumenter),
    Stub(StubDocumenter),
}

impl Documenter {
    /// Human readable name, e.g. `OpenAI (gpt-4)`.
    pub fn describe(&self) -> String {
        match self {
            Documenter::Remote(remote) => f!("{} ({})", remote.provider(), remote.model()),
            Documenter::Stub(_) => "mock".to_string(),
        }
    }
}

impl Generator for Documenter {
    async fn generate(&self, content: &str) -> std::result::Result<String, Error> {
        match self {
            Documenter::Remote(remote) => remote.generate(content).await,
            Documenter::Stub(stub) => stub.generate(content).await,
        }
    }
}

/// Build the documenter named by `selector`.
pub fn select_documenter(
    selector: &str,
    options: &DocumenterOptions,
) -> std::result::Result<Documenter, Error> {
    match parse_selector(selector)? {
        DocumenterKind::Mock => Ok(Documenter::Stub(StubDocumenter::default())),
        DocumenterKind::Remote { provider, model } => {
            let remote = RemoteDocumenter::new(
                provider,
                model,
                &options.extension,
                &options.backend,
                options.timeout,
                options.retries,
            )?;
            Ok(Documenter::Remote(remote))
        }
    }
}
