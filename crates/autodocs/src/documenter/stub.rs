use super::Generator;
use crate::prelude::*;
use autodocs_core::documenter::stub_document;
use std::time::Duration;

/// Offline documenter that only prepends a marker line.
#[derive(Debug, Clone)]
pub struct StubDocumenter {
    delay: Duration,
}

impl StubDocumenter {
    /// Simulated latency of a backend call.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StubDocumenter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Generator for StubDocumenter {
    async fn generate(&self, content: &str) -> std::result::Result<String, Error> {
        tokio::time::sleep(self.delay).await;
        Ok(stub_document(content))
    }
}
