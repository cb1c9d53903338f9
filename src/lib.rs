//! Kaogang Library
//!
//! Syllabus catalog, AI study advice and the HTTP API that serves them.

use std::sync::Arc;

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use services::llm::{LLMError, LLMProvider, LLMProviderInfo, StudyAdvisor, build_provider};

/// Application shared state
///
/// The provider is chosen once at startup and injected into the advisor;
/// nothing here is mutated after construction.
#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<StudyAdvisor>,
}

impl AppState {
    pub fn new(advisor: StudyAdvisor) -> Self {
        Self { advisor: Arc::new(advisor) }
    }
}

#[cfg(test)]
mod tests;
