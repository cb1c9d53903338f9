//! LLM Service Module
//!
//! Provides AI-generated study advice for the syllabus browser.
//!
//! # Architecture
//! ```text
//! ┌─────────────────┐
//! │  StudyAdvisor   │  ← Facade (always returns a usable result)
//! └────────┬────────┘
//!          │ Arc<dyn LLMProvider>
//!    ┌─────┴──────┐
//!    ▼            ▼
//! ┌──────┐   ┌─────────┐
//! │Gemini│   │ MiniMax │
//! └──────┘   └─────────┘
//! ```
//!
//! # Supported Scenarios
//! - Module Analysis (summary, key points, sample question, tip, trends)
//! - Subject Strategy (tip, time allocation)

mod client;
mod credential;
mod fallback;
mod models;
mod providers;
mod scenarios;
mod service;

pub use credential::CredentialSource;
pub use fallback::{fallback_analysis, fallback_strategy};
pub use models::*;
pub use providers::{GeminiProvider, MiniMaxProvider, build_provider};
pub use scenarios::ScenarioRequest;
pub use service::{LLMProvider, StudyAdvisor};
