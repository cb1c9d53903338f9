pub mod llm;
pub mod strategy_board;

pub use llm::{LLMError, LLMProvider, LLMProviderInfo, StudyAdvisor};
pub use strategy_board::{StrategyBoard, StrategyView, default_strategy};
