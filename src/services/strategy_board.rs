//! Strategy Board
//!
//! State of the strategy card: one strategy shown per subject, a built-in
//! default until the user asks the advisor for a fresh one.
//!
//! Refreshes are neither deduplicated nor cancelled. When several are in
//! flight the one that settles last wins; a refresh that settles after the
//! category was switched is discarded.
//!
//! This is a library-level view model for embedding clients. The HTTP API
//! is stateless and serves strategies through the advisor handlers instead.

use serde::Serialize;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{StrategyResult, SubjectCategory};
use crate::services::llm::StudyAdvisor;

/// Built-in strategy shown before any refresh
pub fn default_strategy(category: SubjectCategory) -> StrategyResult {
    match category {
        SubjectCategory::Xingce => StrategyResult {
            tip: "行测的核心在于“速度”与“取舍”。言语和资料分析是得分基石，常识靠日常积累，数量关系建议放在最后做，学会合理放弃难题。".to_string(),
            time_advice: "平均每题不超过50秒，每日刷题保持手感。".to_string(),
        },
        SubjectCategory::Zonghe => StrategyResult {
            tip: "申论/综合应用的核心在于“材料为王”。所有答案要点都隐藏在给定资料中。坚持“问什么答什么”，注意卷面整洁，条理清晰，分条作答。".to_string(),
            time_advice: "小题每题20分钟，大作文预留60分钟。".to_string(),
        },
    }
}

/// What the strategy card currently displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyView {
    pub category: SubjectCategory,
    pub heading: String,
    pub strategy: StrategyResult,
    pub ai_generated: bool,
    pub loading: bool,
}

#[derive(Debug)]
struct BoardState {
    category: SubjectCategory,
    strategy: StrategyResult,
    ai_generated: bool,
    in_flight: usize,
    /// Bumped on every category switch
    epoch: u64,
}

impl BoardState {
    fn view(&self) -> StrategyView {
        StrategyView {
            category: self.category,
            heading: self.category.strategy_heading().to_string(),
            strategy: self.strategy.clone(),
            ai_generated: self.ai_generated,
            loading: self.in_flight > 0,
        }
    }
}

#[derive(Debug)]
pub struct StrategyBoard {
    state: RwLock<BoardState>,
}

impl StrategyBoard {
    pub fn new(category: SubjectCategory) -> Self {
        Self {
            state: RwLock::new(BoardState {
                category,
                strategy: default_strategy(category),
                ai_generated: false,
                in_flight: 0,
                epoch: 0,
            }),
        }
    }

    pub fn snapshot(&self) -> StrategyView {
        self.read().view()
    }

    /// Switch subject; any fetched strategy is dropped in favour of the
    /// new subject's default.
    pub fn select_category(&self, category: SubjectCategory) -> StrategyView {
        let mut state = self.write();
        state.category = category;
        state.strategy = default_strategy(category);
        state.ai_generated = false;
        state.epoch += 1;
        state.view()
    }

    /// Ask the advisor for a new strategy for the current subject.
    ///
    /// The lock is released while the advisor call is pending.
    pub async fn refresh(&self, advisor: &StudyAdvisor) -> StrategyView {
        let (category, epoch) = {
            let mut state = self.write();
            state.in_flight += 1;
            (state.category, state.epoch)
        };

        let outcome = advisor.subject_strategy(category).await;

        let mut state = self.write();
        state.in_flight = state.in_flight.saturating_sub(1);
        if state.epoch == epoch {
            state.strategy = outcome.into_inner();
            state.ai_generated = true;
        } else {
            tracing::debug!(
                "Discarding {} strategy: board switched to {}",
                category,
                state.category
            );
        }
        state.view()
    }

    fn read(&self) -> RwLockReadGuard<'_, BoardState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BoardState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
