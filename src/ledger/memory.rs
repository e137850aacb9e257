use crate::constants::MAX_VISIT_HISTORY;
use crate::error::{AppError, Result};
use crate::ledger::VisitLedger;
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::RwLock;

/// Process-local visit history, capped at `MAX_VISIT_HISTORY` entries.
/// Lost on restart.
#[derive(Debug, Default)]
pub struct MemoryVisitLedger {
    history: RwLock<VecDeque<String>>,
}

impl MemoryVisitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest first.
    pub async fn history(&self) -> Vec<String> {
        self.history.read().await.iter().cloned().collect()
    }
}

#[async_trait]
impl VisitLedger for MemoryVisitLedger {
    async fn last_visited(&self) -> Result<Option<String>> {
        Ok(self.history.read().await.back().cloned())
    }

    async fn record_visit(&self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidRequest(
                "country_name must not be empty".to_string(),
            ));
        }

        let mut history = self.history.write().await;
        if history.len() >= MAX_VISIT_HISTORY {
            history.pop_front();
        }
        history.push_back(name.to_string());
        drop(history);

        tracing::debug!("Recorded visit: {}", name);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
