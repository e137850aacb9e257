mod memory;

pub use memory::MemoryVisitLedger;

use crate::error::Result;
use async_trait::async_trait;

/// Record of countries already chosen. Only the most recent entry matters to
/// selection: it is excluded from the next pick.
#[async_trait]
pub trait VisitLedger: Send + Sync {
    /// Most recently recorded country, if any.
    async fn last_visited(&self) -> Result<Option<String>>;

    /// Append `name` as the most recent visit.
    async fn record_visit(&self, name: &str) -> Result<()>;

    /// Backend name for logging and health reporting
    fn backend_name(&self) -> &'static str;
}
