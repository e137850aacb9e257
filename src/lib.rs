// Library exports for testing and reusability

pub mod catalogue;
pub mod config;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result, SelectionError};
pub use services::selection::select;

// App state for sharing across the application
use catalogue::CatalogueProvider;
use ledger::VisitLedger;
use services::country_picker::CountryPicker;
use std::sync::Arc;

pub struct AppState {
    pub catalogue: Arc<dyn CatalogueProvider>,
    pub ledger: Arc<dyn VisitLedger>,
    pub picker: CountryPicker,
}

impl AppState {
    pub fn new(
        catalogue: Arc<dyn CatalogueProvider>,
        ledger: Arc<dyn VisitLedger>,
        selector: config::SelectorConfig,
    ) -> Self {
        let picker = CountryPicker::new(catalogue.clone(), ledger.clone(), selector);
        AppState {
            catalogue,
            ledger,
            picker,
        }
    }
}
