//! Stable application-wide constants.
//!
//! Values here are physical constants, selection defaults, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For knobs that operators tune at runtime, see
//! [`SelectorConfig`](crate::config::SelectorConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Geodesy ---

/// Mean Earth radius used by the Haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// --- Selection defaults (used when SELECTION_* env vars are absent) ---

/// Minimum great-circle distance (km) between a pick and the reference.
pub const DEFAULT_MIN_DISTANCE_KM: f64 = 1500.0;
/// Number of countries returned per selection.
pub const DEFAULT_SELECTION_COUNT: usize = 3;
/// Upper bound on `count` accepted from API callers.
pub const DEFAULT_MAX_SELECTION_COUNT: usize = 25;

// --- Catalogue provider defaults ---

/// Public REST Countries API root. Overridden by `RESTCOUNTRIES_BASE_URL`.
pub const RESTCOUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1";
/// Only the fields the engine needs; keeps the `/all` payload small.
pub const RESTCOUNTRIES_FIELDS: &str = "name,latlng,flags";
/// Per-request timeout for catalogue fetches. Overridden by `CATALOGUE_TIMEOUT_SECS`.
pub const DEFAULT_CATALOGUE_TIMEOUT_SECS: u64 = 10;

// --- Visit ledger ---

/// Visits kept by the in-memory ledger; older entries are dropped.
pub const MAX_VISIT_HISTORY: usize = 100;
