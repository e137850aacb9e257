pub mod coordinates;
pub mod location;
pub mod selection;

pub use coordinates::{haversine_km, Coordinates};
pub use location::{name_key, Candidate, Location};
pub use selection::{PickRequest, SelectionMode, SelectionRequest, SelectionResult};
