pub mod country_picker;
pub mod selection;
