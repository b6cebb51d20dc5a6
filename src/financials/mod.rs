//! Property financial inputs and portfolio record loading

mod data;
pub mod loader;

pub use data::PropertyFinancials;
pub use loader::{load_properties, load_properties_from_reader};
