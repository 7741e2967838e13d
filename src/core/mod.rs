pub mod config;
pub mod converters;
pub mod enums;
pub mod errors;
pub mod kernel;
pub mod tracking;
pub mod types;
pub mod wire;
