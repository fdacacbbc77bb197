pub mod collation;
pub mod config;
pub mod constants;
pub mod error;
pub mod prelude;
