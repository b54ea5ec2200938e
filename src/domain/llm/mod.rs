//! Text generation abstractions

mod config;
mod error;
mod provider;

pub use config::GenerationConfig;
pub use error::GenerationError;
pub use provider::GenerationProvider;

#[cfg(test)]
pub use provider::mock;
