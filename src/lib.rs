pub mod cli;
pub mod cluster;
pub mod config;
pub mod driver;
pub mod error;
pub mod portworx;

#[cfg(test)]
mod testing;

pub use error::{PwxError, Result};
