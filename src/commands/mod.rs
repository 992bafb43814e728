//! Command implementations for assetsync CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod nest;
pub mod plan;
pub mod remove;
pub mod version;

pub use helpers::GlobalOptions;
