// ABOUTME: Core data models for saved prompt configurations

pub mod saved;

pub use saved::{ConfigStore, SavedConfiguration};
