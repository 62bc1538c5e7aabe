// ABOUTME: Library crate for dreamer exposing public API for testing and external use

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod gemini;
pub mod models;
pub mod wizard;
