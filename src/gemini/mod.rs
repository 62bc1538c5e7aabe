// ABOUTME: Gemini API integration module for story, suggestion, and storyboard generation
// All generative work is delegated here; the rest of the app treats results as opaque

pub mod client;
pub mod types;

pub use client::GeminiClient;
pub use types::{GeminiError, ShotDetails, StoryboardShot};
