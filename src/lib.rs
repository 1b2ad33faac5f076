// cupola - portrait-to-orbit image relay for the Gemini API

pub mod cli;
pub mod config;
pub mod error;
pub mod genai;
pub mod models;
pub mod prompt;
pub mod server;
pub mod utils;
