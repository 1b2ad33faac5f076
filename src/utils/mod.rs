//! Cross-cutting helpers for the cupola relay.
//!
//! - `logging`: Tracing initialization and credential redaction for log output.

pub mod logging;
