//! Request-scoped data types.
//!
//! - `relay`: the caller-facing request/response contract.
//! - `genai`: the Generative Language API wire format.
//!
//! Both live only for the duration of one invocation; nothing here is
//! persisted or shared across requests.

pub mod genai;
pub mod relay;
