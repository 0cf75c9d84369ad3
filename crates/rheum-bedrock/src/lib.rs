//! rheum-bedrock
//!
//! Assessment request client: turns an intake record into a Bedrock
//! invocation with a schema-constrained reply, and validates that reply into
//! a `ConsultResponse`.

pub mod client;
pub mod converse;
pub mod document;
pub mod error;
pub mod invoke;
pub mod parse;
pub mod prompt;
pub mod safety;
pub mod schema;
