//! rheum-core
//!
//! Pure domain types for the rheumatology consult assistant: the intake
//! record and its form controller, the model's consult response, and the
//! view state machine that sequences the intake, loading and result screens.
//! No AWS SDK or HTTP dependency.

pub mod catalog;
pub mod error;
pub mod intake;
pub mod models;
pub mod session;
pub mod view;
