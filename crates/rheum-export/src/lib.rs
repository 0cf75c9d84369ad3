//! rheum-export
//!
//! Presentation of a consult response: the result view model, the clipboard
//! export text and the HTML result panel.

pub mod error;
pub mod render;
pub mod view;
