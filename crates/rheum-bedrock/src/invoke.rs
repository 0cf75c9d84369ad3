use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One schema-constrained model call.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub system_prompt: String,
    pub prompt: String,
    /// JSON Schema the reply must satisfy. Always sent with the call.
    pub schema: serde_json::Value,
    pub tool_name: String,
    pub tool_description: String,
}

/// Raw reply from the model, before validation.
#[derive(Debug, Clone, Default)]
pub struct ModelReply {
    /// JSON text of the structured answer. `None` when the service returned
    /// nothing usable.
    pub text: Option<String>,
    pub usage: Option<TokenCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub input: u64,
    pub output: u64,
}

impl TokenCount {
    pub fn total(&self) -> u64 {
        self.input + self.output
    }
}

/// The external generative model.
///
/// Implementations make exactly one call per `invoke` and never retry.
/// Returns a boxed future for dyn compatibility.
pub trait ModelInvoker: Send + Sync {
    /// Identifier of the model being called, for logs.
    fn model_id(&self) -> &str;

    fn invoke<'a>(
        &'a self,
        request: &'a ModelRequest,
    ) -> BoxFuture<'a, Result<ModelReply, AssessmentError>>;
}
