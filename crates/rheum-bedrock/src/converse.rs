//! Bedrock Converse implementation of [`ModelInvoker`].
//!
//! The Converse API has no response-format switch, so the schema goes in as
//! the input schema of a single tool and `toolChoice` forces the model to
//! call it. The tool-use input is the structured answer.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SpecificToolChoice, SystemContentBlock, Tool,
    ToolChoice, ToolConfiguration, ToolInputSchema, ToolSpecification,
};
use tracing::{debug, info};

use crate::document::{document_to_json, json_to_document};
use crate::error::AssessmentError;
use crate::invoke::{BoxFuture, ModelInvoker, ModelReply, ModelRequest, TokenCount};

pub struct BedrockInvoker {
    client: Client,
    model_id: String,
}

impl BedrockInvoker {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
        }
    }

    async fn converse(&self, request: &ModelRequest) -> Result<ModelReply, AssessmentError> {
        let tool_spec = ToolSpecification::builder()
            .name(&request.tool_name)
            .description(&request.tool_description)
            .input_schema(ToolInputSchema::Json(json_to_document(&request.schema)))
            .build()
            .map_err(|e| AssessmentError::Transport(e.to_string()))?;

        let tool_choice = SpecificToolChoice::builder()
            .name(&request.tool_name)
            .build()
            .map_err(|e| AssessmentError::Transport(e.to_string()))?;

        let tool_config = ToolConfiguration::builder()
            .tools(Tool::ToolSpec(tool_spec))
            .tool_choice(ToolChoice::Tool(tool_choice))
            .build()
            .map_err(|e| AssessmentError::Transport(e.to_string()))?;

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(request.prompt.clone()))
            .build()
            .map_err(|e| AssessmentError::Transport(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(request.system_prompt.clone()))
            .messages(message)
            .tool_config(tool_config)
            .send()
            .await
            .map_err(|e| AssessmentError::Transport(e.into_service_error().to_string()))?;

        let usage = response.usage().map(|u| TokenCount {
            input: u.input_tokens.max(0) as u64,
            output: u.output_tokens.max(0) as u64,
        });

        let Some(output_message) = response.output().and_then(|o| o.as_message().ok()) else {
            debug!(model_id = %self.model_id, "no message in converse response");
            return Ok(ModelReply { text: None, usage });
        };

        let tool_input = output_message.content().iter().find_map(|block| match block {
            ContentBlock::ToolUse(tool_use) if tool_use.name() == request.tool_name => {
                Some(document_to_json(tool_use.input()))
            }
            _ => None,
        });

        let text = match tool_input {
            Some(value) => Some(value.to_string()),
            None => {
                // The model answered in prose instead of calling the tool.
                let joined = output_message
                    .content()
                    .iter()
                    .filter_map(|block| {
                        if let ContentBlock::Text(text) = block {
                            Some(text.as_str())
                        } else {
                            None
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("");
                (!joined.is_empty()).then_some(joined)
            }
        };

        info!(
            model_id = %self.model_id,
            stop_reason = %response.stop_reason().as_str(),
            has_text = text.is_some(),
            "converse reply received"
        );

        Ok(ModelReply { text, usage })
    }
}

impl ModelInvoker for BedrockInvoker {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn invoke<'a>(
        &'a self,
        request: &'a ModelRequest,
    ) -> BoxFuture<'a, Result<ModelReply, AssessmentError>> {
        Box::pin(self.converse(request))
    }
}
