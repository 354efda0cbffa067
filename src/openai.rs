use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Credentials;
use crate::error::ClassifyError;
use crate::prompt::PromptTemplate;
use crate::{
    Classifier, DEFAULT_MODEL, MAX_TOKENS, OPENAI_API_BASE, OPENAI_API_CHAT_ENDPOINT,
    REQUEST_TIMEOUT, TEMPERATURE,
};

/// Chat-completions classifier: one user message per complaint, first line of
/// the reply taken as the department label.
pub struct OpenAIModel {
    model: String,
    credentials: Credentials,
    template: PromptTemplate,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Clone)]
enum MessageRole {
    User,
}

impl Serialize for MessageRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            MessageRole::User => serializer.serialize_str("user"),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
struct OpenAIMessage {
    role: MessageRole,
    content: String,
}

struct GenerateMessageOptions {
    temperature: f64,
    max_tokens: u32,
}

struct GenerateMessageOptionsBuilder {
    temperature: f64,
    max_tokens: u32,
}

impl GenerateMessageOptionsBuilder {
    pub fn new() -> Self {
        GenerateMessageOptionsBuilder {
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    pub fn temperature(&mut self, temperature: f64) -> &mut Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(&mut self, max_tokens: u32) -> &mut Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn build(&self) -> GenerateMessageOptions {
        GenerateMessageOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequestBody {
    model: String,
    messages: Vec<OpenAIMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAIModel {
    pub fn new(credentials: Credentials, template: PromptTemplate) -> Result<Self, ClassifyError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(OpenAIModel {
            model: DEFAULT_MODEL.to_string(),
            credentials,
            template,
            base_url: format!("https://{}", OPENAI_API_BASE),
            client,
        })
    }

    /// Points requests at another chat-completions compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_message(
        &self,
        content: String,
        options: GenerateMessageOptions,
    ) -> Result<String, ClassifyError> {
        let url = format!("{}{}", self.base_url, OPENAI_API_CHAT_ENDPOINT);
        let body = ChatRequestBody {
            model: self.model.clone(),
            messages: vec![OpenAIMessage {
                role: MessageRole::User,
                content,
            }],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header(
                "Authorization",
                format!("Bearer {}", self.credentials.api_key()),
            )
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, model = %self.model, "chat completion response");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifyError::Status { status, body });
        }

        let chat_response = response.json::<ChatResponse>().await?;
        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or(ClassifyError::EmptyChoices)?;
        choice.message.content.ok_or(ClassifyError::MissingContent)
    }
}

#[async_trait]
impl Classifier for OpenAIModel {
    async fn classify(&self, text: &str) -> Result<String, ClassifyError> {
        let options = GenerateMessageOptionsBuilder::new()
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .build();
        let reply = self
            .generate_message(self.template.render(text), options)
            .await?;
        Ok(normalize_label(&reply))
    }
}

/// First line of a model reply, trimmed and lower-cased.
pub fn normalize_label(reply: &str) -> String {
    reply
        .trim()
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}
