use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("unsupported model '{0}'")]
pub struct UnsupportedModel(pub String);

/// Models the completion service is known to serve. Anything else is a
/// configuration error and is rejected before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    SnowflakeArctic,
    MistralLarge,
    RekaFlash,
    JambaInstruct,
    Jamba15Large,
    Mixtral8x7b,
    Llama2_70bChat,
    Llama3_8b,
    Llama3_70b,
    Llama31_405b,
    Mistral7b,
    Gemma7b,
}

impl Model {
    pub const ALL: [Model; 12] = [
        Model::SnowflakeArctic,
        Model::MistralLarge,
        Model::RekaFlash,
        Model::JambaInstruct,
        Model::Jamba15Large,
        Model::Mixtral8x7b,
        Model::Llama2_70bChat,
        Model::Llama3_8b,
        Model::Llama3_70b,
        Model::Llama31_405b,
        Model::Mistral7b,
        Model::Gemma7b,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Model::SnowflakeArctic => "snowflake-arctic",
            Model::MistralLarge => "mistral-large",
            Model::RekaFlash => "reka-flash",
            Model::JambaInstruct => "jamba-instruct",
            Model::Jamba15Large => "jamba-1.5-large",
            Model::Mixtral8x7b => "mixtral-8x7b",
            Model::Llama2_70bChat => "llama2-70b-chat",
            Model::Llama3_8b => "llama3-8b",
            Model::Llama3_70b => "llama3-70b",
            Model::Llama31_405b => "llama3.1-405b",
            Model::Mistral7b => "mistral-7b",
            Model::Gemma7b => "gemma-7b",
        }
    }

    /// Whether the model accepts long (256k token) contexts.
    pub fn is_long_context(self) -> bool {
        matches!(self, Model::JambaInstruct | Model::Jamba15Large)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = UnsupportedModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Model::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnsupportedModel(s.to_string()))
    }
}

impl Serialize for Model {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingOptions {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl SamplingOptions {
    pub const fn new(temperature: f64, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Body of a completion call: `{model, messages: [{role, content}], options}`.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: Model,
    pub messages: Vec<Message>,
    pub options: SamplingOptions,
}

impl CompletionRequest {
    /// An optional system message followed by one user message.
    pub fn new(
        model: Model,
        system: Option<&str>,
        user: impl Into<String>,
        options: SamplingOptions,
    ) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(user));
        Self {
            model,
            messages,
            options,
        }
    }
}
