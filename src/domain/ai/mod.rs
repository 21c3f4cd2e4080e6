pub mod client;
pub mod dto;
pub mod flow;
pub mod handler;
pub mod prompt;
pub mod service;

pub use client::{AiClient, ModelClient, OpenAiClient, OutputSchema, PromptRequest};
pub use dto::{
    FeedbackSummaryRequest, FeedbackSummaryResult, ProductDescriptionRequest,
    ProductDescriptionResult,
};
pub use flow::{FeedbackSummaryFlow, ProductDescriptionFlow, PromptFlow};
pub use service::AiService;
