//! Resume feedback via an external text-generation service.
//!
//! `FeedbackService` is the seam: handlers depend on the trait, `AppState`
//! carries an `Arc<dyn FeedbackService>`, and the production implementation
//! forwards (resume text, question) to the LLM and returns its response
//! verbatim. One attempt per request; an upstream failure fails the request.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::feedback::prompts::{
    DEFAULT_FOCUS, FOCUS_SECTION, RESUME_FEEDBACK_PROMPT, RESUME_FEEDBACK_SYSTEM,
};
use crate::llm_client::LlmClient;

#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Requests feedback for `resume_text`, optionally steered by `question`.
    /// The returned text is the service's response, unmodified.
    async fn review(&self, resume_text: &str, question: Option<&str>)
        -> Result<String, AppError>;
}

/// LLM-backed feedback service.
pub struct LlmFeedback {
    llm: LlmClient,
}

impl LlmFeedback {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl FeedbackService for LlmFeedback {
    async fn review(
        &self,
        resume_text: &str,
        question: Option<&str>,
    ) -> Result<String, AppError> {
        let prompt = build_prompt(resume_text, question);
        self.llm
            .call_text(&prompt, RESUME_FEEDBACK_SYSTEM)
            .await
            .map_err(|e| AppError::Feedback(e.to_string()))
    }
}

fn build_prompt(resume_text: &str, question: Option<&str>) -> String {
    let focus_section = match question {
        Some(q) => FOCUS_SECTION.replace("{question}", q),
        None => DEFAULT_FOCUS.to_string(),
    };
    RESUME_FEEDBACK_PROMPT
        .replace("{resume_text}", resume_text)
        .replace("{focus_section}", &focus_section)
}

/// Stub service for tests: records every call and answers with a fixed string.
#[cfg(test)]
pub struct StubFeedbackService {
    pub response: String,
    pub calls: std::sync::Mutex<Vec<(String, Option<String>)>>,
}

#[cfg(test)]
impl StubFeedbackService {
    pub fn replying(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl FeedbackService for StubFeedbackService {
    async fn review(
        &self,
        resume_text: &str,
        question: Option<&str>,
    ) -> Result<String, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((resume_text.to_string(), question.map(String::from)));
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_resume_text() {
        let prompt = build_prompt("Jane Doe, data scientist since 2019", None);
        assert!(prompt.contains("Jane Doe, data scientist since 2019"));
        assert!(prompt.contains(DEFAULT_FOCUS));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{focus_section}"));
    }

    #[test]
    fn prompt_embeds_question_when_present() {
        let prompt = build_prompt("resume body", Some("Data Science"));
        assert!(prompt.contains("Data Science"));
        assert!(!prompt.contains(DEFAULT_FOCUS));
        assert!(!prompt.contains("{question}"));
    }

    #[tokio::test]
    async fn stub_observes_arguments_and_returns_fixed_reply() {
        let stub = StubFeedbackService::replying("Looks great.");
        let reply = stub
            .review("resume text T", Some("question Q"))
            .await
            .unwrap();

        assert_eq!(reply, "Looks great.");
        let calls = stub.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![(
                "resume text T".to_string(),
                Some("question Q".to_string())
            )]
        );
    }
}
