//! Topic wrappers around the completion pipeline.
//!
//! Every entry point runs the same three steps: inject the domain context,
//! ask the completion gateway, and answer from the fallback table when the
//! gateway fails. The wrappers differ only in the system prompt they build.

use sp_contextpack::{inject_context, DomainContext, Topic};
use sp_domain::error::FailureKind;
use sp_domain::message::Message;
use sp_providers::{CompletionGateway, CompletionResult};

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    /// Generated by the completion provider.
    Provider,
    /// Served from the fallback responder after a failed completion.
    Fallback(FailureKind),
}

impl AnswerSource {
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerSource::Provider => "provider",
            AnswerSource::Fallback(_) => "fallback",
        }
    }

    pub fn failure(self) -> Option<FailureKind> {
        match self {
            AnswerSource::Provider => None,
            AnswerSource::Fallback(kind) => Some(kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub source: AnswerSource,
}

pub struct Assistant {
    context: DomainContext,
    gateway: CompletionGateway,
}

impl Assistant {
    pub fn new(context: DomainContext, gateway: CompletionGateway) -> Self {
        Self { context, gateway }
    }

    pub fn context(&self) -> &DomainContext {
        &self.context
    }

    pub fn gateway(&self) -> &CompletionGateway {
        &self.gateway
    }

    /// Answer a single query scoped to `topic`.
    pub async fn ask(&self, topic: Topic, query: &str) -> Answer {
        tracing::debug!(topic = %topic, query_chars = query.len(), "topic query");
        self.run(topic.conversation(&self.context, query)).await
    }

    pub async fn store_info(&self, query: &str) -> String {
        self.ask(Topic::Store, query).await.text
    }

    pub async fn vendor_info(&self, query: &str) -> String {
        self.ask(Topic::Vendor, query).await.text
    }

    pub async fn task_info(&self, query: &str) -> String {
        self.ask(Topic::Task, query).await.text
    }

    pub async fn assistant(&self, query: &str) -> String {
        self.ask(Topic::General, query).await.text
    }

    /// Answer a caller-built conversation.
    pub async fn chat(&self, messages: Vec<Message>) -> Answer {
        tracing::debug!(messages = messages.len(), "chat request");
        self.run(messages).await
    }

    async fn run(&self, messages: Vec<Message>) -> Answer {
        let conversation = inject_context(messages, &self.context);

        match self.gateway.complete(&conversation).await {
            CompletionResult::Success(text) => Answer {
                text,
                source: AnswerSource::Provider,
            },
            CompletionResult::Failure(kind) => Answer {
                text: sp_fallback::fallback(&conversation, kind).to_string(),
                source: AnswerSource::Fallback(kind),
            },
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use sp_domain::error::{Error, Result};
    use sp_domain::message::Role;
    use sp_providers::{ChatRequest, ChatResponse, LlmProvider};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records every request; answers with `reply` or fails with `fail`.
    struct Recorder {
        reply: Option<&'static str>,
        fail: Option<&'static str>,
        seen: Mutex<Vec<Vec<Message>>>,
    }

    #[async_trait::async_trait]
    impl LlmProvider for Recorder {
        async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse> {
            self.seen.lock().unwrap().push(req.messages.clone());
            if let Some(msg) = self.fail {
                return Err(Error::Http(msg.into()));
            }
            Ok(ChatResponse {
                content: self.reply.unwrap_or_default().into(),
                usage: None,
                model: "recorder".into(),
                finish_reason: None,
            })
        }

        fn provider_id(&self) -> &str {
            "recorder"
        }
    }

    fn assistant(reply: Option<&'static str>, fail: Option<&'static str>) -> (Assistant, Arc<Recorder>) {
        let recorder = Arc::new(Recorder {
            reply,
            fail,
            seen: Mutex::new(Vec::new()),
        });
        let gateway = CompletionGateway::new(recorder.clone(), "m", Duration::from_secs(1));
        (Assistant::new(DomainContext::new("CTX"), gateway), recorder)
    }

    #[tokio::test]
    async fn topic_query_sends_scoped_system_prompt() {
        let (a, rec) = assistant(Some("ok"), None);
        assert_eq!(a.vendor_info("who does lighting?").await, "ok");

        let seen = rec.seen.lock().unwrap();
        let conv = &seen[0];
        assert_eq!(conv.len(), 2);
        assert_eq!(conv[0].role, Role::System);
        assert_eq!(conv[0].content, Topic::Vendor.system_prompt(&DomainContext::new("CTX")));
        assert_eq!(conv[1], Message::user("who does lighting?"));
    }

    #[tokio::test]
    async fn general_assistant_uses_plain_context() {
        let (a, rec) = assistant(Some("ok"), None);
        a.assistant("hello").await;
        assert_eq!(rec.seen.lock().unwrap()[0][0], Message::system("CTX"));
    }

    #[tokio::test]
    async fn chat_injects_context_when_missing() {
        let (a, rec) = assistant(Some("ok"), None);
        let answer = a.chat(vec![Message::user("hi")]).await;
        assert_eq!(answer.source, AnswerSource::Provider);
        assert_eq!(
            rec.seen.lock().unwrap()[0],
            vec![Message::system("CTX"), Message::user("hi")]
        );
    }

    #[tokio::test]
    async fn chat_keeps_caller_system_message() {
        let (a, rec) = assistant(Some("ok"), None);
        a.chat(vec![Message::system("custom"), Message::user("hi")]).await;
        assert_eq!(rec.seen.lock().unwrap()[0][0], Message::system("custom"));
    }

    #[tokio::test]
    async fn transient_failure_answers_from_fallback_table() {
        let (a, _) = assistant(None, Some("connection reset"));
        let answer = a.ask(Topic::Task, "what is high priority?").await;
        assert_eq!(answer.source, AnswerSource::Fallback(FailureKind::Transient));
        assert!(answer.text.contains("12 pending tasks"));
    }

    #[tokio::test]
    async fn api_key_failure_answers_with_configuration_message() {
        let (a, _) = assistant(None, Some("Incorrect API key provided"));
        assert_eq!(
            a.store_info("tell me a joke").await,
            sp_fallback::AUTH_FAILURE_MESSAGE
        );
    }

    #[test]
    fn source_labels() {
        assert_eq!(AnswerSource::Provider.as_str(), "provider");
        assert_eq!(AnswerSource::Provider.failure(), None);
        let fb = AnswerSource::Fallback(FailureKind::Auth);
        assert_eq!(fb.as_str(), "fallback");
        assert_eq!(fb.failure(), Some(FailureKind::Auth));
    }
}
