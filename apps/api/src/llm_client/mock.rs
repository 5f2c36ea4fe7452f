use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ChatCompletion, CompletionOptions, LlmError, Message};

/// Scripted completion double. Records every request it receives.
#[derive(Clone, Default)]
pub struct MockChat {
    reply: Arc<Mutex<Option<Result<String, (Option<u16>, String)>>>>,
    requests: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, text: &str) -> Self {
        *self.reply.lock().unwrap() = Some(Ok(text.to_string()));
        self
    }

    pub fn with_upstream_failure(self, status: u16, body: &str) -> Self {
        *self.reply.lock().unwrap() = Some(Err((Some(status), body.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatCompletion for MockChat {
    async fn complete(
        &self,
        messages: &[Message],
        _options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        match self.reply.lock().unwrap().clone() {
            Some(Ok(text)) => Ok(text),
            Some(Err((status, body))) => Err(LlmError::Upstream { status, body }),
            None => Ok("mock completion".to_string()),
        }
    }
}
