//! Simulated companion chat.
//!
//! There is no language model behind this: each user message schedules one
//! canned reply, picked by a `Responder`, that arrives after the configured
//! delay. Only one reply is in flight at a time; sending again before it has
//! been collected fails with `PartnerError::ReplyPending`.
//!
//! `send` spawns onto the ambient tokio runtime and must be called from
//! within one.

use std::fmt;

use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use tokio::task::JoinHandle;

use crate::config::ChatConfig;
use crate::error::{PartnerError, PartnerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "you"),
            Role::Assistant => write!(f, "partner"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    fn new(role: Role, content: String) -> Self {
        Message {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            timestamp: Local::now(),
        }
    }
}

/// Chooses the reply to a user message from the configured pool.
pub trait Responder {
    fn respond(&mut self, prompt: &str, pool: &[String]) -> String;
}

/// Uniformly random pick from the pool.
#[derive(Debug, Default)]
pub struct RandomResponder;

impl Responder for RandomResponder {
    fn respond(&mut self, _prompt: &str, pool: &[String]) -> String {
        pool.choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}

/// Walks the pool in order, wrapping around.
#[derive(Debug, Default)]
pub struct CyclingResponder {
    next: usize,
}

impl Responder for CyclingResponder {
    fn respond(&mut self, _prompt: &str, pool: &[String]) -> String {
        if pool.is_empty() {
            return String::new();
        }
        let reply = pool[self.next % pool.len()].clone();
        self.next += 1;
        reply
    }
}

/// Identifies a scheduled reply so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyHandle {
    pub id: u64,
}

struct PendingReply {
    handle: ReplyHandle,
    task: JoinHandle<String>,
}

pub struct ChatSession<R: Responder = RandomResponder> {
    config: ChatConfig,
    responder: R,
    messages: Vec<Message>,
    pending: Option<PendingReply>,
    next_reply_id: u64,
}

impl ChatSession<RandomResponder> {
    pub fn new(config: ChatConfig) -> Self {
        Self::with_responder(config, RandomResponder)
    }
}

impl<R: Responder> ChatSession<R> {
    /// Start a conversation that opens with the configured greeting.
    pub fn with_responder(config: ChatConfig, responder: R) -> Self {
        let greeting = Message::new(Role::Assistant, config.greeting.clone());
        ChatSession {
            config,
            responder,
            messages: vec![greeting],
            pending: None,
            next_reply_id: 1,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Post a user message and schedule the assistant's reply.
    ///
    /// Blank input is ignored and returns `Ok(None)`.
    pub fn send(&mut self, text: &str) -> PartnerResult<Option<ReplyHandle>> {
        let content = text.trim();
        if content.is_empty() {
            return Ok(None);
        }
        if self.pending.is_some() {
            return Err(PartnerError::ReplyPending);
        }

        self.messages.push(Message::new(Role::User, content.to_string()));

        let reply = self.responder.respond(content, &self.config.responses);
        let delay = self.config.reply_delay();
        let handle = ReplyHandle { id: self.next_reply_id };
        self.next_reply_id += 1;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            reply
        });

        tracing::debug!(reply_id = handle.id, delay_ms = self.config.reply_delay_ms, "scheduled reply");
        self.pending = Some(PendingReply { handle, task });

        Ok(Some(handle))
    }

    /// Wait for the pending reply and append it to the conversation.
    ///
    /// Returns `Ok(None)` when nothing is pending. Dropping the future before
    /// it resolves leaves the reply pending, so it can be raced against other
    /// events and then cancelled.
    pub async fn next_reply(&mut self) -> PartnerResult<Option<&Message>> {
        let Some(pending) = self.pending.as_mut() else {
            return Ok(None);
        };
        let reply_id = pending.handle.id;
        let result = (&mut pending.task).await;
        self.pending = None;

        match result {
            Ok(content) => {
                tracing::debug!(reply_id, "reply delivered");
                self.messages.push(Message::new(Role::Assistant, content));
                Ok(self.messages.last())
            }
            Err(e) => {
                tracing::warn!(reply_id, error = %e, "reply task did not complete");
                Err(PartnerError::ReplyCancelled(reply_id))
            }
        }
    }

    /// Abort a scheduled reply. Returns false if `handle` is not the pending one.
    pub fn cancel(&mut self, handle: ReplyHandle) -> bool {
        if !self.pending.as_ref().is_some_and(|p| p.handle == handle) {
            return false;
        }
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
        }
        tracing::debug!(reply_id = handle.id, "reply cancelled");
        true
    }
}

impl<R: Responder> Drop for ChatSession<R> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    fn config() -> ChatConfig {
        ChatConfig {
            reply_delay_ms: 1500,
            greeting: "hello".to_string(),
            responses: vec!["one".to_string(), "two".to_string()],
        }
    }

    #[test]
    fn session_opens_with_greeting() {
        let session = ChatSession::new(config());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].content, "hello");
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = ChatSession::new(config());
        assert!(session.send("   \n").unwrap().is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_delay() {
        let mut session = ChatSession::with_responder(config(), CyclingResponder::default());
        let started = Instant::now();

        let handle = session.send("  I had a long day  ").unwrap();
        assert!(handle.is_some());
        assert!(session.is_pending());
        assert_eq!(session.messages()[1].content, "I had a long day");

        let reply = session.next_reply().await.unwrap().unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "one");
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(!session.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn second_send_while_pending_is_rejected() {
        let mut session = ChatSession::with_responder(config(), CyclingResponder::default());

        session.send("first").unwrap();
        assert!(matches!(session.send("second"), Err(PartnerError::ReplyPending)));

        session.next_reply().await.unwrap();
        session.send("second").unwrap();
        session.next_reply().await.unwrap();

        let contents: Vec<_> = session.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["hello", "first", "one", "second", "two"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_reply_never_arrives() {
        let mut session = ChatSession::with_responder(config(), CyclingResponder::default());

        let handle = session.send("hi").unwrap().unwrap();
        assert!(session.cancel(handle));
        assert!(!session.cancel(handle));
        assert!(!session.is_pending());

        assert!(session.next_reply().await.unwrap().is_none());
        assert_eq!(session.messages().len(), 2);

        let next = session.send("still there?").unwrap().unwrap();
        assert_ne!(next, handle);
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_wait_keeps_reply_pending() {
        let mut session = ChatSession::with_responder(config(), CyclingResponder::default());
        let handle = session.send("hi").unwrap().unwrap();

        let timed_out = tokio::time::timeout(Duration::from_millis(100), session.next_reply())
            .await
            .is_err();
        assert!(timed_out);
        assert!(session.is_pending());

        assert!(session.cancel(handle));
        assert_eq!(session.messages().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn random_replies_come_from_pool() {
        let mut session = ChatSession::new(config());
        for _ in 0..5 {
            session.send("hey").unwrap();
            let reply = session.next_reply().await.unwrap().unwrap();
            assert!(reply.content == "one" || reply.content == "two");
        }
    }

    #[test]
    fn cycling_responder_wraps() {
        let pool = vec!["a".to_string(), "b".to_string()];
        let mut responder = CyclingResponder::default();
        let picks: Vec<_> = (0..3).map(|_| responder.respond("x", &pool)).collect();
        assert_eq!(picks, vec!["a", "b", "a"]);
    }
}
