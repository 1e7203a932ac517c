pub mod outcome;
pub mod sequencer;

use log::{ debug, error, info, warn };
use std::sync::atomic::{ AtomicU64, Ordering };
use std::sync::{ Arc, Mutex };
use tokio::task::JoinHandle;
use crate::config::{ ClientConfig, DeliveryMode };
use crate::error::ConfigError;
use crate::models::chat::ConversationTurn;
use crate::transport::{ new_transport, ChatTransport };
use crate::view::ConversationView;
use self::outcome::{ interpret, ChatOutcome };
use self::sequencer::Sequencer;

/// Chat component: owns the view and the transport and turns each submitted
/// line into a rendered conversation turn.
///
/// Cloning is cheap and every clone drives the same view.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<Inner>,
}

struct Inner {
    view: Arc<dyn ConversationView>,
    transport: Arc<dyn ChatTransport>,
    delivery: DeliveryMode,
    next_seq: AtomicU64,
    in_flight: Mutex<usize>,
    sequencer: Mutex<Sequencer>,
}

/// Handle to one in-flight submission. Dropping it does not cancel the request.
#[derive(Debug)]
pub struct Submission {
    seq: u64,
    handle: JoinHandle<()>,
}

impl Submission {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits until the bot turn for this submission has been handed to the view.
    pub async fn wait(self) {
        if let Err(e) = self.handle.await {
            error!("Chat submission #{} task failed: {}", self.seq, e);
        }
    }
}

impl ChatClient {
    pub fn new(
        config: &ClientConfig,
        view: Arc<dyn ConversationView>,
        transport: Arc<dyn ChatTransport>
    ) -> Self {
        if let Some(greeting) = &config.greeting {
            view.append(ConversationTurn::bot(greeting.clone()));
        }
        Self {
            inner: Arc::new(Inner {
                view,
                transport,
                delivery: config.delivery,
                next_seq: AtomicU64::new(0),
                in_flight: Mutex::new(0),
                sequencer: Mutex::new(Sequencer::new()),
            }),
        }
    }

    /// Builds a client posting over HTTP to `config.endpoint`.
    pub fn from_config(
        config: &ClientConfig,
        view: Arc<dyn ConversationView>
    ) -> Result<Self, ConfigError> {
        let transport = new_transport(config)?;
        Ok(Self::new(config, view, transport))
    }

    /// Submits one message.
    ///
    /// Blank input is ignored: nothing is rendered, the input field is left
    /// as is and `None` is returned. Otherwise the user turn is rendered and
    /// the input cleared before this returns, and the request runs on its own
    /// task. The bot turn is rendered when that task completes, whatever the
    /// outcome.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&self, raw: &str) -> Option<Submission> {
        let message = raw.trim();
        if message.is_empty() {
            return None;
        }

        let seq = self.inner.next_seq.fetch_add(1, Ordering::SeqCst);
        self.inner.view.append(ConversationTurn::user(message));
        self.inner.view.clear_input();
        self.inner.begin_request();
        debug!("Submission #{}: {} chars", seq, message.len());

        let inner = Arc::clone(&self.inner);
        let message = message.to_string();
        let handle = tokio::spawn(async move {
            let outcome = inner.request(seq, &message).await;
            inner.deliver(seq, outcome);
            inner.end_request();
        });

        Some(Submission { seq, handle })
    }

    /// Sends one message and returns its outcome without touching the view.
    ///
    /// The message is trimmed like in [`ChatClient::submit`]; blank input is
    /// not sent and yields `None`.
    pub async fn send_message(&self, raw: &str) -> Option<ChatOutcome> {
        let message = raw.trim();
        if message.is_empty() {
            return None;
        }
        let seq = self.inner.next_seq.load(Ordering::SeqCst);
        Some(self.inner.request(seq, message).await)
    }

    /// Clears the rendered conversation. Replies still in flight render
    /// afterwards.
    pub fn clear(&self) {
        self.inner.view.clear();
        info!("Conversation cleared");
    }

    pub fn in_flight(&self) -> usize {
        *self.inner.in_flight.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn endpoint(&self) -> String {
        self.inner.transport.endpoint()
    }
}

impl Inner {
    async fn request(&self, seq: u64, message: &str) -> ChatOutcome {
        let result = self.transport.post_chat(message).await.and_then(interpret);
        match result {
            Ok(outcome) => {
                if outcome.is_success() {
                    debug!("Submission #{}: reply received", seq);
                } else if let ChatOutcome::ServerError(ref err) = outcome {
                    warn!("Submission #{}: backend reported error: {}", seq, err);
                } else {
                    warn!("Submission #{}: reply carried neither response nor error", seq);
                }
                outcome
            }
            Err(e) => {
                error!(
                    "Submission #{}: problem with the request to {}: {}",
                    seq,
                    self.transport.endpoint(),
                    e
                );
                ChatOutcome::Failed
            }
        }
    }

    fn deliver(&self, seq: u64, outcome: ChatOutcome) {
        let turn = outcome.into_turn();
        match self.delivery {
            DeliveryMode::Arrival => self.view.append(turn),
            DeliveryMode::Submission => {
                // Appends happen under the lock so released turns cannot interleave.
                let mut sequencer = self.sequencer.lock().unwrap_or_else(|p| p.into_inner());
                let ready = sequencer.accept(seq, turn);
                if ready.is_empty() {
                    debug!("Submission #{} held, {} waiting", seq, sequencer.held());
                }
                for turn in ready {
                    self.view.append(turn);
                }
            }
        }
    }

    fn begin_request(&self) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
        *in_flight += 1;
        if *in_flight == 1 {
            self.view.set_busy(true);
        }
    }

    fn end_request(&self) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
        *in_flight = in_flight.saturating_sub(1);
        if *in_flight == 0 {
            self.view.set_busy(false);
        }
    }
}
