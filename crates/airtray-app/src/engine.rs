//! Engine - the single logical thread of control
//!
//! Owns the store, the message channel, and the poll timer. Everything
//! that mutates state funnels through [`Engine::process`], so readers
//! never observe a partially applied patch; the network work itself runs
//! in spawned tasks and re-enters the loop as messages.

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use airtray_api::AirconApi;
use airtray_core::prelude::*;

use crate::actions::handle_action;
use crate::config::Config;
use crate::handler::{self, UpdateAction};
use crate::indicator::Indicator;
use crate::message::Message;
use crate::state::Store;

/// Message channel capacity
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine: periodic synchronizer plus command dispatcher.
pub struct Engine<A, I> {
    store: Store,
    api: A,
    indicator: I,
    config: Config,

    /// Sender half of the unified message channel. Clone via
    /// [`Engine::sender`] for input sources (UI, signal handler).
    msg_tx: mpsc::Sender<Message>,
    /// Receiver half; the run loop drains messages from here.
    msg_rx: mpsc::Receiver<Message>,

    quitting: bool,
}

impl<A, I> Engine<A, I>
where
    A: AirconApi + Clone + Send + Sync + 'static,
    I: Indicator,
{
    pub fn new(config: Config, api: A, indicator: I) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        Self {
            store: Store::new(),
            api,
            indicator,
            config,
            msg_tx,
            msg_rx,
            quitting: false,
        }
    }

    /// A sender into the engine's message channel.
    pub fn sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Run until a quit message arrives.
    ///
    /// The poll interval's first tick fires immediately, which is the
    /// startup poll. A tick that fires while a previous poll is still in
    /// flight simply starts another one; completions apply in completion
    /// order and the next cycle heals any divergence.
    pub async fn run(mut self) -> Result<()> {
        let mut poll = tokio::time::interval(self.config.poll_interval);
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "engine started, polling appliance {} every {:?}",
            self.config.appliance_id, self.config.poll_interval
        );

        while !self.quitting {
            tokio::select! {
                _ = poll.tick() => self.process(Message::Poll),
                maybe_msg = self.msg_rx.recv() => match maybe_msg {
                    Some(msg) => self.process(msg),
                    // All senders gone; nothing can ever reach us again.
                    None => break,
                },
            }
        }

        info!("engine stopped");
        Ok(())
    }

    /// Process one message through the update loop, execute its actions,
    /// and re-render when the snapshot changed.
    fn process(&mut self, message: Message) {
        let version_before = self.store.version();
        let mut explicit_render = false;

        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.store, m);

            if let Some(action) = result.action {
                match action {
                    UpdateAction::Render => explicit_render = true,
                    UpdateAction::Quit => self.quitting = true,
                    other => {
                        handle_action(other, &self.api, &self.config.appliance_id, &self.msg_tx)
                    }
                }
            }

            msg = result.message;
        }

        if explicit_render || self.store.version() != version_before {
            debug!("rendering snapshot v{}", self.store.version());
            self.indicator.render(&self.store.read());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use airtray_api::test_utils::FakeApi;
    use airtray_core::AcState;

    /// Indicator that records every snapshot it is asked to render
    #[derive(Clone, Default)]
    struct RecordingIndicator {
        rendered: Arc<Mutex<Vec<AcState>>>,
    }

    impl Indicator for RecordingIndicator {
        fn render(&mut self, state: &AcState) {
            self.rendered.lock().unwrap().push(state.clone());
        }
    }

    fn test_engine(api: FakeApi) -> (Engine<FakeApi, RecordingIndicator>, RecordingIndicator) {
        let indicator = RecordingIndicator::default();
        let engine = Engine::new(Config::for_testing(), api, indicator.clone());
        (engine, indicator)
    }

    #[tokio::test]
    async fn test_optimistic_command_renders_immediately() {
        let (mut engine, indicator) = test_engine(FakeApi::new());

        engine.process(Message::SetVolume("3".to_string()));

        let rendered = indicator.rendered.lock().unwrap();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].volume.as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_no_op_message_does_not_render() {
        let (mut engine, indicator) = test_engine(FakeApi::new());

        engine.process(Message::ApplianceMissing);

        assert!(indicator.rendered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_confirmation_renders_without_state_change() {
        let (mut engine, indicator) = test_engine(FakeApi::new());

        engine.process(Message::CommandSent(airtray_api::AirconSetting::Power(
            true,
        )));

        assert_eq!(indicator.rendered.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_quit_stops_the_loop() {
        let (mut engine, _indicator) = test_engine(FakeApi::new());
        assert!(!engine.quitting);

        engine.process(Message::Quit);

        assert!(engine.quitting);
    }
}
