use std::collections::VecDeque;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::core::{
    cmd::Cmd,
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update_at,
};

/// Owns the application state and drives translate → update → execute
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime; commands queue up until an executor is set
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime whose timers feed back into its own raw queue
    pub fn new_with_executor(initial_state: AppState) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.set_executor();
        runtime
    }

    pub fn set_executor(&mut self) {
        self.cmd_executor = Some(CmdExecutor::new(self.raw_msg_tx.clone()));
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Wait for the next raw message from timers or other external senders
    pub async fn recv_raw(&mut self) -> Option<RawMsg> {
        self.raw_msg_rx.recv().await
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<usize> {
        let commands = self.pending_commands();
        let Some(executor) = self.cmd_executor.as_mut() else {
            return Err(eyre!(
                "No command executor available; dropped {} command(s)",
                commands.len()
            ));
        };

        for result in executor.execute_commands(&commands) {
            result?;
        }
        Ok(commands.len())
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Processing {msg:?}");
        }
        // tokio's clock, so paused-time tests see the same time as the timers
        let now = tokio::time::Instant::now().into_std();
        let (new_state, commands) = update_at(msg, self.state.clone(), now);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Translate against the state left by the previous raw message
        while let Some(raw_msg) = self.next_queued_raw() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<usize> {
        self.process_all_messages();
        if self.cmd_executor.is_none() {
            // Test runtimes inspect the queue instead
            return Ok(0);
        }
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len() + self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            current_testimonial: self.state.carousel.current_index(),
            is_auto_advancing: self.state.carousel.is_auto_advancing(),
            has_executor: self.cmd_executor.is_some(),
        }
    }

    fn next_queued_raw(&mut self) -> Option<RawMsg> {
        self.raw_msg_queue
            .pop_front()
            .or_else(|| self.raw_msg_rx.try_recv().ok())
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub current_testimonial: usize,
    pub is_auto_advancing: bool,
    pub has_executor: bool,
}
