use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::{raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource, real::RealTui},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the page: terminal events and timer expiries in, frames out
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
    renderer: Renderer,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Create a runner on the real terminal
    pub fn new_with_config(config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = Arc::new(Mutex::new(
            RealTui::new()?.tick_rate(tick_rate).frame_rate(frame_rate),
        ));
        let events = EventSource::real(tui.clone());
        Ok(Self::assemble(config, tui, events))
    }

    /// Create a runner that reads `events` and draws into `tui`
    pub fn new_with_tui(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        events: impl IntoIterator<Item = tui::Event>,
    ) -> Self {
        Self::assemble(config, tui, EventSource::test(events))
    }

    fn assemble(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        events: EventSource,
    ) -> Self {
        let initial_state = AppState::new_with_config(config);
        Self {
            runtime: Runtime::new_with_executor(initial_state),
            tui,
            events,
            renderer: Renderer::new(),
        }
    }

    /// Run until quit or until the event stream closes
    pub async fn run(&mut self) -> Result<()> {
        let size = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));
        self.runtime.run_update_cycle()?;

        loop {
            let mut should_render = false;
            tokio::select! {
                event = self.events.next() => match event {
                    Some(event) => should_render = self.handle_event(event).await?,
                    None => {
                        log::info!("Event stream closed");
                        break;
                    }
                },
                Some(raw) = self.runtime.recv_raw() => {
                    self.runtime.send_raw_msg(raw);
                }
            }

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
                should_render = true;
            }

            if should_render {
                self.render().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Returns whether the event asks for a redraw
    async fn handle_event(&mut self, event: tui::Event) -> Result<bool> {
        let raw = match event {
            tui::Event::Init => {
                self.runtime.send_raw_msg(RawMsg::Init);
                return Ok(true);
            }
            tui::Event::Render => return Ok(true),
            tui::Event::Resize(w, h) => {
                self.tui
                    .lock()
                    .await
                    .resize(ratatui::prelude::Rect::new(0, 0, w, h))?;
                self.runtime.send_raw_msg(RawMsg::Resize(w, h));
                return Ok(true);
            }
            tui::Event::Quit | tui::Event::Closed => RawMsg::Quit,
            tui::Event::Tick => RawMsg::Tick,
            tui::Event::Key(key) => RawMsg::Key(key),
            tui::Event::Mouse(mouse) => RawMsg::Mouse(mouse),
            tui::Event::Error => RawMsg::Error("Terminal event stream error".to_string()),
            tui::Event::FocusGained | tui::Event::FocusLost | tui::Event::Paste(_) => {
                return Ok(false)
            }
        };
        self.runtime.send_raw_msg(raw);
        Ok(false)
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.enter()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime.run_update_cycle()?;
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state().clone();
        self.renderer.render(&self.tui, &state).await
    }
}
