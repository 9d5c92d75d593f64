use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
            }
            SystemMsg::Suspend => {
                self.should_suspend = true;
            }
            SystemMsg::Resume => {
                self.should_suspend = false;
            }
            // Viewport bookkeeping lives in the coordinator
            SystemMsg::Resize(_, _) => {}
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
            }
            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
            }
            SystemMsg::ShowError(error) => {
                log::error!("{error}");
                self.status_message = Some(format!("Error: {error}"));
            }
        }
        vec![]
    }
}
