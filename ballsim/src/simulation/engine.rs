//! Run state of the simulation driver
//!
//! Two states: `Running` (initial) and `Stopped` (terminal, no resume).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Stopped,
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: RunState,
}

impl Engine {
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Move to `Stopped`; returns true only on the first call
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = RunState::Stopped;
        was_running
    }
}
