#![forbid(unsafe_code)]

//! Deterministic session simulator for testing.
//!
//! `SessionSimulator` runs a [`Model`] without a host, enabling
//! deterministic view snapshots, message injection, and inspection of every
//! side effect the model asked for.
//!
//! # Example
//!
//! ```ignore
//! use webstar_runtime::simulator::SessionSimulator;
//!
//! let mut sim = SessionSimulator::new(LayoutSession::new(tiles));
//! sim.init();
//! sim.send(SessionMsg::SetCustomizing(true));
//! let view = sim.capture_view();
//! assert_eq!(view.placed.len(), 4);
//! ```

use crate::host::{HostRequest, Notification};
use crate::program::{Cmd, Model};

/// Record of a command that was executed during simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum CmdRecord {
    /// No-op command.
    None,
    /// Message fed back into the model (not stored, just noted).
    Msg,
    /// Batch of commands.
    Batch(usize),
    /// Log message emitted.
    Log(String),
    /// Persistence request handed to the host.
    Persist(&'static str),
    /// Notification shown to the user.
    Notify(Notification),
}

/// Deterministic simulator for [`Model`] testing.
pub struct SessionSimulator<M: Model> {
    model: M,
    views: Vec<M::View>,
    command_log: Vec<CmdRecord>,
    persisted: Vec<HostRequest>,
    notifications: Vec<Notification>,
    logs: Vec<String>,
}

impl<M: Model> SessionSimulator<M> {
    /// Create a new simulator with the given model.
    ///
    /// The model is not initialized until [`init`](Self::init) is called.
    pub fn new(model: M) -> Self {
        Self {
            model,
            views: Vec::new(),
            command_log: Vec::new(),
            persisted: Vec::new(),
            notifications: Vec::new(),
            logs: Vec::new(),
        }
    }

    /// Call `Model::init()` and execute the returned commands.
    pub fn init(&mut self) {
        let cmd = self.model.init();
        self.execute_cmd(cmd);
    }

    /// Send one message and execute the returned commands.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute_cmd(cmd);
    }

    /// Send messages in order.
    pub fn send_all(&mut self, msgs: impl IntoIterator<Item = M::Message>) {
        for msg in msgs {
            self.send(msg);
        }
    }

    /// Derive the current view and keep it.
    pub fn capture_view(&mut self) -> &M::View {
        let view = self.model.view();
        self.views.push(view);
        let last = self.views.len() - 1;
        &self.views[last]
    }

    /// All captured views.
    pub fn views(&self) -> &[M::View] {
        &self.views
    }

    /// Most recently captured view.
    pub fn last_view(&self) -> Option<&M::View> {
        self.views.last()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Host requests in the order they were emitted.
    pub fn persisted(&self) -> &[HostRequest] {
        &self.persisted
    }

    /// Notifications in the order they were emitted.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Log lines emitted via `Cmd::Log`.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Every executed command.
    pub fn command_log(&self) -> &[CmdRecord] {
        &self.command_log
    }

    /// Forget recorded effects, keeping the model and captured views.
    pub fn clear_effects(&mut self) {
        self.command_log.clear();
        self.persisted.clear();
        self.notifications.clear();
        self.logs.clear();
    }

    /// Execute a command without IO.
    ///
    /// `Cmd::Msg` recurses through update; persistence and notifications are
    /// recorded instead of performed.
    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {
                self.command_log.push(CmdRecord::None);
            }
            Cmd::Msg(m) => {
                self.command_log.push(CmdRecord::Msg);
                let cmd = self.model.update(m);
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                self.command_log.push(CmdRecord::Batch(cmds.len()));
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Log(text) => {
                self.command_log.push(CmdRecord::Log(text.clone()));
                self.logs.push(text);
            }
            Cmd::Persist(request) => {
                self.command_log.push(CmdRecord::Persist(request.kind()));
                self.persisted.push(request);
            }
            Cmd::Notify(notification) => {
                self.command_log.push(CmdRecord::Notify(notification.clone()));
                self.notifications.push(notification);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------- Test model ----------

    struct Counter {
        value: i32,
        initialized: bool,
    }

    #[derive(Debug)]
    enum CounterMsg {
        Increment,
        IncrementTwice,
        Save,
    }

    impl Model for Counter {
        type Message = CounterMsg;
        type View = i32;

        fn init(&mut self) -> Cmd<CounterMsg> {
            self.initialized = true;
            Cmd::log("ready")
        }

        fn update(&mut self, msg: CounterMsg) -> Cmd<CounterMsg> {
            match msg {
                CounterMsg::Increment => {
                    self.value += 1;
                    Cmd::none()
                }
                CounterMsg::IncrementTwice => {
                    Cmd::batch(vec![Cmd::msg(CounterMsg::Increment), Cmd::msg(CounterMsg::Increment)])
                }
                CounterMsg::Save => Cmd::batch(vec![
                    Cmd::persist(HostRequest::ReorderItems(Vec::new())),
                    Cmd::notify(Notification::success("saved")),
                ]),
            }
        }

        fn view(&self) -> i32 {
            self.value
        }
    }

    fn counter() -> Counter {
        Counter {
            value: 0,
            initialized: false,
        }
    }

    // ---------- Tests ----------

    #[test]
    fn init_runs_and_logs() {
        let mut sim = SessionSimulator::new(counter());
        sim.init();
        assert!(sim.model().initialized);
        assert_eq!(sim.logs(), ["ready".to_string()]);
    }

    #[test]
    fn msg_commands_recurse() {
        let mut sim = SessionSimulator::new(counter());
        sim.send(CounterMsg::IncrementTwice);
        assert_eq!(*sim.capture_view(), 2);
        assert_eq!(
            sim.command_log(),
            [
                CmdRecord::Batch(2),
                CmdRecord::Msg,
                CmdRecord::None,
                CmdRecord::Msg,
                CmdRecord::None,
            ]
        );
    }

    #[test]
    fn effects_are_recorded() {
        let mut sim = SessionSimulator::new(counter());
        sim.send_all([CounterMsg::Increment, CounterMsg::Save]);
        assert_eq!(sim.persisted(), [HostRequest::ReorderItems(Vec::new())]);
        assert_eq!(sim.notifications(), [Notification::success("saved")]);
        sim.clear_effects();
        assert!(sim.persisted().is_empty());
        assert!(sim.command_log().is_empty());
    }

    #[test]
    fn views_accumulate() {
        let mut sim = SessionSimulator::new(counter());
        sim.capture_view();
        sim.send(CounterMsg::Increment);
        sim.capture_view();
        assert_eq!(sim.views(), [0, 1]);
        assert_eq!(sim.last_view(), Some(&1));
    }
}
