#![forbid(unsafe_code)]

//! Elm-style program contract.
//!
//! A [`Model`] owns state, reacts to messages in [`Model::update`], and
//! returns a [`Cmd`] describing side effects for the host to perform. The
//! model never performs IO itself; persistence and notifications travel out
//! as commands.

use crate::host::{HostRequest, Notification};

/// A side effect requested by a model.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd<M> {
    /// Nothing to do.
    None,
    /// Feed a message back into `update`.
    Msg(M),
    /// Run several commands in order.
    Batch(Vec<Cmd<M>>),
    /// Emit a diagnostic line.
    Log(String),
    /// Ask the host to persist something.
    Persist(HostRequest),
    /// Fire-and-forget user-facing message.
    Notify(Notification),
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn msg(msg: M) -> Self {
        Self::Msg(msg)
    }

    /// Batch commands, collapsing empty and single-element batches.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }

    #[inline]
    pub fn log(text: impl Into<String>) -> Self {
        Self::Log(text.into())
    }

    #[inline]
    pub fn persist(request: HostRequest) -> Self {
        Self::Persist(request)
    }

    #[inline]
    pub fn notify(notification: Notification) -> Self {
        Self::Notify(notification)
    }

    /// Whether this is [`Cmd::None`].
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Application state driven by host events.
pub trait Model {
    /// Events the model reacts to.
    type Message;
    /// Derived, render-ready output.
    type View;

    /// Called once before any message.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Apply one message.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Derive the current view. Called after every transition.
    fn view(&self) -> Self::View;
}
