#![forbid(unsafe_code)]

//! WebSTAR Runtime
//!
//! This crate ties the layout engine to host events: an Elm-style
//! [`LayoutSession`] owns tiles, settings and the drag gesture, and returns
//! [`Cmd`]s that the host performs against its REST API and toast sink.
//!
//! # Key Components
//!
//! - [`Model`] / [`Cmd`] - program contract and side-effect descriptions
//! - [`DragReorder`] - drag gesture state machine with swap semantics
//! - [`LayoutSession`] - the portfolio grid's state and transitions
//! - [`AutosaveDebouncer`] - last-writer-wins save scheduling
//! - [`dispatch`] - run a [`HostRequest`] against a [`PortfolioApi`]
//! - [`SessionSimulator`] - host-free driver for tests

pub mod autosave;
pub mod drag;
pub mod host;
pub mod program;
pub mod session;
pub mod simulator;
pub mod telemetry;

pub use autosave::{AutosaveDebouncer, DEFAULT_AUTOSAVE_DELAY_MS};
pub use drag::{DragReorder, DragState, HasTileId, SwapInstruction};
pub use host::{
    HostError, HostRequest, ItemOrder, Notification, NotificationLevel, NotificationSink,
    PortfolioApi, dispatch,
};
pub use program::{Cmd, Model};
pub use session::{LayoutSession, SessionMsg, SessionView};
pub use simulator::{CmdRecord, SessionSimulator};
pub use telemetry::{PlacementSnapshot, ReorderSnapshot};
