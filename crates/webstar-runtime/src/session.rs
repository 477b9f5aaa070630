#![forbid(unsafe_code)]

//! The portfolio layout session.
//!
//! [`LayoutSession`] is the single value holding everything the portfolio
//! grid needs between events: the stored tile list, the owner's
//! [`LayoutSettings`], the engine constants, the drag gesture, the edit-mode
//! flag and the pending autosave. Hosts feed it [`SessionMsg`] values and
//! perform the [`Cmd`]s it returns; the rendered grid is always
//! [`Model::view`], derived fresh from the current state.
//!
//! # Invariants
//!
//! 1. Drag gestures, size changes and settings edits are only honored while
//!    customizing.
//! 2. A drop exchanges exactly two tiles in storage order and the two
//!    tiles trade their stored `order` values; only those two are persisted.
//! 3. Settings are validated before they replace the current ones; invalid
//!    edits leave state untouched.
//! 4. Local state is updated optimistically. A failed save is reported by
//!    the host but never rolled back.
//!
//! # Failure Modes
//!
//! - Invalid settings edit: an error [`Notification`] and no state change.
//! - Drop or size change naming an unknown tile: logged and ignored.

use webstar_layout::{
    AspectTag, EngineConfig, EngineConfigError, GridLayout, LayoutMode, LayoutSettings,
    PlacedTile, Tile, TileId, pack_grid, place_tiles,
};

use crate::autosave::AutosaveDebouncer;
use crate::drag::{DragReorder, DragState};
use crate::host::{HostRequest, ItemOrder, Notification};
use crate::program::{Cmd, Model};
use crate::telemetry::{self, PlacementSnapshot, ReorderSnapshot};

/// Events the session reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionMsg {
    /// Enter or leave edit mode. Leaving saves any pending settings.
    SetCustomizing(bool),
    /// The host's item list changed.
    ReplaceTiles(Vec<Tile>),
    DragStart(TileId),
    DragEnter(TileId),
    DragLeave,
    Drop(TileId),
    DragEnd,
    SetColumns(u16),
    SetGap(f64),
    SetRadius(f64),
    SetMode(LayoutMode),
    SetGlobalAspect(AspectTag),
    SetTheme(String),
    /// Replace settings wholesale with values loaded from the profile.
    /// Not re-saved.
    ApplySettings(LayoutSettings),
    /// Change one tile's size choice.
    SetTileAspect(TileId, AspectTag),
    /// Current host time; releases a due autosave.
    Tick(u64),
    /// Save pending settings now.
    SaveNow,
}

/// Render-ready state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    /// Tiles in display order.
    pub placed: Vec<PlacedTile>,
    pub drag: DragState,
    pub customizing: bool,
    pub settings: LayoutSettings,
}

/// State for one profile's portfolio grid.
#[derive(Debug, Clone)]
pub struct LayoutSession {
    tiles: Vec<Tile>,
    settings: LayoutSettings,
    config: EngineConfig,
    drag: DragReorder,
    customizing: bool,
    autosave: AutosaveDebouncer<LayoutSettings>,
    now_ms: u64,
    telemetry: bool,
}

impl LayoutSession {
    /// Session over `tiles` (storage order) with default settings.
    #[must_use]
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self {
            tiles,
            settings: LayoutSettings::default(),
            config: EngineConfig::default(),
            drag: DragReorder::new(),
            customizing: false,
            autosave: AutosaveDebouncer::default(),
            now_ms: 0,
            telemetry: false,
        }
    }

    /// Start from previously saved settings.
    #[must_use]
    pub fn with_settings(mut self, settings: LayoutSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Override the engine constants.
    pub fn with_config(mut self, config: EngineConfig) -> Result<Self, EngineConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    #[must_use]
    pub fn with_autosave_delay(mut self, delay_ms: u64) -> Self {
        self.autosave = AutosaveDebouncer::new(delay_ms);
        self
    }

    /// Record placement and reorder snapshots in [`crate::telemetry`].
    #[must_use]
    pub fn with_telemetry(mut self, enabled: bool) -> Self {
        self.telemetry = enabled;
        self
    }

    /// Tiles in storage order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn is_customizing(&self) -> bool {
        self.customizing
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Whether a settings save is waiting for its quiet period.
    #[must_use]
    pub fn has_pending_save(&self) -> bool {
        self.autosave.is_pending()
    }

    /// Current tiles packed into a container `container_width` pixels wide.
    #[must_use]
    pub fn grid(&self, container_width: f64) -> GridLayout {
        let placed = place_tiles(&self.tiles, &self.settings, &self.config);
        pack_grid(&placed, &self.settings, &self.config, container_width)
    }

    fn drop_on(&mut self, target: TileId) -> Cmd<SessionMsg> {
        let Some(swap) = self.drag.drop(target) else {
            return Cmd::none();
        };
        let positions = swap.positions(&self.tiles);
        let orders = positions.map(|(from, to)| (self.stored_order(from), self.stored_order(to)));
        let swapped = swap.apply(&mut self.tiles);
        if self.telemetry {
            telemetry::set_reorder_snapshot(Some(ReorderSnapshot {
                dragged: swap.dragged,
                target: swap.target,
                swapped,
            }));
        }
        match positions.zip(orders) {
            Some(((from, to), (from_order, to_order))) if swapped => {
                // Each slot keeps its stored order; the tiles trade slots.
                self.tiles[from].order = Some(from_order);
                self.tiles[to].order = Some(to_order);
                tracing::debug!(dragged = %swap.dragged, target = %swap.target, from_order, to_order, "tiles swapped");
                Cmd::persist(HostRequest::ReorderItems(vec![
                    ItemOrder {
                        id: self.tiles[from].id,
                        order: from_order,
                    },
                    ItemOrder {
                        id: self.tiles[to].id,
                        order: to_order,
                    },
                ]))
            }
            _ => {
                tracing::debug!(dragged = %swap.dragged, target = %swap.target, "drop ignored; tile not in list");
                Cmd::log(format!("drop ignored: {} onto {}", swap.dragged, swap.target))
            }
        }
    }

    /// Persisted order of the tile at `index`, or the index itself when the
    /// host never supplied one.
    fn stored_order(&self, index: usize) -> u32 {
        self.tiles[index]
            .order
            .unwrap_or_else(|| u32::try_from(index).unwrap_or(u32::MAX))
    }

    fn set_tile_aspect(&mut self, id: TileId, aspect: AspectTag) -> Cmd<SessionMsg> {
        match self.tiles.iter_mut().find(|t| t.id == id) {
            Some(tile) if tile.aspect == Some(aspect) => Cmd::none(),
            Some(tile) => {
                tile.aspect = Some(aspect);
                tracing::debug!(tile = %id, aspect = aspect.as_str(), "tile aspect changed");
                Cmd::persist(HostRequest::UpdateItemAspect { id, aspect })
            }
            None => Cmd::log(format!("size change ignored: unknown tile {id}")),
        }
    }

    /// Validate and adopt `next`, then schedule an autosave.
    fn edit_settings(&mut self, next: LayoutSettings) -> Cmd<SessionMsg> {
        if next == self.settings {
            return Cmd::none();
        }
        if let Err(err) = next.validate() {
            tracing::warn!(error = %err, "rejected settings edit");
            return Cmd::notify(Notification::error(err.to_string()));
        }
        self.settings = next.clone();
        self.autosave.schedule(next, self.now_ms);
        Cmd::none()
    }

    fn save_pending(&mut self) -> Cmd<SessionMsg> {
        match self.autosave.flush() {
            Some(settings) => Cmd::persist(HostRequest::SaveCustomization(settings)),
            None => Cmd::none(),
        }
    }
}

impl Model for LayoutSession {
    type Message = SessionMsg;
    type View = SessionView;

    fn update(&mut self, msg: SessionMsg) -> Cmd<SessionMsg> {
        let editing = self.customizing;
        match msg {
            SessionMsg::SetCustomizing(on) => {
                if on == self.customizing {
                    return Cmd::none();
                }
                self.customizing = on;
                tracing::debug!(customizing = on, "edit mode changed");
                if on {
                    Cmd::none()
                } else {
                    self.drag.drag_end();
                    self.save_pending()
                }
            }
            SessionMsg::ReplaceTiles(tiles) => {
                if let Some(dragged) = self.drag.state().dragged()
                    && !tiles.iter().any(|t| t.id == dragged)
                {
                    self.drag.drag_end();
                }
                self.tiles = tiles;
                Cmd::none()
            }
            SessionMsg::DragStart(id) if editing => {
                self.drag.drag_start(id);
                Cmd::none()
            }
            SessionMsg::DragEnter(id) => {
                self.drag.drag_enter(id);
                Cmd::none()
            }
            SessionMsg::DragLeave => {
                self.drag.drag_leave();
                Cmd::none()
            }
            SessionMsg::Drop(target) => self.drop_on(target),
            SessionMsg::DragEnd => {
                self.drag.drag_end();
                Cmd::none()
            }
            SessionMsg::SetColumns(columns) if editing => {
                self.edit_settings(self.settings.clone().columns(columns))
            }
            SessionMsg::SetGap(gap) if editing => self.edit_settings(self.settings.clone().gap(gap)),
            SessionMsg::SetRadius(radius) if editing => {
                self.edit_settings(self.settings.clone().radius(radius))
            }
            SessionMsg::SetMode(mode) if editing => self.edit_settings(self.settings.clone().mode(mode)),
            SessionMsg::SetGlobalAspect(tag) if editing => {
                self.edit_settings(self.settings.clone().global_aspect(tag))
            }
            SessionMsg::SetTheme(theme) if editing => {
                self.edit_settings(self.settings.clone().theme(theme))
            }
            SessionMsg::ApplySettings(settings) => match settings.validate() {
                Ok(()) => {
                    self.autosave.cancel();
                    self.settings = settings;
                    Cmd::none()
                }
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring invalid stored settings");
                    Cmd::log(format!("stored settings rejected: {err}"))
                }
            },
            SessionMsg::SetTileAspect(id, aspect) if editing => self.set_tile_aspect(id, aspect),
            SessionMsg::Tick(now_ms) => {
                self.now_ms = self.now_ms.max(now_ms);
                match self.autosave.poll(self.now_ms) {
                    Some(settings) => {
                        tracing::debug!(now_ms = self.now_ms, "autosave due");
                        Cmd::persist(HostRequest::SaveCustomization(settings))
                    }
                    None => Cmd::none(),
                }
            }
            SessionMsg::SaveNow => self.save_pending(),
            // Editing messages outside edit mode.
            SessionMsg::DragStart(_)
            | SessionMsg::SetColumns(_)
            | SessionMsg::SetGap(_)
            | SessionMsg::SetRadius(_)
            | SessionMsg::SetMode(_)
            | SessionMsg::SetGlobalAspect(_)
            | SessionMsg::SetTheme(_)
            | SessionMsg::SetTileAspect(..) => {
                tracing::trace!("edit ignored outside customize mode");
                Cmd::none()
            }
        }
    }

    fn view(&self) -> SessionView {
        let placed = place_tiles(&self.tiles, &self.settings, &self.config);
        if self.telemetry {
            telemetry::set_placement_snapshot(Some(PlacementSnapshot::from_placed(
                &placed,
                self.settings.mode,
                self.settings.columns,
            )));
        }
        SessionView {
            placed,
            drag: self.drag.state(),
            customizing: self.customizing,
            settings: self.settings.clone(),
        }
    }
}
