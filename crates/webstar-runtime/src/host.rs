#![forbid(unsafe_code)]

//! Host collaborators: persistence requests and the notification sink.
//!
//! The session only *describes* persistence as [`HostRequest`] values.
//! [`dispatch`] routes one request to a [`PortfolioApi`] implementation and
//! reports the outcome through a [`NotificationSink`]. Failures keep the
//! optimistic local state; there is no rollback.

use std::fmt;

use webstar_layout::{AspectTag, LayoutSettings, TileId};

/// New position of one item after a reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemOrder {
    pub id: TileId,
    pub order: u32,
}

/// Something the host should persist.
#[derive(Debug, Clone, PartialEq)]
pub enum HostRequest {
    /// Store new `order` values for the items whose position changed.
    ReorderItems(Vec<ItemOrder>),
    /// Store a new size choice for one item.
    UpdateItemAspect { id: TileId, aspect: AspectTag },
    /// Store the serialized layout settings on the profile.
    SaveCustomization(LayoutSettings),
}

impl HostRequest {
    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            HostRequest::ReorderItems(_) => "reorder_items",
            HostRequest::UpdateItemAspect { .. } => "update_item_aspect",
            HostRequest::SaveCustomization(_) => "save_customization",
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            HostRequest::ReorderItems(_) => "Order saved",
            HostRequest::UpdateItemAspect { .. } => "Size updated",
            HostRequest::SaveCustomization(_) => "Layout saved",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            HostRequest::ReorderItems(_) => "Failed to save order",
            HostRequest::UpdateItemAspect { .. } => "Failed to update size",
            HostRequest::SaveCustomization(_) => "Failed to save layout",
        }
    }
}

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Fire-and-forget toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Failure reported by a host collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    pub message: String,
}

impl HostError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host request failed: {}", self.message)
    }
}

impl std::error::Error for HostError {}

/// The profile/portfolio REST API as seen by the engine.
pub trait PortfolioApi {
    fn update_item_order(&mut self, id: TileId, order: u32) -> Result<(), HostError>;

    fn update_item_aspect(&mut self, id: TileId, aspect: AspectTag) -> Result<(), HostError>;

    fn update_customization(&mut self, settings: &LayoutSettings) -> Result<(), HostError>;
}

/// Receiver for toasts. No return value is consumed.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Perform one request against the API and report the outcome.
///
/// A reorder stops at the first failing item.
pub fn dispatch<A, S>(request: &HostRequest, api: &mut A, sink: &mut S) -> Result<(), HostError>
where
    A: PortfolioApi + ?Sized,
    S: NotificationSink + ?Sized,
{
    let result = match request {
        HostRequest::ReorderItems(orders) => orders
            .iter()
            .try_for_each(|item| api.update_item_order(item.id, item.order)),
        HostRequest::UpdateItemAspect { id, aspect } => api.update_item_aspect(*id, *aspect),
        HostRequest::SaveCustomization(settings) => api.update_customization(settings),
    };

    match &result {
        Ok(()) => {
            tracing::debug!(request = request.kind(), "host request persisted");
            sink.notify(Notification::success(request.success_message()));
        }
        Err(err) => {
            tracing::warn!(request = request.kind(), error = %err, "host request failed");
            sink.notify(Notification::error(request.failure_message()));
        }
    }
    result
}
