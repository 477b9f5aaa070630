#![forbid(unsafe_code)]

//! REST encoding of host requests.
//!
//! A [`HostRequest`] becomes one or more [`RestCall`]s against the profile
//! API. Hosts with an HTTP client send the calls in order; [`RestApi`]
//! adapts any such client to the runtime's [`PortfolioApi`].

use serde::Serialize;
use webstar_layout::{AspectTag, LayoutSettings, TileId};
use webstar_runtime::{HostError, HostRequest, ItemOrder, PortfolioApi};

use crate::customization::{CustomizationError, CustomizationUpdate};

/// Profile update endpoint.
pub const PROFILE_ME_PATH: &str = "/api/profiles/me";

/// Daily analytics endpoint.
pub const DAILY_ANALYTICS_PATH: &str = "/api/analytics/daily";
/// Owner's portfolio items endpoint.
pub const PORTFOLIO_PATH: &str = "/api/portfolio";

/// Item update endpoint for `id`.
#[must_use]
pub fn item_path(id: TileId) -> String {
    format!("/api/portfolio/{}", id.0)
}

/// HTTP verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
}

/// A fully encoded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestCall {
    pub method: Method,
    pub path: String,
    /// JSON body; empty for `GET`.
    pub body: String,
}

impl RestCall {
    fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            body: String::new(),
        }
    }

    /// Fetch the daily analytics window.
    #[must_use]
    pub fn daily_analytics() -> Self {
        Self::get(DAILY_ANALYTICS_PATH)
    }

    /// Fetch the owner's portfolio items.
    #[must_use]
    pub fn portfolio_items() -> Self {
        Self::get(PORTFOLIO_PATH)
    }
}

#[derive(Serialize)]
struct OrderBody {
    order: u32,
}

#[derive(Serialize)]
struct AspectBody<'a> {
    aspect_ratio: &'a str,
}

fn put(path: String, body: &impl Serialize) -> Result<RestCall, CustomizationError> {
    Ok(RestCall {
        method: Method::Put,
        path,
        body: serde_json::to_string(body)?,
    })
}

/// Encode a request as the calls that persist it.
pub fn encode(request: &HostRequest) -> Result<Vec<RestCall>, CustomizationError> {
    match request {
        HostRequest::ReorderItems(orders) => orders
            .iter()
            .map(|item| put(item_path(item.id), &OrderBody { order: item.order }))
            .collect(),
        HostRequest::UpdateItemAspect { id, aspect } => Ok(vec![put(
            item_path(*id),
            &AspectBody {
                aspect_ratio: aspect.as_str(),
            },
        )?]),
        HostRequest::SaveCustomization(settings) => Ok(vec![put(
            PROFILE_ME_PATH.to_string(),
            &CustomizationUpdate::new(settings)?,
        )?]),
    }
}

/// Minimal HTTP transport.
pub trait Transport {
    fn send(&mut self, call: RestCall) -> Result<(), HostError>;
}

/// [`PortfolioApi`] over any [`Transport`].
#[derive(Debug, Clone, Default)]
pub struct RestApi<T> {
    transport: T,
}

impl<T: Transport> RestApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    fn send_all(&mut self, request: &HostRequest) -> Result<(), HostError> {
        let calls = encode(request).map_err(|err| HostError::new(err.to_string()))?;
        calls.into_iter().try_for_each(|call| self.transport.send(call))
    }
}

impl<T: Transport> PortfolioApi for RestApi<T> {
    fn update_item_order(&mut self, id: TileId, order: u32) -> Result<(), HostError> {
        self.send_all(&HostRequest::ReorderItems(vec![ItemOrder { id, order }]))
    }

    fn update_item_aspect(&mut self, id: TileId, aspect: AspectTag) -> Result<(), HostError> {
        self.send_all(&HostRequest::UpdateItemAspect { id, aspect })
    }

    fn update_customization(&mut self, settings: &LayoutSettings) -> Result<(), HostError> {
        self.send_all(&HostRequest::SaveCustomization(settings.clone()))
    }
}
