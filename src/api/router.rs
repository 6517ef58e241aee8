//! Framework-agnostic request dispatch for the depth chart API.
//!
//! Maps a method, request target and optional JSON body onto store and query
//! operations and produces a status code plus JSON body. Whatever serves the
//! HTTP boundary owns the socket and hands requests to [`Router::handle`].

use std::sync::Arc;

use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use super::types::{
    AddPlayerRequest, AddPlayerResponse, BackupsResponse, PlayerChartResponse, RemovePlayerRequest,
    RemovePlayerResponse,
};
use crate::chart::{DepthChartStore, QueryService};
use crate::error::{DepthChartError, Result};

/// An incoming request as seen by the router.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path plus optional query string, e.g. `/backups?position=QB&player=A`.
    pub target: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, target: impl Into<String>, body: Option<String>) -> Self {
        Self {
            method,
            target: target.into(),
            body,
        }
    }

    pub fn get(target: impl Into<String>) -> Self {
        Self::new(Method::GET, target, None)
    }

    pub fn post(target: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Method::POST, target, Some(body.into()))
    }

    pub fn delete(target: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Method::DELETE, target, Some(body.into()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    fn ok<T: Serialize>(status: StatusCode, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status, body },
            Err(e) => Self::from_error(&DepthChartError::from(e)),
        }
    }

    fn from_error(err: &DepthChartError) -> Self {
        let status = err.status_code();
        if status.is_server_error() {
            error!(error = %err, "request failed");
        } else {
            warn!(error = %err, "request rejected");
        }
        Self::message(status, err.to_string())
    }

    fn message(status: StatusCode, message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self {
            status,
            body: json!({ "error": message }),
        }
    }
}

enum Route {
    Chart,
    Add,
    Remove,
    Backups,
    BackupsV2,
}

impl Route {
    fn resolve(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match path {
            "/" => Some(Route::Chart),
            "/add" => Some(Route::Add),
            "/remove" => Some(Route::Remove),
            "/backups" => Some(Route::Backups),
            "/v2/backups" => Some(Route::BackupsV2),
            _ => None,
        }
    }

    fn method(&self) -> Method {
        match self {
            Route::Chart | Route::Backups | Route::BackupsV2 => Method::GET,
            Route::Add => Method::POST,
            Route::Remove => Method::DELETE,
        }
    }
}

/// Dispatches API requests against an injected store.
#[derive(Clone)]
pub struct Router {
    store: Arc<DepthChartStore>,
}

impl Router {
    pub fn new(store: Arc<DepthChartStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DepthChartStore {
        &self.store
    }

    pub fn handle(&self, request: &ApiRequest) -> ApiResponse {
        debug!(method = %request.method, target = %request.target, "api request");

        let Ok(url) = Url::parse("http://localhost").and_then(|base| base.join(&request.target))
        else {
            return ApiResponse::message(StatusCode::NOT_FOUND, "not found");
        };

        let Some(route) = Route::resolve(url.path()) else {
            return ApiResponse::message(StatusCode::NOT_FOUND, "not found");
        };
        if request.method != route.method() {
            return ApiResponse::message(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
        }

        let result = match route {
            Route::Chart => self.chart(),
            Route::Add => self.add(request.body.as_deref()),
            Route::Remove => self.remove(request.body.as_deref()),
            Route::Backups => self.backups(&url, false),
            Route::BackupsV2 => self.backups(&url, true),
        };

        result.unwrap_or_else(|err| ApiResponse::from_error(&err))
    }

    fn chart(&self) -> Result<ApiResponse> {
        let player_chart = QueryService::new(&self.store).player_chart()?;
        Ok(ApiResponse::ok(
            StatusCode::OK,
            &PlayerChartResponse { player_chart },
        ))
    }

    fn add(&self, body: Option<&str>) -> Result<ApiResponse> {
        let request: AddPlayerRequest = parse_body(body)?;
        let depth = request.validate()?;
        let rank = self
            .store
            .add_player(&request.position, &request.player, depth)?;

        Ok(ApiResponse::ok(
            StatusCode::CREATED,
            &AddPlayerResponse {
                position: request.position,
                player: request.player,
                position_depth: rank,
            },
        ))
    }

    fn remove(&self, body: Option<&str>) -> Result<ApiResponse> {
        let request: RemovePlayerRequest = parse_body(body)?;
        request.validate()?;
        let player = self
            .store
            .remove_player(&request.position, &request.player)?;

        Ok(ApiResponse::ok(
            StatusCode::OK,
            &RemovePlayerResponse { player },
        ))
    }

    fn backups(&self, url: &Url, versioned: bool) -> Result<ApiResponse> {
        let position = query_param(url, "position")?;
        let player = query_param(url, "player")?;
        let lookup = QueryService::new(&self.store).backups(&position, &player)?;

        if versioned {
            Ok(ApiResponse::ok(StatusCode::OK, &lookup))
        } else {
            Ok(ApiResponse::ok(
                StatusCode::OK,
                &BackupsResponse {
                    backups: lookup.into_backups(),
                },
            ))
        }
    }
}

fn parse_body<T: DeserializeOwned>(body: Option<&str>) -> Result<T> {
    let body = body.ok_or_else(|| DepthChartError::invalid_input("request body is required"))?;
    serde_json::from_str(body)
        .map_err(|e| DepthChartError::invalid_input(format!("malformed request body: {}", e)))
}

fn query_param(url: &Url, name: &str) -> Result<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| DepthChartError::invalid_input(format!("{} query parameter is required", name)))
}
