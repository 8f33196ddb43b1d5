//! HTTP API handlers.

use std::any::Any;
use std::net::{IpAddr, SocketAddr};
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, State},
    http::{header::USER_AGENT, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{error, info};

use crate::system::SystemInfo;
use crate::uptime::Uptime;

/// Service name reported by the root endpoint.
pub const SERVICE_NAME: &str = "devops-info-service";
/// Service description reported by the root endpoint.
pub const SERVICE_DESCRIPTION: &str = "DevOps course info service";
/// Web framework reported by the root endpoint.
pub const SERVICE_FRAMEWORK: &str = "axum";
/// Timezone label for all timestamps.
pub const TIMEZONE: &str = "UTC";
/// Status literal returned by the health check.
pub const HEALTHY: &str = "healthy";

/// Endpoints advertised by the root endpoint.
pub const ENDPOINTS: [EndpointInfo; 2] = [
    EndpointInfo {
        path: "/",
        method: "GET",
        description: "Service information",
    },
    EndpointInfo {
        path: "/health",
        method: "GET",
        description: "Health check",
    },
];

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// When the process started. Written once, read by every request.
    pub started_at: Instant,
}

impl AppState {
    /// Create app state anchored at `started_at`.
    pub fn new(started_at: Instant) -> Self {
        Self { started_at }
    }

    /// Uptime as of now.
    pub fn uptime(&self) -> Uptime {
        Uptime::since(self.started_at)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    /// Service identity.
    pub service: ServiceDetails,
    /// Host and platform facts.
    pub system: SystemInfo,
    /// Uptime and clock.
    pub runtime: RuntimeInfo,
    /// Echo of the inbound request.
    pub request: RequestEcho,
    /// Available endpoints.
    pub endpoints: &'static [EndpointInfo],
}

/// Fixed service identity.
#[derive(Debug, Serialize)]
pub struct ServiceDetails {
    /// Service name: "devops-info-service".
    pub name: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Web framework: "axum".
    pub framework: &'static str,
}

impl ServiceDetails {
    fn current() -> Self {
        Self {
            name: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            description: SERVICE_DESCRIPTION,
            framework: SERVICE_FRAMEWORK,
        }
    }
}

/// Process runtime facts.
#[derive(Debug, Serialize)]
pub struct RuntimeInfo {
    /// Whole seconds since start.
    pub uptime_seconds: u64,
    /// Uptime as "H hour, M minutes".
    pub uptime_human: String,
    /// Current time, RFC 3339, UTC.
    pub current_time: String,
    /// Timezone label: "UTC".
    pub timezone: &'static str,
}

/// Echo of the inbound request.
#[derive(Debug, Serialize)]
pub struct RequestEcho {
    /// Peer IP, `None` when the connection address is unknown.
    pub client_ip: Option<IpAddr>,
    /// `User-Agent` header, if present and valid UTF-8.
    pub user_agent: Option<String>,
    /// HTTP method.
    pub method: String,
    /// Request path without the query string.
    pub path: String,
}

/// One advertised endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EndpointInfo {
    /// Route path.
    pub path: &'static str,
    /// Accepted method.
    pub method: &'static str,
    /// What the endpoint returns.
    pub description: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// RFC 3339, UTC.
    pub timestamp: String,
    /// Whole seconds since start.
    pub uptime_seconds: u64,
}

/// Error body for 404 and 500.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Reason phrase, e.g. "Not Found".
    pub error: &'static str,
}

/// Current UTC time in RFC 3339 with a `Z` suffix.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Root handler - service, host, runtime and request details.
pub async fn service_info(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<ServiceInfoResponse> {
    info!("{} {}", method, uri.path());
    let uptime = state.uptime();

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    Json(ServiceInfoResponse {
        service: ServiceDetails::current(),
        system: SystemInfo::collect(),
        runtime: RuntimeInfo {
            uptime_seconds: uptime.seconds,
            uptime_human: uptime.human(),
            current_time: utc_timestamp(),
            timezone: TIMEZONE,
        },
        request: RequestEcho {
            client_ip: connect_info.map(|ConnectInfo(addr)| addr.ip()),
            user_agent,
            method: method.to_string(),
            path: uri.path().to_string(),
        },
        endpoints: &ENDPOINTS,
    })
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY,
        timestamp: utc_timestamp(),
        uptime_seconds: state.uptime().seconds,
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse { error: "Not Found" }),
    )
}

/// Turns a handler panic into a JSON 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal Server Error",
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use std::time::Duration;

    #[test]
    fn app_state_uptime_counts_from_start() {
        let state = AppState::new(Instant::now() - Duration::from_secs(125));
        let uptime = state.uptime();
        assert!(uptime.seconds >= 125);
        assert_eq!(uptime.hours(), 0);
        assert_eq!(uptime.minutes(), 2);
    }

    #[test]
    fn utc_timestamp_is_rfc3339_zulu() {
        let ts = utc_timestamp();
        assert!(ts.ends_with('Z'), "expected Z suffix: {ts}");
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn endpoints_list_root_then_health() {
        let paths: Vec<_> = ENDPOINTS.iter().map(|e| e.path).collect();
        assert_eq!(paths, ["/", "/health"]);
        assert!(ENDPOINTS.iter().all(|e| e.method == "GET"));
    }

    #[test]
    fn handle_panic_returns_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
