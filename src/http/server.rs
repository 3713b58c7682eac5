//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the demo handlers
//! - Wire up middleware (tracing, timeout, subdomain guard)
//! - Generate links through the subdomain-aware URL builder
//! - Bind server to listener

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ServerConfig, SharedConfig};
use crate::lifecycle::shutdown_signal;
use crate::routing::{subdomain_guard, RequestHost, TenantLabel, TenantSet};
use crate::url::{GenerateError, SubdomainDirective, SubdomainUrlFor, UrlBuilder, UrlOptions};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: SharedConfig,
    pub tenants: Arc<TenantSet>,
}

/// HTTP server for the demo application.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around the shared configuration.
    pub fn new(config: SharedConfig, tenants: Arc<TenantSet>, server: &ServerConfig) -> Self {
        let state = AppState { config, tenants };
        Self {
            router: Self::build_router(server, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(server: &ServerConfig, state: AppState) -> Router {
        let tenant_routes = Router::new()
            .route("/dashboard", get(dashboard))
            .route_layer(middleware::from_fn_with_state(
                state.config.clone(),
                subdomain_guard,
            ));

        Router::new()
            .route("/", get(index))
            .merge(tenant_routes)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The configured router, for embedding or in-process testing.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn current_host(headers: &HeaderMap, tld_components: usize) -> Option<RequestHost> {
    headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(|h| RequestHost::parse(h, tld_components))
}

fn link(
    url_for: &SubdomainUrlFor<UrlBuilder>,
    directive: SubdomainDirective,
    path: &str,
    host: Option<&RequestHost>,
) -> Result<String, GenerateError> {
    let options = UrlOptions::new()
        .with("path", path)
        .with_subdomain(directive);
    url_for.url_for(options, host.map(RequestHost::host))
}

fn error_response(e: GenerateError) -> Response {
    tracing::error!(error = %e, "URL generation failed");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
}

/// Default site: links to the bare site and every known tenant.
async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let config = state.config.load();
    let host = current_host(&headers, config.tld_components);
    let url_for = SubdomainUrlFor::new(UrlBuilder, config);

    let home = match link(&url_for, SubdomainDirective::UseDefault, "/", host.as_ref()) {
        Ok(url) => url,
        Err(e) => return error_response(e),
    };

    let mut tenants = Map::new();
    for label in state.tenants.labels() {
        let directive = SubdomainDirective::Explicit(label.clone());
        match link(&url_for, directive, "/dashboard", host.as_ref()) {
            Ok(url) => {
                tenants.insert(label, Value::String(url));
            }
            Err(e) => return error_response(e),
        }
    }

    Json(json!({ "home": home, "tenants": tenants })).into_response()
}

/// Tenant page, only reachable through the subdomain guard.
async fn dashboard(
    State(state): State<AppState>,
    Extension(TenantLabel(tenant)): Extension<TenantLabel>,
    headers: HeaderMap,
) -> Response {
    let config = state.config.load();
    let host = current_host(&headers, config.tld_components);
    let url_for = SubdomainUrlFor::new(UrlBuilder, config);

    match link(&url_for, SubdomainDirective::UseDefault, "/", host.as_ref()) {
        Ok(home) => Json(json!({ "tenant": tenant, "home": home })).into_response(),
        Err(e) => error_response(e),
    }
}
