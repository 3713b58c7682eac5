//! Route guard middleware.
//! Only lets requests on a valid dynamic subdomain reach the guarded routes.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::SharedConfig;
use crate::routing::constraint::SubdomainConstraint;
use crate::routing::request::RequestHost;

/// Lower-cased tenant label attached to requests that passed the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantLabel(pub String);

/// Install with `route_layer(middleware::from_fn_with_state(shared, subdomain_guard))`.
pub async fn subdomain_guard(
    State(config): State<SharedConfig>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let snapshot = config.load();

    let Some(host) = RequestHost::from_request(&req, snapshot.tld_components) else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };

    match SubdomainConstraint::new(snapshot).tenant_label(&host) {
        Some(label) => {
            req.extensions_mut().insert(TenantLabel(label));
            next.run(req).await
        }
        None => {
            tracing::debug!(host = %host.host(), "Request rejected by subdomain guard");
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}
