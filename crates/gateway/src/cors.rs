//! CORS policy built from `[server.cors]`.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use sp_domain::config::CorsConfig;

/// Configured origins, split into exact matches and `scheme://host:*`
/// patterns that accept any numeric port.
#[derive(Debug, Clone, Default)]
pub struct OriginMatcher {
    exact: Vec<String>,
    any_port: Vec<String>,
}

impl OriginMatcher {
    pub fn from_origins(origins: &[String]) -> Self {
        let mut matcher = Self::default();
        for origin in origins {
            match origin.strip_suffix('*') {
                Some(prefix) if prefix.ends_with(':') => matcher.any_port.push(prefix.to_owned()),
                _ => matcher.exact.push(origin.clone()),
            }
        }
        matcher
    }

    pub fn matches(&self, origin: &str) -> bool {
        if self.exact.iter().any(|e| e == origin) {
            return true;
        }
        self.any_port.iter().any(|prefix| {
            origin
                .strip_prefix(prefix.as_str())
                .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
        })
    }
}

/// Build the [`CorsLayer`] for the server.
///
/// A lone `"*"` allows every origin without credentials. Anything else is
/// matched through [`OriginMatcher`] with credentials allowed.
pub fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if let [only] = cors.allowed_origins.as_slice() {
        if only == "*" {
            tracing::warn!("CORS configured with wildcard \"*\"; all origins allowed");
            return base.allow_origin(Any);
        }
    }

    let matcher = OriginMatcher::from_origins(&cors.allowed_origins);
    base.allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
        origin.to_str().is_ok_and(|o| matcher.matches(o))
    }))
    .allow_credentials(true)
}
