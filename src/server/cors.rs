use crate::config::CorsConfig;
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tracing::warn;

/// Builds the CORS layer from config.
///
/// Browsers refuse a literal `*` together with
/// `Access-Control-Allow-Credentials: true`, so when credentials are allowed
/// every wildcard is served by echoing what the request asked for.
pub fn build_cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let credentials = cfg.allow_credentials;

    if is_wildcard(&cfg.allow_origins) {
        warn!(
            "CORS allows any origin{}; list explicit origins for production deployments",
            if credentials { " with credentials" } else { "" }
        );
    }

    let allow_origin = if is_wildcard(&cfg.allow_origins) {
        if credentials {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::any()
        }
    } else {
        AllowOrigin::list(parse_all::<HeaderValue>(&cfg.allow_origins, "origin"))
    };

    let allow_methods = if is_wildcard(&cfg.allow_methods) {
        if credentials {
            AllowMethods::mirror_request()
        } else {
            AllowMethods::from(Any)
        }
    } else {
        AllowMethods::list(parse_all::<Method>(&cfg.allow_methods, "method"))
    };

    let allow_headers = if is_wildcard(&cfg.allow_headers) {
        if credentials {
            AllowHeaders::mirror_request()
        } else {
            AllowHeaders::from(Any)
        }
    } else {
        AllowHeaders::list(parse_all::<HeaderName>(&cfg.allow_headers, "header"))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(allow_methods)
        .allow_headers(allow_headers)
        .allow_credentials(credentials)
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

fn parse_all<T: std::str::FromStr>(values: &[String], what: &str) -> Vec<T> {
    values
        .iter()
        .filter_map(|v| match v.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!("Ignoring invalid CORS {}: '{}'", what, v);
                None
            }
        })
        .collect()
}
