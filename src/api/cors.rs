//! Cross-origin policy for the portfolio front-ends

use axum::http::{HeaderValue, Method, header, request::Parts};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// One allowed origin: exact, or `scheme://*.domain` for any subdomain
#[derive(Debug, Clone, PartialEq, Eq)]
enum OriginPattern {
    Exact(String),
    Subdomain { scheme: String, suffix: String },
}

impl OriginPattern {
    fn parse(pattern: &str) -> Self {
        let pattern = pattern.trim().trim_end_matches('/');

        match pattern.split_once("://*.") {
            Some((scheme, domain)) => Self::Subdomain {
                scheme: format!("{}://", scheme),
                suffix: format!(".{}", domain),
            },
            None => Self::Exact(pattern.to_string()),
        }
    }

    fn matches(&self, origin: &str) -> bool {
        match self {
            Self::Exact(allowed) => allowed == origin,
            Self::Subdomain { scheme, suffix } => origin
                .strip_prefix(scheme.as_str())
                .and_then(|host| host.strip_suffix(suffix.as_str()))
                .is_some_and(|sub| !sub.is_empty() && !sub.contains('/')),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    patterns: Vec<OriginPattern>,
}

impl AllowedOrigins {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: origins
                .into_iter()
                .map(|o| OriginPattern::parse(o.as_ref()))
                .collect(),
        }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(origin))
    }
}

/// Credentials allowed; GET, POST and OPTIONS only
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed = AllowedOrigins::new(&config.allowed_origins);

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin.to_str().is_ok_and(|o| allowed.is_allowed(o))
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> AllowedOrigins {
        AllowedOrigins::new(&CorsConfig::default().allowed_origins)
    }

    #[test]
    fn test_exact_origins() {
        let origins = defaults();

        assert!(origins.is_allowed("http://localhost:3000"));
        assert!(origins.is_allowed("http://localhost:5173"));
        assert!(!origins.is_allowed("http://localhost:8080"));
    }

    #[test]
    fn test_subdomain_wildcard() {
        let origins = defaults();

        assert!(origins.is_allowed("https://minhajul-bhuiyan.vercel.app"));
        assert!(origins.is_allowed("https://preview-123.vercel.app"));
        assert!(!origins.is_allowed("https://vercel.app"));
        assert!(!origins.is_allowed("http://preview.vercel.app"));
        assert!(!origins.is_allowed("https://evil.com/x.vercel.app"));
        assert!(!origins.is_allowed("https://vercel.app.evil.com"));
    }

    #[test]
    fn test_trailing_slash_ignored_in_config() {
        let origins = AllowedOrigins::new(["https://example.com/"]);
        assert!(origins.is_allowed("https://example.com"));
    }
}
