use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Token verification settings.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Identity provider domain, e.g. `agency.eu.auth0.com`
    pub domain: String,
    /// Expected `aud` claim
    pub audience: String,
    /// Expected `iss` claim
    pub issuer: String,
    /// Only algorithm accepted (defaults to RS256)
    pub algorithm: Algorithm,
    /// How long a fetched key set is trusted
    pub jwks_cache_ttl: Duration,
}

impl SecurityConfig {
    /// Settings for `domain` and `audience`; the issuer defaults to
    /// `https://<domain>/`.
    pub fn new(domain: impl Into<String>, audience: impl Into<String>) -> Self {
        let domain = domain.into();
        let issuer = format!("https://{domain}/");
        Self {
            domain,
            audience: audience.into(),
            issuer,
            algorithm: Algorithm::RS256,
            jwks_cache_ttl: Duration::from_secs(600),
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_jwks_cache_ttl(mut self, ttl: Duration) -> Self {
        self.jwks_cache_ttl = ttl;
        self
    }

    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain)
    }
}
