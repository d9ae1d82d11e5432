//! Principal extraction middleware
//!
//! Validates a bearer JWT when one is present and attaches the resulting
//! principal to the request. The catalog engine performs no authentication
//! itself: it only receives a principal id or an explicit "no principal"
//! signal, so this middleware never rejects a request. Write handlers turn a
//! missing principal into `AccessDenied`.

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
}

/// Authenticated principal attached to the request
#[derive(Debug, Clone, Copy)]
pub struct AuthPrincipal {
    pub id: Uuid,
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Public key for verifying tokens (PEM)
    pub public_key: String,
}

impl JwtConfig {
    /// Create a new JwtConfig from environment variables
    pub fn from_env() -> Result<Self, String> {
        let public_key = env::var("JWT_PUBLIC_KEY")
            .map_err(|_| "JWT_PUBLIC_KEY environment variable not set".to_string())?;

        Ok(JwtConfig { public_key })
    }
}

/// Attach the authenticated principal, if any, to the request
pub async fn principal_middleware(mut req: Request<Body>, next: Next) -> Response {
    let principal = extract_principal(req.headers());
    req.extensions_mut().insert(principal);

    next.run(req).await
}

fn extract_principal(headers: &HeaderMap) -> Option<AuthPrincipal> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())?;

    let token = auth_header.strip_prefix("Bearer ")?;

    let jwt_config = match JwtConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load JWT config: {}", e);
            return None;
        }
    };

    let decoding_key = match DecodingKey::from_rsa_pem(jwt_config.public_key.as_bytes()) {
        Ok(key) => key,
        Err(e) => {
            warn!("Failed to create decoding key: {}", e);
            return None;
        }
    };

    let mut validation = Validation::new(jsonwebtoken::Algorithm::RS256);
    validation.validate_exp = true;

    match jsonwebtoken::decode::<Claims>(token, &decoding_key, &validation) {
        Ok(token_data) => Some(AuthPrincipal {
            id: token_data.claims.sub,
        }),
        Err(e) => {
            warn!("Failed to validate token: {}", e);
            None
        }
    }
}
