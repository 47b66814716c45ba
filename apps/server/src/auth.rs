use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::main_lib::AppState;

/// Verifies HS256 bearer tokens issued by the identity provider.
pub struct AuthManager {
    decoding_key: DecodingKey,
    validation: Validation,
}

/// Identity of the caller, resolved by [`require_jwt`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

#[derive(Debug)]
pub enum AuthError {
    Unauthorized,
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    code: u16,
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
}

impl AuthManager {
    pub fn new(jwt_secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            decoding_key: DecodingKey::from_secret(jwt_secret),
            validation,
        }
    }

    /// Returns the user id carried in the token's `sub` claim.
    pub fn validate_token(&self, token: &str) -> Result<String, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature
                | jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithm
                | jsonwebtoken::errors::ErrorKind::Base64(_)
                | jsonwebtoken::errors::ErrorKind::Json(_)
                | jsonwebtoken::errors::ErrorKind::Utf8(_)
                | jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(_) => {
                    AuthError::Unauthorized
                }
                other => AuthError::Internal(format!("Failed to validate token: {other:?}")),
            },
        )?;

        let user_id = data.claims.sub.trim();
        if user_id.is_empty() {
            return Err(AuthError::Unauthorized);
        }
        Ok(user_id.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AuthError::Internal(msg) => {
                tracing::error!("Authentication failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        let body = Json(AuthErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

pub fn decode_secret_key(raw: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("JWT secret cannot be empty");
    }
    let decoded = match BASE64.decode(trimmed) {
        Ok(bytes) if bytes.len() >= 32 => bytes,
        _ if trimmed.len() >= 32 => trimmed.as_bytes().to_vec(),
        _ => anyhow::bail!("JWT secret must be base64 encoded or at least 32 bytes long"),
    };

    Ok(decoded)
}

fn bearer_token(request: &Request<Body>) -> Result<&str, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::Unauthorized)?;

    let mut parts = header.splitn(2, ' ');
    let (Some(scheme), Some(token)) = (parts.next(), parts.next()) else {
        return Err(AuthError::Unauthorized);
    };

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(AuthError::Unauthorized);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::Unauthorized);
    }
    Ok(token)
}

/// Resolves the caller's identity and stores it as an [`AuthenticatedUser`]
/// request extension. Without a configured secret every request acts as the
/// default user.
pub async fn require_jwt(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let user_id = match state.auth.as_ref() {
        Some(auth) => auth.validate_token(bearer_token(&request)?)?,
        None => state.default_user_id.clone(),
    };

    request.extensions_mut().insert(AuthenticatedUser(user_id));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn token(sub: &str, exp_offset_secs: i64, secret: &[u8]) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let claims = Claims {
            sub: sub.to_string(),
            exp: (now + exp_offset_secs) as usize,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret)).unwrap()
    }

    #[test]
    fn test_valid_token_yields_subject() {
        let auth = AuthManager::new(SECRET);
        let user = auth.validate_token(&token("alice", 3600, SECRET)).unwrap();
        assert_eq!(user, "alice");
    }

    #[test]
    fn test_rejects_expired_wrong_key_and_blank_subject() {
        let auth = AuthManager::new(SECRET);
        assert!(matches!(
            auth.validate_token(&token("alice", -3600, SECRET)),
            Err(AuthError::Unauthorized)
        ));
        assert!(matches!(
            auth.validate_token(&token("alice", 3600, b"another-secret-another-secret-!!")),
            Err(AuthError::Unauthorized)
        ));
        assert!(matches!(
            auth.validate_token(&token("  ", 3600, SECRET)),
            Err(AuthError::Unauthorized)
        ));
        assert!(matches!(
            auth.validate_token("not-a-jwt"),
            Err(AuthError::Unauthorized)
        ));
    }

    #[test]
    fn test_decode_secret_key() {
        let encoded = BASE64.encode(SECRET);
        assert_eq!(decode_secret_key(&encoded).unwrap(), SECRET);
        assert!(decode_secret_key("").is_err());
        assert!(decode_secret_key("short").is_err());
        // Raw secrets that happen to be valid base64 still keep their bytes.
        assert_eq!(
            decode_secret_key("0123456789abcdef0123456789abcdef").unwrap(),
            SECRET
        );
    }
}
