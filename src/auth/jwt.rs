use jsonwebtoken::{decode, DecodingKey, TokenData, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Tokens are issued by the account service; this API only verifies them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub token_type: TokenType,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

pub fn verify_token(token: &str, config: &Config) -> AppResult<TokenData<Claims>> {
    let mut validation = Validation::default();
    validation.validate_exp = true;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
pub fn issue_test_token(user_id: Uuid, token_type: TokenType, ttl_secs: i64, secret: &str) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        exp: (now + Duration::seconds(ttl_secs)).timestamp(),
        iat: now.timestamp(),
        token_type,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encode test token")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_config, user_id};

    #[test]
    fn test_verify_roundtrip() {
        let config = test_config();
        let token = issue_test_token(user_id(), TokenType::Access, 600, &config.jwt_secret);
        let data = verify_token(&token, &config).unwrap();
        assert_eq!(data.claims.sub, user_id());
        assert_eq!(data.claims.token_type, TokenType::Access);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config();
        let token = issue_test_token(user_id(), TokenType::Access, 600, "some-other-secret");
        assert!(matches!(verify_token(&token, &config), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let token = issue_test_token(user_id(), TokenType::Access, -3600, &config.jwt_secret);
        assert!(matches!(verify_token(&token, &config), Err(AppError::Unauthorized)));
    }
}
