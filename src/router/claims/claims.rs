use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::common::ADMIN_TOKEN_TTL_SECS;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub admin: bool,
    pub exp: u64,
}

impl Claims {
    pub fn new_admin() -> Self {
        let exp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_secs()
            + ADMIN_TOKEN_TTL_SECS;

        Self { admin: true, exp }
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn encode_with_key(&self, key: &[u8]) -> String {
        encode(&Header::default(), &self, &EncodingKey::from_secret(key))
            .expect("Failed to generate token")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

    #[test]
    fn admin_claims_round_trip_through_a_token() {
        let token = Claims::new_admin().encode_with_key(b"unit-test-key");
        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"unit-test-key"),
            &Validation::new(Algorithm::HS256),
        )
        .expect("decodable token")
        .claims;

        assert!(decoded.is_admin());
    }

    #[test]
    fn tokens_signed_with_another_key_are_rejected() {
        let token = Claims::new_admin().encode_with_key(b"unit-test-key");
        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"a-different-key"),
            &Validation::new(Algorithm::HS256),
        );

        assert!(result.is_err());
    }
}
