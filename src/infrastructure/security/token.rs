// src/infrastructure/security/token.rs
//
// Compact HMAC-signed bearer tokens carrying a resolved actor identity.
// Token layout: base64url(id|username|role) "." base64url(hmac-sha256).
// Issuance exists so operators and tests can mint tokens; there is no login
// flow in this service.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::security::ActorTokenVerifier;
use crate::domain::actor::{ActorId, AuthenticatedActor, Role, Username};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub struct HmacActorTokens {
    key: Vec<u8>,
}

impl HmacActorTokens {
    pub fn from_hex_key(hex_key: &str) -> ApplicationResult<Self> {
        let key = decode_hex(hex_key).ok_or_else(|| {
            ApplicationError::infrastructure("session key must be a hex-encoded byte string")
        })?;
        if key.len() < 32 {
            return Err(ApplicationError::infrastructure(
                "session key must be at least 32 bytes",
            ));
        }
        Ok(Self { key })
    }

    pub fn issue(&self, actor: &AuthenticatedActor) -> String {
        let payload = format!("{}|{}|{}", actor.id, actor.username, actor.role);
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        let mac_b64 = URL_SAFE_NO_PAD.encode(self.mac_of(payload_b64.as_bytes()));
        format!("{payload_b64}.{mac_b64}")
    }

    fn mac_of(&self, message: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .expect("hmac accepts keys of any length");
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }

    fn verify_mac(&self, message: &[u8], candidate: &[u8]) -> bool {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .expect("hmac accepts keys of any length");
        mac.update(message);
        mac.verify_slice(candidate).is_ok()
    }
}

fn decode_hex(value: &str) -> Option<Vec<u8>> {
    if value.len() % 2 != 0 {
        return None;
    }
    (0..value.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&value[i..i + 2], 16).ok())
        .collect()
}

fn malformed() -> ApplicationError {
    ApplicationError::unauthorized("invalid actor token")
}

#[async_trait]
impl ActorTokenVerifier for HmacActorTokens {
    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedActor> {
        let (payload_b64, mac_b64) = token.split_once('.').ok_or_else(malformed)?;
        let candidate = URL_SAFE_NO_PAD.decode(mac_b64).map_err(|_| malformed())?;
        if !self.verify_mac(payload_b64.as_bytes(), &candidate) {
            return Err(malformed());
        }

        let payload_bytes = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| malformed())?;
        let payload = String::from_utf8(payload_bytes).map_err(|_| malformed())?;
        let mut parts = payload.splitn(3, '|');
        let (Some(id), Some(username), Some(role)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        Ok(AuthenticatedActor {
            id: ActorId::parse(id).map_err(|_| malformed())?,
            username: Username::new(username).map_err(|_| malformed())?,
            role: role.parse::<Role>().map_err(|_| malformed())?,
        })
    }
}
