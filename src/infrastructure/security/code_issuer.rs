// src/infrastructure/security/code_issuer.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::CodeIssuer,
};
use crate::domain::authorization::AuthorizationCode;
use argon2::password_hash::rand_core::{OsRng, RngCore};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

const CODE_PREFIX: &str = "cod-";
const CODE_ENTROPY_BYTES: usize = 32;

/// Issues 256-bit random codes straight from the operating system RNG.
#[derive(Default, Clone)]
pub struct RandomCodeIssuer;

impl CodeIssuer for RandomCodeIssuer {
    fn issue(&self) -> ApplicationResult<AuthorizationCode> {
        let mut bytes = [0u8; CODE_ENTROPY_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let code = format!("{CODE_PREFIX}{}", URL_SAFE_NO_PAD.encode(bytes));
        Ok(AuthorizationCode::new(code)?)
    }
}
