use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MAX_PASSWORD_LENGTH: usize = 256;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.is_empty() {
        return Err(ApplicationError::validation("password is required"));
    }

    // Bounded so hashing cost stays predictable.
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at most {MAX_PASSWORD_LENGTH} bytes"
        )));
    }

    Ok(())
}
