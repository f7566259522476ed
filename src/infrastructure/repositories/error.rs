use crate::domain::errors::DomainError;

const CNT_REQUEST_CODE: &str = "oauth_authorization_requests_code_key";
const CNT_REQUEST_ACCEPTANCE_CHECK: &str =
    "oauth_authorization_requests_code_requires_acceptance_chk";
const CNT_ACCOUNT_EMAIL: &str = "accounts_email_key";
const CNT_ACCOUNT_HANDLE: &str = "accounts_handle_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_REQUEST_CODE => {
                        DomainError::Conflict("authorization code already issued".into())
                    }
                    CNT_REQUEST_ACCEPTANCE_CHECK => DomainError::Validation(
                        "authorization code requires an accepted subject".into(),
                    ),
                    CNT_ACCOUNT_EMAIL => DomainError::Conflict("email already in use".into()),
                    CNT_ACCOUNT_HANDLE => DomainError::Conflict("handle already in use".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
