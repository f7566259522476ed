// tests/support/mocks/security.rs
use async_trait::async_trait;
use consent_core::application::{
    ApplicationResult,
    ports::security::{CodeIssuer, PasswordHasher},
};
use consent_core::domain::authorization::AuthorizationCode;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 常に同じコードを返す発行器
pub struct FixedCodeIssuer(pub &'static str);

impl CodeIssuer for FixedCodeIssuer {
    fn issue(&self) -> ApplicationResult<AuthorizationCode> {
        Ok(AuthorizationCode::new(self.0)?)
    }
}

/// `cod-1`, `cod-2`, ... と連番で発行する発行器
#[derive(Default)]
pub struct SequencedCodeIssuer {
    next: AtomicUsize,
}

impl SequencedCodeIssuer {
    pub fn issued(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl CodeIssuer for SequencedCodeIssuer {
    fn issue(&self) -> ApplicationResult<AuthorizationCode> {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(AuthorizationCode::new(format!("cod-{n}"))?)
    }
}

/// ハッシュ化せずに接頭辞を付けるだけのダミー
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }
}
