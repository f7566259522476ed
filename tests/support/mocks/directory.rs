// tests/support/mocks/directory.rs
use async_trait::async_trait;
use consent_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::client_directory::{ClientDirectory, ClientMetadata},
};
use consent_core::domain::authorization::ClientId;

/// メタデータ取得が常に失敗するディレクトリ
pub struct FailingClientDirectory;

#[async_trait]
impl ClientDirectory for FailingClientDirectory {
    async fn resolve(&self, client_id: &ClientId) -> ApplicationResult<ClientMetadata> {
        Err(ApplicationError::upstream(format!(
            "metadata fetch for {client_id} timed out"
        )))
    }
}
