use consent_core::application::{
    ports::{
        client_directory::ClientDirectory,
        security::{CodeIssuer, PasswordHasher, SessionAuthenticator},
        time::Clock,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use consent_core::config::AppConfig;
use consent_core::domain::{
    account::{AccountRepository, OAuthSessionRepository},
    authorization::AuthorizationRequestRepository,
};
use consent_core::infrastructure::{
    clients::HttpClientDirectory,
    database,
    repositories::{
        PostgresAccountRepository, PostgresAuthorizationRequestRepository,
        PostgresOAuthSessionRepository,
    },
    security::{
        code_issuer::RandomCodeIssuer, password::Argon2PasswordHasher,
        session_authenticator::PostgresSessionAuthenticator,
    },
    time::SystemClock,
};
use consent_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let request_repo: Arc<dyn AuthorizationRequestRepository> =
        Arc::new(PostgresAuthorizationRequestRepository::new(pool.clone()));
    let account_repo: Arc<dyn AccountRepository> =
        Arc::new(PostgresAccountRepository::new(pool.clone()));
    let session_repo: Arc<dyn OAuthSessionRepository> =
        Arc::new(PostgresOAuthSessionRepository::new(pool.clone()));

    let client_directory: Arc<dyn ClientDirectory> =
        Arc::new(HttpClientDirectory::new(config.client_metadata_timeout())?);
    let code_issuer: Arc<dyn CodeIssuer> = Arc::new(RandomCodeIssuer::default());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let session_authenticator: Arc<dyn SessionAuthenticator> = Arc::new(
        PostgresSessionAuthenticator::new(pool.clone(), Arc::clone(&clock)),
    );

    let services = Arc::new(ApplicationServices::new(
        ServiceDependencies {
            request_repo,
            account_repo,
            session_repo,
            client_directory,
            code_issuer,
            password_hasher,
            session_authenticator,
            clock,
        },
        config.issuer(),
    ));

    let state = HttpState {
        services,
        allowed_origins: config.allowed_origins().into(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(issuer = %config.issuer(), "listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
