/// Profiler Server - resident profiling HTTP backend
use clap::{Parser, Subcommand};
use profiler_core::NewUser;
use profiler_server::{
    config::ServerConfig,
    create_router,
    services::AuthService,
    state::{self, AppState},
};
use profiler_importer::ProfileImporter;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::signal::ctrl_c;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "profiler-server")]
#[command(about = "Resident profiling server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PROFILER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Role carried in issued tokens
        #[arg(short, long, default_value = "admin")]
        role: String,
    },
    /// List all users
    ListUsers,
    /// Import profiles from a CSV file
    Import {
        /// CSV file path
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "profiler_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::AddUser {
            username,
            password,
            role,
        } => add_user(config, username, &password, role).await?,
        Commands::ListUsers => list_users(config).await?,
        Commands::Import { path } => import_csv(config, &path).await?,
    }

    Ok(())
}

fn auth_service(config: &ServerConfig) -> AuthService {
    AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    )
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting Profiler Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let storage = state::open_storage(&config.storage).await?;

    let auth_service = Arc::new(auth_service(&config));
    tracing::info!("Auth service initialized");

    let app_state = AppState::new(storage, auth_service);
    let app = create_router(app_state, &config.server);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn add_user(
    config: ServerConfig,
    username: String,
    password: &str,
    role: String,
) -> anyhow::Result<()> {
    let storage = state::open_storage(&config.storage).await?;
    let password_hash = auth_service(&config).hash_password(password)?;

    let user = storage
        .create_user(NewUser {
            username,
            password_hash,
            role,
        })
        .await?;

    println!("Created user {} ({})", user.username, user.role);
    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let storage = state::open_storage(&config.storage).await?;
    let users = storage.get_all_users().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.username, user.role);
    }

    Ok(())
}

async fn import_csv(config: ServerConfig, path: &std::path::Path) -> anyhow::Result<()> {
    let storage = state::open_storage(&config.storage).await?;
    let importer = ProfileImporter::new(storage);

    let summary = importer.import_file(path).await?;

    println!(
        "Imported {} profiles, rejected {} rows ({}ms)",
        summary.accepted_count(),
        summary.rejected_count(),
        summary.elapsed_ms
    );
    for row in &summary.rejected {
        println!("  rejected: {:?}", row);
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
