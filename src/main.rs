use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use shopassist::{
    agents::CommerceAgent,
    config::Config,
    db::{self, SqliteCatalog},
    routes::create_router,
    utils::init_logger,
};

/// ShopAssist commerce agent API server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, short, env = "PORT")]
    port: Option<u16>,

    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads HOST/PORT/DATABASE_URL
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logger();

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }
    info!("Configuration loaded: {:?}", config.server);

    // Connect to database and seed the catalog
    let pool = db::create_pool(&config.database).await?;
    db::init_database(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize database: {}", e))?;
    info!("Database initialized");

    let agent = CommerceAgent::new(
        config.agent.clone(),
        Arc::new(SqliteCatalog::new(pool.clone())),
    );
    info!(agent = agent.name(), "Commerce agent ready");

    // Create shared state
    let state = shopassist::AppState {
        pool,
        config: config.clone(),
        agent: Arc::new(agent),
    };

    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
