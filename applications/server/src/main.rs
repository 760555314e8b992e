/// Scholar Server - research opportunity matching backend
use clap::{Parser, Subcommand};
use scholar_core::{CreateOpportunity, CreateUser, Role, Storage, UserId};
use scholar_matcher::Matcher;
use scholar_server::{config::ServerConfig, create_router, state::AppState};
use scholar_storage::Database;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scholar-server")]
#[command(about = "Research opportunity matching server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
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
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        /// "student" or "academic"
        #[arg(short, long)]
        role: String,
        /// Research interests (students)
        #[arg(short, long)]
        interests: Option<String>,
    },
    /// List all users
    ListUsers,
    /// Create a research opportunity owned by an academic
    AddOpportunity {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
        #[arg(short, long)]
        academic_id: UserId,
    },
    /// List all opportunities
    ListOpportunities,
    /// Run fuzzy matching against the database and print the results
    Match,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scholar_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(&config).await?;
        }
        Commands::AddUser {
            name,
            email,
            role,
            interests,
        } => {
            let role: Role = role.parse()?;
            let user = CreateUser {
                name,
                email,
                role,
                interests,
            };
            add_user(&config, user).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
        Commands::AddOpportunity {
            title,
            description,
            academic_id,
        } => {
            let opportunity = CreateOpportunity {
                title,
                description,
                academic_id,
            };
            add_opportunity(&config, opportunity).await?;
        }
        Commands::ListOpportunities => {
            list_opportunities(&config).await?;
        }
        Commands::Match => {
            run_match(&config).await?;
        }
    }

    Ok(())
}

async fn open_database(config: &ServerConfig) -> anyhow::Result<Database> {
    let db = Database::connect(&config.storage.database_url).await?;
    tracing::info!("Database connected");
    Ok(db)
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Scholar Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let db = Arc::new(open_database(config).await?);
    let matcher = Arc::new(Matcher::new());

    // Build application state
    let app_state = AppState::new(db, matcher);

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

async fn add_user(config: &ServerConfig, user: CreateUser) -> anyhow::Result<()> {
    let db = open_database(config).await?;
    let user = db.create_user(user).await?;

    println!(
        "Created {} {} ({}) with id {}",
        user.role, user.name, user.email, user.id
    );

    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let db = open_database(config).await?;
    let users = db.get_all_users().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} <{}> [{}]", user.id, user.name, user.email, user.role);
    }

    Ok(())
}

async fn add_opportunity(
    config: &ServerConfig,
    opportunity: CreateOpportunity,
) -> anyhow::Result<()> {
    let db = open_database(config).await?;
    let opportunity = db.create_opportunity(opportunity).await?;

    println!(
        "Created opportunity '{}' with id {}",
        opportunity.title, opportunity.id
    );

    Ok(())
}

async fn list_opportunities(config: &ServerConfig) -> anyhow::Result<()> {
    let db = open_database(config).await?;
    let opportunities = db.get_all_opportunities().await?;

    println!("Opportunities:");
    for opp in opportunities {
        println!("  {} - {} (academic {})", opp.id, opp.title, opp.academic_id);
    }

    Ok(())
}

async fn run_match(config: &ServerConfig) -> anyhow::Result<()> {
    let db = open_database(config).await?;
    let report = scholar_matcher::run(&db, &Matcher::new()).await?;

    println!(
        "{} matches from {} pairs:",
        report.matches.len(),
        report.pairs_evaluated
    );
    for m in report.matches {
        println!(
            "  [{}] {} -> {} ({})",
            m.match_score, m.student_name, m.opportunity_title, m.interests
        );
    }

    Ok(())
}
