use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use roster::api::{self, UserDataSource};
use roster::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use roster::models::{rows_from_records, AppState};
use roster::routes::build_router;
use roster::view::{LoadStatus, UsersView};

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let stored = config::get_api_credentials();
    let credentials = stored
        .as_ref()
        .map(|(u, p)| (u.as_str(), p.as_str()));
    let client = match api::build_http_client(credentials) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    };
    AppState::new(client, config::get_api_url())
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match config::parse_listen_addr(host, port) {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    tracing::info!(%addr, api_url = %state.api_url, "Starting roster web server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}/users", addr)).cyan()
    );
    let app = build_router(state);
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new(
                    "Stop the process using this port, or pass a different --port value."
                )
                .yellow()
            );
            process::exit(1);
        }
    }
}

fn print_users_table(
    data_source: &UserDataSource,
    users: &[roster::UserRecord],
    show_secrets: bool,
) {
    if users.is_empty() {
        println!("(no users at {})", data_source.resource_url());
        return;
    }
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["Username", "Status", "Authorities", "Password"]);
    for row in rows_from_records(users, show_secrets) {
        table.add_row(vec![row.username, row.status, row.authorities, row.secret]);
    }
    println!("\n{table}\n");
}

#[derive(Parser)]
#[command(
    name = "roster",
    author,
    version,
    about = "Browse the users of a remote API",
    long_about = r#"Roster fetches the users collection from `{API_URL}/users` and shows it
either as a terminal table or as a web page.

Configuration is read from the environment or a `.env` file:
  API_URL        API root, e.g. https://api.example.com (default http://localhost:8080/api)
  API_USERNAME   optional HTTP Basic user
  API_PASSWORD   optional HTTP Basic password

Examples:
  roster serve --port 4200
  roster users list
  roster check-config --env-file prod.env
"#,
    after_help = "Use `roster <subcommand> --help` for subcommand options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response echo
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration and that the users endpoint answers
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Inspect remote users
    Users {
        #[command(subcommand)]
        sub: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    #[command(
        about = "List users",
        long_about = "Fetch `{API_URL}/users` once and print the result as a table. \
                      Passwords are masked unless --show-secrets is given."
    )]
    List {
        /// Print the password column as received
        #[arg(long, default_value_t = false)]
        show_secrets: bool,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    if cli.silent {
        api::set_silent(true);
    }

    let Some(command) = cli.command else {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT).await;
        return;
    };

    match command {
        Commands::Serve { host, port, env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            if std::env::var("API_URL").map(|v| v.trim().is_empty()).unwrap_or(true) {
                eprintln!(
                    "{} {}",
                    yansi::Paint::new("API_URL is not configured; using default").yellow(),
                    state.api_url
                );
            }
            match state.data_source.get_all().await {
                Ok(users) => {
                    println!(
                        "{} ({} users at {})",
                        yansi::Paint::new("Configuration looks valid").green(),
                        users.len(),
                        state.data_source.resource_url()
                    );
                }
                Err(e) => {
                    tracing::error!(%e, "Users endpoint check failed");
                    eprintln!(
                        "{}: {}",
                        yansi::Paint::new("Configuration appears invalid").red(),
                        e
                    );
                    process::exit(1);
                }
            }
        }
        Commands::Users { sub } => match sub {
            UserCommands::List { show_secrets, env_file } => {
                let state = build_state_from_env(env_file.as_deref());
                let mut view = UsersView::new(state.data_source.clone());
                view.on_init();
                view.settled().await;
                let snapshot = view.snapshot();
                if let LoadStatus::Failed(msg) = &snapshot.status {
                    eprintln!("{}: {}", yansi::Paint::new("Failed to load users").red(), msg);
                    process::exit(1);
                }
                print_users_table(&state.data_source, &snapshot.users, show_secrets);
            }
        },
    }
}
