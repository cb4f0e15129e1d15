//! `wecomctl` — CLI client for the wecom-cmder backend.
//!
//! Manages the server connection, authentication, WeChat-Work
//! configuration, message history, and bot commands.

mod commands;
mod config;

use clap::{Parser, Subcommand};

/// wecom-cmder CLI tool.
#[derive(Parser, Debug)]
#[command(name = "wecomctl", about = "wecom-cmder CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.wecom/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set or show the backend server URL.
    Server {
        /// Server URL (omit to show the current one).
        url: Option<String>,
    },

    /// Login to the configured server.
    Login {
        /// Username.
        #[arg(long)]
        user: Option<String>,
        /// Password (not recommended — use interactive prompt).
        #[arg(long)]
        password: Option<String>,
    },

    /// Logout — clear the stored token. No network call.
    Logout,

    /// Print the authenticated username.
    Whoami,

    /// Check server health and session state.
    Status,

    /// WeChat-Work integration configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Message history and sending.
    Messages {
        #[command(subcommand)]
        action: MessageAction,
    },

    /// Bot command management.
    Commands {
        #[command(subcommand)]
        action: CommandAction,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show the current config.
    Get,
    /// Replace the config from a JSON body.
    Set {
        /// JSON body.
        #[arg(long = "json")]
        json_body: Option<String>,
        /// Read JSON from file.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
    },
    /// Validate a config against the WeChat API without saving it.
    Test {
        /// JSON body.
        #[arg(long = "json")]
        json_body: Option<String>,
        /// Read JSON from file.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum MessageAction {
    /// List message history.
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long = "page-size")]
        page_size: Option<u32>,
        /// Filter by direction: in or out.
        #[arg(long)]
        direction: Option<String>,
        /// Filter by sender.
        #[arg(long = "from-user")]
        from_user: Option<String>,
        /// Epoch seconds, inclusive lower bound.
        #[arg(long = "start-time")]
        start_time: Option<i64>,
        /// Epoch seconds, inclusive upper bound.
        #[arg(long = "end-time")]
        end_time: Option<i64>,
    },
    /// Send a message.
    Send {
        #[command(subcommand)]
        what: SendWhat,
    },
}

#[derive(Subcommand, Debug)]
enum SendWhat {
    /// Send a text message.
    Text {
        /// Recipient user ID ("@all" broadcasts).
        #[arg(long = "to", default_value = "@all")]
        to_user: String,
        /// Message content.
        content: String,
    },
    /// Send a news-card message from a JSON articles file.
    News {
        /// Recipient user ID ("@all" broadcasts).
        #[arg(long = "to", default_value = "@all")]
        to_user: String,
        /// JSON file with an array of articles.
        #[arg(short = 'f', long = "file")]
        file: String,
    },
}

#[derive(Subcommand, Debug)]
enum CommandAction {
    /// List bot commands in server order.
    List,
    /// Update a command's enabled flag and/or sort order.
    Update {
        /// Command ID.
        command_id: String,
        #[arg(long)]
        enabled: Option<bool>,
        #[arg(long = "sort-order")]
        sort_order: Option<i32>,
    },
    /// Regenerate the WeChat app menu from enabled commands.
    SyncMenu,
}

fn read_body(json_body: Option<String>, file: Option<String>) -> anyhow::Result<String> {
    if let Some(path) = file {
        Ok(std::fs::read_to_string(&path)?)
    } else if let Some(json) = json_body {
        Ok(json)
    } else {
        anyhow::bail!("Provide --json or -f <file>.")
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let json_output = cli.output == "json";

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);

    match cli.command {
        Commands::Server { url } => {
            commands::server(url.as_deref(), &config_path)?;
        }

        Commands::Login { user, password } => {
            let username = user.unwrap_or_else(|| {
                eprint!("Username: ");
                let mut s = String::new();
                std::io::stdin().read_line(&mut s).unwrap();
                s.trim().to_string()
            });
            let password = password.unwrap_or_else(|| {
                rpassword::prompt_password("Password: ").unwrap_or_default()
            });
            commands::login::login(&username, &password, &config_path).await?;
        }

        Commands::Logout => {
            commands::login::logout(&config_path)?;
        }

        Commands::Whoami => {
            commands::login::whoami(&config_path).await?;
        }

        Commands::Status => {
            commands::status::status(&config_path).await?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Get => {
                commands::wechat::get(&config_path).await?;
            }
            ConfigAction::Set { json_body, file } => {
                let body = read_body(json_body, file)?;
                commands::wechat::set(&body, &config_path).await?;
            }
            ConfigAction::Test { json_body, file } => {
                let body = read_body(json_body, file)?;
                commands::wechat::test(&body, &config_path).await?;
            }
        },

        Commands::Messages { action } => match action {
            MessageAction::List {
                page,
                page_size,
                direction,
                from_user,
                start_time,
                end_time,
            } => {
                commands::message::list(
                    page,
                    page_size,
                    direction.as_deref(),
                    from_user.as_deref(),
                    start_time,
                    end_time,
                    json_output,
                    &config_path,
                )
                .await?;
            }
            MessageAction::Send { what } => match what {
                SendWhat::Text { to_user, content } => {
                    commands::message::send_text(&to_user, &content, &config_path).await?;
                }
                SendWhat::News { to_user, file } => {
                    commands::message::send_news(&to_user, &file, &config_path).await?;
                }
            },
        },

        Commands::Commands { action } => match action {
            CommandAction::List => {
                commands::command::list(json_output, &config_path).await?;
            }
            CommandAction::Update {
                command_id,
                enabled,
                sort_order,
            } => {
                commands::command::update(&command_id, enabled, sort_order, &config_path).await?;
            }
            CommandAction::SyncMenu => {
                commands::command::sync_menu(&config_path).await?;
            }
        },

        Commands::Version => {
            println!("wecomctl v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
