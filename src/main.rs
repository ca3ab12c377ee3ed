
use std::io;

use clap::{Parser, Subcommand};
use profile_admin::config::{AdminConfig, ConfigError};
use profile_admin::net::{ApiError, ProfileApi};
use profile_admin::pages::dashboard::DashboardPage;
use profile_admin::render::{render_cities, render_json, render_table};
use profile_admin::routes::{Navigator, Route};
use profile_admin::shell;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("profile API error: {0}")]
    Api(#[from] ApiError),
    #[error("failed to delete profile {id}")]
    DeleteFailed { id: String },
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "profile-admin", about = "Admin client for the profiles API")]
struct Cli {
    /// Profiles API base URL.
    #[arg(long, env = "PROFILE_API_BASE_URL")]
    base_url: Option<String>,

    /// Admin UI base URL used for add/edit links.
    #[arg(long, env = "PROFILE_ADMIN_BASE_URL")]
    admin_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch profiles and print the filtered table.
    List {
        /// Case-insensitive name substring.
        #[arg(long, default_value = "")]
        search: String,
        /// Exact city match.
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the city filter options.
    Cities,
    /// Delete a profile by id.
    Delete { id: String },
    /// Print where to add a profile.
    Add,
    /// Print where to edit a profile.
    Edit { id: String },
    /// Interactive dashboard.
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config =
        AdminConfig::from_env()?.with_overrides(cli.base_url.as_deref(), cli.admin_url.as_deref())?;
    tracing::debug!(api = %config.api_base_url, admin = ?config.admin_base_url, "config loaded");

    let nav = Navigator::new(config.admin_base_url.clone());
    match cli.command {
        Command::Add => {
            println!("{}", nav.resolve(&Route::AddProfile));
            Ok(())
        }
        Command::Edit { id } => {
            println!("{}", nav.resolve(&Route::EditProfile(id)));
            Ok(())
        }
        Command::List { search, city, json } => {
            let mut page = DashboardPage::new(api(&config)?);
            page.mount().await;
            let state = page.state_mut();
            state.set_search(search);
            state.set_city_filter(city);

            let rows = page.state().filtered();
            if json {
                println!("{}", render_json(&rows)?);
            } else {
                print!("{}", render_table(&rows));
            }
            Ok(())
        }
        Command::Cities => {
            let mut page = DashboardPage::new(api(&config)?);
            page.mount().await;
            print!("{}", render_cities(&page.state().cities(), ""));
            Ok(())
        }
        Command::Delete { id } => {
            let mut page = DashboardPage::new(api(&config)?);
            let notice = page.delete(&id).await;
            println!("! {notice}");
            if notice.is_success() { Ok(()) } else { Err(CliError::DeleteFailed { id }) }
        }
        Command::Dashboard => {
            let mut page = DashboardPage::new(api(&config)?);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell::run(&mut page, &nav, stdin.lock(), &mut stdout).await?;
            Ok(())
        }
    }
}

fn api(config: &AdminConfig) -> Result<ProfileApi, CliError> {
    Ok(ProfileApi::new(&config.api_base_url, config.timeouts)?)
}

/// Logs go to stderr so table and JSON output on stdout stay clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
