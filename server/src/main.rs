mod config;
mod employees;
mod http;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use platform_db::{DatabaseSettings, DbPool, connect};
use platform_obs::{ObsConfig, init_tracing, shutdown_tracing};
use products_hr::{EmployeePayload, EmployeeService, HrService, SeaOrmEmployeeRepository};
use tracing::info;

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "employee-server", version, about = "Employee records service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server.
    Serve(ServeCommand),
    /// Insert demo employees into an empty table.
    Seed,
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

impl From<ServeCommand> for ServeConfig {
    fn from(value: ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(ObsConfig::from_env())?;
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Serve(cmd) => run_server(cmd).await,
        Command::Seed => run_seed().await,
    };
    shutdown_tracing();
    result
}

async fn setup_pool() -> Result<DbPool> {
    let settings = DatabaseSettings::from_env()?;
    let pool = connect(&settings)
        .await
        .context("failed to open database pool")?;
    SeaOrmEmployeeRepository::ensure_table(&pool)
        .await
        .context("failed to prepare employees table")?;
    Ok(pool)
}

fn employee_service(pool: &DbPool) -> HrService {
    HrService::new(Arc::new(SeaOrmEmployeeRepository::new(pool.clone())))
}

async fn run_server(cmd: ServeCommand) -> Result<()> {
    let config = Arc::new(AppConfig::load()?);
    let pool = setup_pool().await?;
    let state = AppState {
        employees: Arc::new(employee_service(&pool)),
        pool,
        config,
    };
    http::serve(cmd.into(), state).await
}

async fn run_seed() -> Result<()> {
    let pool = setup_pool().await?;
    let service = employee_service(&pool);
    if !service.get_all().await?.is_empty() {
        info!("employees table not empty; skipping seed");
        return Ok(());
    }
    for (name, email, department, salary) in [
        ("Ada Lovelace", "ada@example.com", "Engineering", 120_000.0),
        ("Grace Hopper", "grace@example.com", "Engineering", 125_000.0),
        ("Frances Allen", "frances@example.com", "Research", 110_000.0),
    ] {
        let fields = EmployeePayload {
            name: Some(name.into()),
            email: Some(email.into()),
            department: Some(department.into()),
            salary: Some(salary),
        }
        .validate()
        .map_err(|errors| anyhow::anyhow!("invalid seed record {name}: {errors:?}"))?;
        let employee = service.create(fields).await?;
        info!(id = employee.id, name, "seeded employee");
    }
    Ok(())
}
