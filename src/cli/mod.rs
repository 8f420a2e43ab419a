use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::{DEFAULT_BIND_ADDRESS, DEFAULT_DATABASE_URL};
use commands::{init_database, migrate_and_serve, serve};

#[derive(Parser)]
#[command(name = "sitegear")]
#[command(about = "Worksite equipment tracker: web server and database tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Database URL
        ///
        /// Examples:
        ///   sqlite://sitegear.db?mode=rwc (relative file, created if missing)
        ///   sqlite:///absolute/path/to/database.sqlite
        #[arg(short, long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
        database_url: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:5000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,
    },
    /// Initialize the database using migrations
    InitDb {
        /// Database URL
        #[arg(short, long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
        database_url: String,
    },
    /// Apply pending migrations, then start the web server
    MigrateAndServe {
        /// Database URL
        #[arg(short, long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
        database_url: String,

        /// Bind address for the web server
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { database_url, bind_address } => {
                serve(&database_url, &bind_address).await?;
            }
            Commands::InitDb { database_url } => {
                init_database(&database_url).await?;
            }
            Commands::MigrateAndServe { database_url, bind_address } => {
                migrate_and_serve(&database_url, &bind_address).await?;
            }
        }
        Ok(())
    }
}
