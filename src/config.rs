//! Command line and environment configuration.
//!
//! A `.env` file is loaded before parsing, so every flag below can also be
//! set there.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DATABASE_URL` | clinic.db | SQLite database file |
//! | `CLINIC_HOST` | 127.0.0.1 | Host to bind |
//! | `CLINIC_PORT` | 8080 | Port to bind |
//! | `CLINIC_POOL_SIZE` | 8 | Maximum pooled connections |
//! | `CLINIC_LOG_LEVEL` | info | Log filter when `RUST_LOG` is unset |
//! | `CLINIC_IMPORT_FILE` | ../patients.csv | Source file for `import` |

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "clinicdesk")]
#[command(about = "Record store API for a small clinic")]
pub struct Config {
    /// SQLite database file.
    #[arg(long, env = "DATABASE_URL", default_value = "clinic.db")]
    pub database_url: String,

    /// Host address to bind to.
    #[arg(long, env = "CLINIC_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "CLINIC_PORT", default_value = "8080")]
    pub port: u16,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "CLINIC_POOL_SIZE", default_value = "8")]
    pub pool_size: u32,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CLINIC_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP server (the default).
    Serve,

    /// Append every row of a patients CSV file in one transaction.
    Import {
        /// CSV file with the header `name,dob,address,phone,email`.
        #[arg(env = "CLINIC_IMPORT_FILE", default_value = "../patients.csv")]
        path: PathBuf,
    },

    /// Create a staff account (users cannot be created over HTTP).
    AddUser {
        username: String,
        password: String,
        /// Free-text role such as `doctor` or `receptionist`.
        role: String,
    },
}

impl Config {
    pub fn socket_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.pool_size == 0 {
            errors.push("Pool size cannot be 0".to_string());
        }

        if self.database_url.trim().is_empty() {
            errors.push("Database URL cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("clinicdesk").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_subcommand_means_serve() {
        let config = parse(&["--database-url", "test.db", "--port", "9000"]);
        assert!(config.command.is_none());
        assert_eq!(config.socket_addr().1, 9000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn import_takes_a_path() {
        let config = parse(&["--database-url", "test.db", "import", "/tmp/patients.csv"]);
        match config.command {
            Some(Command::Import { path }) => assert_eq!(path, PathBuf::from("/tmp/patients.csv")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn add_user_takes_three_values() {
        let config = parse(&["--database-url", "test.db", "add-user", "drhouse", "secret", "doctor"]);
        match config.command {
            Some(Command::AddUser { username, role, .. }) => {
                assert_eq!(username, "drhouse");
                assert_eq!(role, "doctor");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let config = parse(&["--database-url", "test.db", "--pool-size", "0"]);
        let errors = config.validate().unwrap_err();
        assert_eq!(errors, vec!["Pool size cannot be 0".to_string()]);
    }
}
