//! Dependency Inversion Principle.
//!
//! The legacy service builds its own `MySqlDatabase`, so switching databases
//! means editing the service. The fixed service only knows the `Database`
//! trait and is handed an implementation by whoever constructs it.

use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

pub mod legacy {
    #[derive(Debug, Clone, Copy, Default)]
    pub struct MySqlDatabase;

    impl MySqlDatabase {
        pub fn connect(&self) -> &'static str {
            tracing::info!("opening MySQL connection");
            "Connecting to MySQL Database..."
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct DatabaseService {
        db: MySqlDatabase,
    }

    impl DatabaseService {
        pub fn new() -> Self {
            Self { db: MySqlDatabase }
        }

        pub fn connect_database(&self) -> &'static str {
            self.db.connect()
        }
    }
}

pub mod fixed {
    pub trait Database {
        /// Opens a connection and returns the confirmation line.
        fn connect(&self) -> &'static str;
    }

    impl<D: Database + ?Sized> Database for Box<D> {
        fn connect(&self) -> &'static str {
            (**self).connect()
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct MySqlDatabase;

    impl Database for MySqlDatabase {
        fn connect(&self) -> &'static str {
            tracing::info!("opening MySQL connection");
            "Connecting to MySQL Database..."
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct PostgresDatabase;

    impl Database for PostgresDatabase {
        fn connect(&self) -> &'static str {
            tracing::info!("opening Postgres connection");
            "Connecting to Postgres Database..."
        }
    }

    pub struct DatabaseService<D: Database> {
        db: D,
    }

    impl<D: Database> DatabaseService<D> {
        pub fn new(db: D) -> Self {
            Self { db }
        }

        pub fn connect_database(&self) -> &'static str {
            self.db.connect()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DatabaseKind {
    #[serde(rename = "mysql")]
    #[cfg_attr(feature = "cli", value(name = "mysql"))]
    MySql,
    #[serde(rename = "postgres")]
    #[cfg_attr(feature = "cli", value(name = "postgres"))]
    Postgres,
}

impl DatabaseKind {
    pub const ALL: [DatabaseKind; 2] = [DatabaseKind::MySql, DatabaseKind::Postgres];

    pub fn connector(self) -> Box<dyn fixed::Database> {
        match self {
            DatabaseKind::MySql => Box::new(fixed::MySqlDatabase),
            DatabaseKind::Postgres => Box::new(fixed::PostgresDatabase),
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseKind::MySql => f.write_str("mysql"),
            DatabaseKind::Postgres => f.write_str("postgres"),
        }
    }
}

pub struct DipDemo {
    databases: Vec<DatabaseKind>,
}

impl DipDemo {
    pub fn new(databases: Vec<DatabaseKind>) -> Self {
        Self { databases }
    }
}

impl Demonstration for DipDemo {
    fn principle(&self) -> Principle {
        Principle::Dip
    }

    fn run_legacy(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(
            requested = ?self.databases,
            "legacy DatabaseService is hard-wired to MySQL"
        );
        let service = legacy::DatabaseService::new();
        writeln!(out, "{}", service.connect_database())?;
        Ok(())
    }

    fn run_fixed(&self, out: &mut dyn Write) -> Result<()> {
        for kind in &self.databases {
            tracing::debug!(database = %kind, "injecting database");
            let service = fixed::DatabaseService::new(kind.connector());
            writeln!(out, "{}", service.connect_database())?;
        }
        Ok(())
    }
}
