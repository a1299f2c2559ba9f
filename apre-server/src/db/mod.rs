//! Database Module
//!
//! Owns the MongoDB client and the report queries run against it.
//!
//! - [`MongoService`] - pooled client + database handle
//! - [`ReportStore`] - the query seam used by HTTP handlers
//! - [`MongoReportStore`] - `ReportStore` backed by aggregation pipelines

mod documents;
pub mod pipelines;
pub mod reports;
pub mod store;

pub use reports::MongoReportStore;
pub use store::ReportStore;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use thiserror::Error;

use crate::core::Config;

/// Database error types
#[derive(Debug, Error)]
pub enum DbError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Failed to decode {collection} document: {source}")]
    Decode {
        collection: &'static str,
        #[source]
        source: mongodb::bson::de::Error,
    },
}

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;

/// Database service, owns the MongoDB client
///
/// `Client` is internally reference counted and pools connections, so the
/// service is cheap to clone into every request.
#[derive(Clone, Debug)]
pub struct MongoService {
    client: Client,
    db: Database,
}

impl MongoService {
    /// Parse the connection string and select the configured database
    ///
    /// The driver connects lazily; the first query (or [`ping`](Self::ping))
    /// surfaces an unreachable server.
    pub async fn connect(config: &Config) -> DbResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_url).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let db = client.database(&config.mongo_database);

        tracing::info!(database = %config.mongo_database, "MongoDB client created");

        Ok(Self { client, db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Round-trip a `ping` command
    pub async fn ping(&self) -> DbResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
