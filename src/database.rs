//! MongoDB connection setup
//!
//! Connecting and pinging happen once at startup; an unreachable database is
//! process-fatal. Connection-level timeouts live here in the client options,
//! not in the request pipeline.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::config::MongoConfig;
use crate::error::Result;
use crate::models::PersonDocument;

/// Connect to MongoDB, verify the server is reachable, and return the typed
/// Person collection handle.
pub async fn connect(config: &MongoConfig) -> Result<Collection<PersonDocument>> {
    let timeout = Duration::from_secs(config.connect_timeout_secs);

    let mut options = ClientOptions::parse(&config.uri).await?;
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let client = Client::with_options(options)?;
    let database = client.database(&config.database);

    database.run_command(doc! { "ping": 1 }).await?;

    tracing::info!(
        database = %config.database,
        collection = %config.collection,
        "connected to mongodb"
    );

    Ok(database.collection(&config.collection))
}
