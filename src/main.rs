use std::sync::Arc;

use person_service::config::Config;
use person_service::mapper::PersonMapper;
use person_service::repository::MongoPersonRepository;
use person_service::routes::router;
use person_service::server::Server;
use person_service::state::AppState;
use person_service::{database, observability};

#[tokio::main]
async fn main() -> person_service::Result<()> {
    let config = Config::load()?;

    observability::init_tracing(&config)?;

    tracing::info!("Starting {}", config.service.name);

    let collection = database::connect(&config.mongodb).await?;

    let state = AppState::new(
        Arc::new(MongoPersonRepository::new(collection)),
        Arc::new(PersonMapper),
    );

    Server::new(config).serve(router(state)).await
}
