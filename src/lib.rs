//! # person-service
//!
//! A CRUD HTTP service for Person records backed by MongoDB.
//!
//! The request pipeline is deliberately linear: decode the JSON body,
//! validate it, map the wire record to its storage form, call the
//! repository, map the result back, respond. Every failure maps to a fixed
//! HTTP status and a stable one-line message.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use person_service::config::Config;
//! use person_service::mapper::PersonMapper;
//! use person_service::repository::MongoPersonRepository;
//! use person_service::routes::router;
//! use person_service::server::Server;
//! use person_service::state::AppState;
//!
//! #[tokio::main]
//! async fn main() -> person_service::Result<()> {
//!     let config = Config::load()?;
//!     person_service::observability::init_tracing(&config)?;
//!
//!     let collection = person_service::database::connect(&config.mongodb).await?;
//!     let state = AppState::new(
//!         Arc::new(MongoPersonRepository::new(collection)),
//!         Arc::new(PersonMapper),
//!     );
//!
//!     Server::new(config).serve(router(state)).await
//! }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod ids;
pub mod mapper;
pub mod models;
pub mod observability;
pub mod repository;
pub mod routes;
pub mod server;
pub mod state;
pub mod validation;

pub use error::{Error, Result};
pub use ids::PersonId;
pub use models::{Person, PersonDocument};
pub use state::AppState;
