use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::notifier::{Notifier, SmtpNotifier};
use crate::repository::submission::DieselLedgerRepository;
use crate::routes::admin::api_v1_submissions;
use crate::routes::contact::contact_relay;
use crate::routes::quote::price_quote_relay;
use crate::routes::send::send_relay;

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod notifier;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite submission ledger.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;
    let repo = DieselLedgerRepository::new(pool);

    // An unusable SMTP host fails here rather than on the first submission.
    let notifier: Arc<dyn Notifier> = Arc::new(
        SmtpNotifier::new(&server_config)
            .map_err(|e| std::io::Error::other(format!("Failed to build SMTP notifier: {e}")))?,
    );

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(contact_relay)
                    .service(price_quote_relay)
                    .service(send_relay)
                    .service(api_v1_submissions),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(notifier.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
