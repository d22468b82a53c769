use std::env;

use actix_web::{App, HttpServer, middleware, web};
use config::Config;
use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;

use pushkind_faria::db::run_migrations;
use pushkind_faria::models::config::ServerConfig;
use pushkind_faria::nlp::build_extractor;
use pushkind_faria::repository::DieselRepository;
use pushkind_faria::routes;
use pushkind_faria::services::suggestions::seed_default_suggestions;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_path = env::var("APP_CONFIG").unwrap_or_else(|_| "config/default".to_string());

    let settings = Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let server_config = match settings.and_then(|s| s.try_deserialize::<ServerConfig>()) {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load server config: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match run_migrations(&pool) {
        Ok(applied) => log::info!("Applied {applied} pending migrations"),
        Err(e) => {
            log::error!("Failed to run migrations: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);

    // Suggestions are also seeded lazily, so a failure here is not fatal.
    match seed_default_suggestions(&repo) {
        Ok(inserted) => log::info!("Seeded {inserted} default suggestions"),
        Err(e) => log::warn!("Failed to seed default suggestions: {e}"),
    }

    let extractor = build_extractor(server_config.extractor);
    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Starting server at {}:{}", bind_address.0, bind_address.1);

    let repo = web::Data::new(repo);
    let extractor = web::Data::from(extractor);
    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .app_data(extractor.clone())
            .app_data(server_config.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
