use crate::config::Config;
use crate::db::{init_db, Database};
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod geos;
mod responses;
mod router;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Environment and logging
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Startup failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Open the store and apply the schema; no serving without it
    let db = Database::new(config.database_url.as_str());
    if let Err(e) = init_db(&db) {
        error!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // `zone_insight seed` loads the showcase zone and exits
    if std::env::args().nth(1).as_deref() == Some("seed") {
        match db::seed::seed_showcase(&db) {
            Ok(report) => info!(
                "Seeded {} properties for {}.",
                report.inserted, report.zone_name
            ),
            Err(e) => {
                error!("Seeding failed: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // 3️⃣ Start the server
    let addr = config.socket_addr();
    info!("Backend API running on http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, passing db handle into closure
    let result = server.serve(move |req, _info| handle(req, &db));

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
