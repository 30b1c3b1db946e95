use std::sync::Arc;

use sqlx::MySqlPool;
use tracing::{info, warn};

use super::{config::Config, database::init_pool};

pub struct AppState {
    pub config: Config,
    pub pool: MySqlPool,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let pool = init_pool(&config);
        match pool.acquire().await {
            Ok(_) => info!(
                "Connected to MySQL at {}:{}",
                config.mysql_host, config.mysql_port
            ),
            Err(e) => warn!("MySQL not reachable at startup: {e}"),
        }

        Arc::new(Self { config, pool })
    }
}
