use std::sync::Arc;

use anyhow::Result;
use foodboard::api::FoodApiClient;
use foodboard::config::Config;
use foodboard::dashboard::DashboardService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    // Environment variable wins over the config file
    let base_url = std::env::var("FOODBOARD_API_URL").unwrap_or_else(|_| config.api.base_url.clone());

    let client = FoodApiClient::new(base_url);
    let service = DashboardService::new(Arc::new(client));

    foodboard::ui::run_app(service, &config).await
}
