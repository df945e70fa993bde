use std::path::PathBuf;

use grocer::GrocerError;
use grocer::config::fetch_config;
use grocer::models::order::Order;
use grocer::order_details::OrderDetails;
use tracing::info;

fn main() -> Result<(), GrocerError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let app_config = fetch_config()?;

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| GrocerError::Config("usage: grocer <order.json>".to_string()))?;

    if let Some(levels) = app_config.storefront.tip_levels()? {
        info!("{}", levels.describe(&app_config.storefront.currency));
    }

    let contents = std::fs::read_to_string(&path)?;
    let order: Order = serde_json::from_str(&contents)?;
    info!(order_id = order.id, lines = order.lines.len(), "loaded order");

    let details = OrderDetails::new(order);
    println!("{}", serde_json::to_string_pretty(&details.view())?);

    Ok(())
}
