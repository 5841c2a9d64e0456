//! GIS Aggregator Server
//!
//! Main entry point for the aggregator server

use gis_aggregator::GisAggregatorBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	GisAggregatorBuilder::new().start_server().await
}
