//! List the top-level regions, then the first page of attractions in Seoul.
//!
//! Reads `NEXT_PUBLIC_TOUR_API_KEY` or `TOUR_API_KEY` from `.env` or the environment.
//!
//! ```bash
//! cargo run --example area_list
//! ```

use std::time::Duration;

use tour_api_sdk::prelude::*;

#[tokio::main]
async fn main() -> Result<(), TourApiError> {
    dotenvy::dotenv().ok();

    let client = TourClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let regions = client.areas().codes(&AreaCodeParams::default()).await?;
    for region in &regions {
        println!("{:>3}  {}", region.code, region.name);
    }

    let seoul = client
        .listings()
        .area_based(&AreaBasedListParams {
            area_code: Some("1".to_string()),
            content_type: Some(ContentType::Attraction),
            num_of_rows: Some(10),
            arrange: Some(Arrange::Views),
            ..Default::default()
        })
        .await?;

    println!("\n{} attractions in Seoul, first page:", seoul.total_count);
    for item in &seoul.items {
        println!(
            "  [{}] {} {}",
            item.content_id,
            item.title,
            item.address.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
