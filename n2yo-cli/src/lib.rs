pub mod command;
pub mod config;
pub mod logging;

use anyhow::{Context, Result};
use n2yo_client::{ApiResponse, Category, N2yoClient};

use command::{Cli, Command};

/// Execute one parsed command line, printing results to stdout
pub async fn run(client: &N2yoClient, cli: Cli) -> Result<()> {
    let location = cli.location();

    match cli.command {
        Command::Tle { norad_ids } => {
            let requests = norad_ids.iter().map(|&id| client.get_tle(id));
            let results = futures::future::join_all(requests).await;

            let mut failed = 0;
            for (id, result) in norad_ids.iter().zip(results) {
                match result {
                    Ok(response) => print_response(&response)?,
                    Err(e) => {
                        tracing::error!("Failed to fetch TLE for {}: {}", id, e);
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{} of {} TLE requests failed", failed, norad_ids.len());
            }
        }
        Command::Positions { norad_id, seconds } => {
            let response = client
                .get_future_positions(norad_id, seconds, location)
                .await
                .context(format!("Failed to fetch positions for {}", norad_id))?;
            print_response(&response)?;
        }
        Command::VisualPasses {
            norad_id,
            days,
            min_visibility_seconds,
        } => {
            let response = client
                .get_visual_passes(norad_id, days, min_visibility_seconds, location)
                .await
                .context(format!("Failed to fetch visual passes for {}", norad_id))?;
            print_response(&response)?;
        }
        Command::RadioPasses {
            norad_id,
            days,
            min_elevation_degrees,
        } => {
            let response = client
                .get_radio_passes(norad_id, days, min_elevation_degrees, location)
                .await
                .context(format!("Failed to fetch radio passes for {}", norad_id))?;
            print_response(&response)?;
        }
        Command::Above {
            search_radius_degrees,
            category_id,
        } => {
            let response = client
                .get_objects_above(search_radius_degrees, category_id, location)
                .await
                .context("Failed to fetch objects above the observer")?;
            print_response(&response)?;
        }
        Command::Categories => print_categories(),
    }

    Ok(())
}

fn print_response(response: &ApiResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&response.body)?);
    if let Some(count) = response.transactions_count {
        tracing::info!("N2YO transactions count: {}", count);
    }
    Ok(())
}

pub fn print_categories() {
    for category in Category::ALL {
        println!("{:>3}  {}", category.id(), category.name());
    }
}
