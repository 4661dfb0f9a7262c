// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! TrainMate dashboard CLI
//!
//! Runs one full dashboard load cycle against the configured backend
//! (sync the four collections, aggregate, print the summary), exercising
//! the library end to end the way the home page would.

use trainmate_core::{
    config::Config,
    services::{ApiClient, AuthSession, CollectionSync, DashboardService, Freshness},
    store::LocalStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(api_url = %config.api_url, "Starting TrainMate dashboard load");

    let store = LocalStore::open(&config.cache_dir)?;
    let auth = AuthSession::new(&config);
    let api = ApiClient::new(&config, auth)?;
    let sync = CollectionSync::new(api.clone(), store);
    let dashboard = DashboardService::new(api, sync);

    let summary = dashboard.load().await?;

    println!(
        "Workouts: {} ({})",
        summary.workouts.items.len(),
        freshness_label(summary.workouts.freshness)
    );
    println!(
        "Catalog:  {} categories ({})",
        summary.catalog.items.len(),
        freshness_label(summary.catalog.freshness)
    );
    println!(
        "Trainings: {} ({}), Coaches: {} ({})",
        summary.trainings.items.len(),
        freshness_label(summary.trainings.freshness),
        summary.coaches.items.len(),
        freshness_label(summary.coaches.freshness)
    );

    println!(
        "\nLast 30 days: {:.0} kcal over {:.0} min, {} active days, {} rest days",
        summary.last_30_days.calories,
        summary.last_30_days.minutes,
        summary.last_30_days.active_days,
        summary.rest_days
    );
    match &summary.last_30_days.comparison {
        Some(comparison) => {
            let pct = comparison
                .calories_pct_change
                .map(|p| format!("{p:+.1}%"))
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "vs prior 30 days: {:+.0} kcal ({}), {:+.0} min",
                comparison.calories_delta, pct, comparison.minutes_delta
            );
        }
        None => println!("vs prior 30 days: no prior data"),
    }

    if !summary.rankings.top_overall.is_empty() {
        println!("\nTop exercises:");
        for (rank, exercise) in summary.rankings.top_overall.iter().enumerate() {
            println!("  {}. {} ({}x)", rank + 1, exercise.name, exercise.count);
        }
    }

    println!("\nWater today: {} ml", summary.water_today_ml);
    println!(
        "Challenges: {}/{} complete",
        summary.challenges.iter().filter(|c| c.state).count(),
        summary.challenges.len()
    );

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trainmate_core=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}

fn freshness_label(freshness: Freshness) -> &'static str {
    match freshness {
        Freshness::Fresh => "fresh",
        Freshness::Stale => "stale",
    }
}
