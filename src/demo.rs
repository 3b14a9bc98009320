use std::fs::File;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::config::AppConfig;
use crate::engines::pricing::{rooms_from_reader, FeaturePointTable, PricingEngine};
use crate::engines::scoring::{Application, ScoringEngine};
use crate::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct PriceArgs {
    /// Rooms CSV export with `Room Number,Name,Feature` headers
    #[arg(long)]
    pub(crate) rooms_csv: PathBuf,
    /// Total monthly price for the property
    #[arg(long)]
    pub(crate) total_price: f64,
    /// Override the configured service fee rate
    #[arg(long)]
    pub(crate) service_fee_rate: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Rental application as a JSON document
    #[arg(long)]
    pub(crate) application_json: PathBuf,
}

pub(crate) fn run_price(args: PriceArgs) -> Result<(), AppError> {
    let PriceArgs {
        rooms_csv,
        total_price,
        service_fee_rate,
    } = args;

    let config = AppConfig::load()?;
    let fee_rate = service_fee_rate.unwrap_or(config.marketplace.service_fee_rate);

    let file = File::open(rooms_csv)?;
    let rooms = rooms_from_reader(file)?;

    let engine = PricingEngine::new(FeaturePointTable::standard(), fee_rate);
    let allocation = engine.allocate(&rooms, total_price);

    println!("Pricing allocation for total price {total_price:.2}");
    println!(
        "  total points: {}, price per point: {:.2}, service fee rate: {:.2}%",
        allocation.total_points,
        allocation.price_per_point,
        fee_rate * 100.0
    );
    for room in &allocation.rooms {
        println!(
            "  #{:<3} {:<20} {:<26} {:>3} pts  price {:>10.2}  tenant total {:>10.2}",
            room.room_number, room.name, room.feature, room.points, room.computed_price,
            room.tenant_total
        );
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(args.application_json)?;
    let application: Application = serde_json::from_str(&raw)?;

    let outcome = ScoringEngine::new().score(&application);

    println!(
        "Compatibility score on {}: {}/100 ({})",
        Local::now().date_naive(),
        outcome.score.raw_score,
        outcome.score.label.label()
    );
    for component in &outcome.components {
        println!(
            "  {:<22} {:>2}/{:<2}  {}",
            format!("{:?}", component.category),
            component.earned,
            component.max,
            component.notes
        );
    }
    if !outcome.concerns.is_empty() {
        println!("Concerns:");
        for concern in &outcome.concerns {
            println!("  - {}", concern.summary());
        }
    }

    Ok(())
}
