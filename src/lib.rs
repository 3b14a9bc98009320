//! Computational engines for a room-rental marketplace: point-weighted
//! pricing allocation and weighted application scoring, exposed through a
//! small HTTP service and CLI.

pub mod config;
pub mod engines;
pub mod error;
pub mod telemetry;

mod cli;
mod demo;
mod routes;
mod server;

use error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
