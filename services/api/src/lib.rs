mod check;
mod cli;
mod infra;
mod routes;
mod server;

use astra_wellness::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
