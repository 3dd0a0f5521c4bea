mod cli;
mod estimate;
mod infra;
mod routes;
mod server;

use health_gain::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
