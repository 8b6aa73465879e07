mod cli;
mod infra;
mod report;
mod routes;
mod server;

use ev_policy::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
