//! Schema CLI, e.g. `DATABASE_URL=sqlite://human_resources.db?mode=rwc cargo run -p migration -- up`

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
