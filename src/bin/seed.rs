use std::path::PathBuf;

use clap::Parser;

use people_search_api::{config, database};

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Bulk-load person records from a CSV file")]
#[command(version)]
struct Args {
    #[arg(help = "Path to the headerless CSV file")]
    file: PathBuf,

    #[arg(long, help = "Truncate the people table before loading")]
    replace: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = config::config();

    let pool = database::connect_pool(&config.database).await?;
    database::run_migrations(&pool).await?;

    let count = database::loader::load_people_csv(&pool, &args.file, args.replace).await?;
    println!("Loaded {} person records from {}", count, args.file.display());

    Ok(())
}
