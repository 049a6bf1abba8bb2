use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "http://localhost:8000")]
    base_url: String,

    #[arg(long, default_value_t = 7)]
    days_before: u32,

    #[arg(long, default_value_t = 0)]
    days_after: u32,

    /// Baseline case count per report
    #[arg(long, default_value_t = 120)]
    cases: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let outcome =
        seeder::seed(&args.base_url, args.days_before, args.days_after, args.cases).await?;

    println!("Submitted: {}", outcome.submitted);
    println!("Failed: {}", outcome.failed);

    Ok(())
}
