use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "towersort")]
#[command(version)]
#[command(
    about = "Register escape tower components, sort them three ways and search them by name",
    long_about = None
)]
struct Cli {
    /// Log filter directive (e.g. `debug`, `towersort=trace`); logs go to stderr
    #[arg(long, env = "TOWERSORT_LOG", default_value = "warn")]
    log: String,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut driver = towersort::Driver::new(stdin.lock(), io::stdout());

    if let Err(e) = driver.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
