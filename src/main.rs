use std::process::ExitCode;

use tracing::{debug, info};

use memlimit::system::DefaultHost;
use memlimit::{Config, LimitResolver};

fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;
    memlimit::logging::init(&config.logging)?;

    info!("memlimit {}", memlimit::VERSION);
    config.log_summary();

    let resolver = LimitResolver::<DefaultHost>::default();
    debug!(
        "Probing {} then {}",
        resolver.v2_path().display(),
        resolver.v1_path().display()
    );

    match resolver.resolve() {
        Ok(limit) => {
            println!("{}", config.output.format.render(&limit));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("memlimit: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
