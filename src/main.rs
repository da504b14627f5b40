use std::io;

use rideshare::config::Config;
use rideshare::console::Console;
use rideshare::engine::Engine;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    // logs go to stderr so they don't interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .init();

    let mut engine = Engine::new(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(&mut engine, stdin.lock(), stdout.lock(), config.output).run()?;

    Ok(())
}
