//! Battle console client binary.
//!
//! Composition root that assembles:
//! 1. Configuration from `.env` and the process environment
//! 2. File logging
//! 3. The encounter runtime with the demo roster
//! 4. The console loop reading intents from stdin
//!
//! # Examples
//!
//! ```bash
//! BATTLE_SEED=7 BATTLE_DAMAGE_STRATEGY=rules cargo run -p battle-client
//! ```

mod app;
mod config;
mod input;
mod logging;
mod roster;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use battle_core::Outcome;
use battle_runtime::{BattleRuntime, RuntimeConfig};

use app::ConsoleApp;
use config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let client_config = ClientConfig::from_env();
    let mut runtime_config = RuntimeConfig::from_env()?;

    let _guard = logging::setup_logging(&client_config.session_id)?;

    let seed = *runtime_config.seed.get_or_insert_with(clock_seed);
    tracing::info!(
        seed,
        strategy = %runtime_config.encounter.strategy,
        "starting encounter"
    );

    let runtime = BattleRuntime::builder()
        .config(runtime_config)
        .player(roster::knight())
        .enemy(roster::slime())
        .build()?;

    let input_rx = input::spawn_reader(client_config.input_buffer);
    let app = ConsoleApp::new(runtime.handle(), client_config, input_rx);

    match app.run().await? {
        Some(Outcome::Victory) => println!("\nYou won. (seed {seed})"),
        Some(Outcome::Defeat) => println!("\nYou lost. (seed {seed})"),
        None => println!("\nYou fled. (seed {seed})"),
    }

    runtime.shutdown().await?;
    tracing::info!("Client shutdown complete");
    Ok(())
}

/// Seed used when `BATTLE_SEED` is unset; logged so the run can be replayed.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
