//! Headless simulation entry point.
use anyhow::Result;
use dungeon_sim::{SimConfig, build_runtime, render, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    tracing::info!(?config, "starting simulation");

    let mut runtime = build_runtime(&config)?;
    print!("{}", render(&runtime));

    let report = run(&mut runtime, config.turns);

    println!();
    print!("{}", render(&runtime));
    println!(
        "rounds: {}  turns: {}  player alive: {}",
        report.rounds, report.turns, report.player_alive
    );
    println!("survivors: {}", report.survivors.join(", "));
    Ok(())
}
