use anyhow::Result;
use dicetown::config::AppConfig;
use std::collections::BTreeMap;

fn main() -> Result<()> {
    // Configure logging (optional)
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };

    let best = dicetown::train(&config)?;
    println!(
        "Most fit organism won {} of {} final-generation games.",
        best.wins,
        config.trainer.population_size - 1
    );

    let chromosome: BTreeMap<String, f64> = best
        .chromosome
        .iter()
        .map(|(kind, weight)| (kind.to_string(), weight))
        .collect();
    println!("{}", serde_json::to_string_pretty(&chromosome)?);
    Ok(())
}
