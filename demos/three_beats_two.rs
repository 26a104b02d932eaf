use dicedist::defs::{d6, roll};
use dicedist::{build_distribution, chance_to_beat_distribution, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let two = build_distribution(&roll(2, &d6()))?;
    let three = build_distribution(&roll(3, &d6()))?;
    let chance = chance_to_beat_distribution(&three, &two);

    println!("Odds a 3d6 will beat a 2d6: {:.2}%", chance * 100.0);
    Ok(())
}
