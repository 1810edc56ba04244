use anyhow::Context;

use stockroom_cli::DemoConfig;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = DemoConfig::from_env()?;
    let as_of = config.as_of_or_now();

    let run = stockroom_cli::run(&config.location, as_of).context("failed to stock warehouse")?;

    for notification in &run.notifications {
        println!("{notification}");
    }
    print!("{}", run.report);

    Ok(())
}
