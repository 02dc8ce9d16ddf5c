use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use carprice::metrics::Regression;
use carprice::Dataset;
use carprice_linear::Linear;

mod cli;
mod prompt;

use crate::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset: Dataset<f64> = if cli.builtin {
        carprice_datasets::cars().context("failed to load the bundled dataset")?
    } else {
        carprice_datasets::load(&cli.data)
            .with_context(|| format!("failed to load {}", cli.data.display()))?
    };
    info!("loaded {} samples", dataset.len());

    let mut lin_reg = Linear::new(cli.iterations, cli.alpha)?;
    let model = lin_reg.fit(&dataset).context("training failed")?;
    report(model, &dataset)?;

    let mileage = match cli.mileage {
        Some(mileage) => mileage,
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            prompt::read_mileage(&mut stdin.lock(), &mut stdout.lock())?
        }
    };
    let price = model.predict(mileage)?;
    println!("{}", prompt::estimate_message(mileage, price));

    Ok(())
}

fn report(model: &Linear<f64>, dataset: &Dataset<f64>) -> Result<()> {
    info!("fitted: price = {}", model);

    let diverged = model.params().map_or(true, |params| !params.is_finite());
    if diverged {
        warn!("training diverged, try a smaller --alpha");
        return Ok(());
    }

    let cost = model.cost(dataset)?;
    let r2 = model.predict_batch(dataset.mileage())?.r2(dataset.price())?;
    info!("cost = {}, r2 = {}", cost, r2);
    Ok(())
}
