use std::error::Error;

use carprice::metrics::Regression;
use carprice_linear::Linear;

fn main() -> Result<(), Box<dyn Error>> {
    // load the bundled car price dataset
    let dataset = carprice_datasets::cars()?;

    // mileage is not rescaled, so the learning rate has to be tiny
    let mut lin_reg = Linear::new(100, 1e-11)?;
    let model = lin_reg.fit(&dataset)?;

    println!("Model: {}", model);
    println!("Cost: {}", model.cost(&dataset)?);
    println!(
        "R2: {}",
        model.predict_batch(dataset.mileage())?.r2(dataset.price())?
    );

    Ok(())
}
