use cost_rebalance::{CostModel, DatasetReader, Error, Label};
use log::{error, info};
use std::env;

const USAGE: &str = "Usage: cost-rebalance-cli <dataset.csv[.gz]> <cost_recession_predicted_growth> <cost_growth_predicted_recession>";

fn parse_cost(name: &str, value: &str) -> Result<f64, Error> {
    value
        .parse::<f64>()
        .map_err(|e| Error::ParserError(format!("Invalid {} '{}': {}", name, value, e)))
}

fn run(args: &[String]) -> Result<(), Error> {
    let [dataset_path, cost_recession_predicted_growth, cost_growth_predicted_recession] = args
    else {
        return Err(Error::ParserError(USAGE.to_string()));
    };

    let cost_model = CostModel::new(
        parse_cost(
            "cost_recession_predicted_growth",
            cost_recession_predicted_growth,
        )?,
        parse_cost(
            "cost_growth_predicted_recession",
            cost_growth_predicted_recession,
        )?,
    )?;

    info!("Reading dataset from {}", dataset_path);
    let dataset = DatasetReader::read_dataset_from_path(dataset_path)?;
    let counts = dataset.class_counts();

    println!("{}", cost_model);
    println!("Cost matrix: {:?}", cost_model.cost_matrix());
    for label in Label::ALL {
        println!("{} count: {}", label, counts.get(label));
    }

    for label in Label::ALL {
        println!(
            "{} cost vector (FP, FN, TP, TN): {:?}",
            label,
            cost_model.cost_vector_for(label)
        );
    }

    println!(
        "Class costs (Recession: {} Growth: {})",
        cost_model.cost_recession(),
        cost_model.cost_growth()
    );
    println!(
        "Weights (Recession: {:.4} Growth: {:.4})",
        cost_model.recession_weight(dataset.labels())?,
        cost_model.growth_weight(&dataset)?
    );

    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
