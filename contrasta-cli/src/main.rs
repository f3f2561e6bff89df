//! Contrasta CLI host
//!
//! Loads a JSON dataset once, runs one analysis, prints the result as JSON.
//! Commands:
//! - categories: list the group labels available for comparison
//! - ttest <group1> <group2>: pooled two-sample t-test
//! - anova: one-way ANOVA across all groups
//! - regression <x_column> <y_column>: OLS over two dataset columns
//! - regression-points <x1,x2,..> <y1,y2,..>: OLS over user-entered points
//!
//! Environment:
//! - CONTRASTA_DATASET: dataset path (default dataset.json)
//! - CONTRASTA_CATEGORY_COLUMN: categorical column (default transport_mode)
//! - CONTRASTA_RESPONSE_COLUMN: measurement column (default delivery_days)

use contrasta_core::{parse_series, ContrastaError, Dataset};
use contrasta_stats::{Analyzer, RegressionInput};
use serde_json::json;
use std::env;
use std::fs;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

const DEFAULT_DATASET: &str = "dataset.json";
const DEFAULT_CATEGORY_COLUMN: &str = "transport_mode";
const DEFAULT_RESPONSE_COLUMN: &str = "delivery_days";

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn load_analyzer() -> Result<Analyzer, String> {
    let path = env_or("CONTRASTA_DATASET", DEFAULT_DATASET);
    let category_column = env_or("CONTRASTA_CATEGORY_COLUMN", DEFAULT_CATEGORY_COLUMN);
    let response_column = env_or("CONTRASTA_RESPONSE_COLUMN", DEFAULT_RESPONSE_COLUMN);

    let text =
        fs::read_to_string(&path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    let dataset = Dataset::from_json(&text, &category_column).map_err(|e| e.to_string())?;

    info!(
        rows = dataset.len(),
        categories = dataset.categories().len(),
        %path,
        "dataset loaded"
    );

    Ok(Analyzer::new(Arc::new(dataset), response_column))
}

fn parse_point_list(arg: &str) -> Result<Vec<f64>, ContrastaError> {
    let tokens: Vec<&str> = arg.split(',').collect();
    parse_series(&tokens)
}

fn run(args: &[&str]) -> Result<serde_json::Value, String> {
    let engine_err = |e: ContrastaError| {
        serde_json::to_string(&json!({ "code": e.code(), "message": e.to_string() }))
            .unwrap_or_else(|_| e.to_string())
    };

    match args {
        ["categories"] => {
            let analyzer = load_analyzer()?;
            Ok(json!({ "categories": analyzer.categories() }))
        }
        ["ttest", group1, group2] => {
            let analyzer = load_analyzer()?;
            let result = analyzer.run_t_test(group1, group2).map_err(engine_err)?;
            Ok(serde_json::to_value(result).map_err(|e| e.to_string())?)
        }
        ["anova"] => {
            let analyzer = load_analyzer()?;
            let result = analyzer.run_anova().map_err(engine_err)?;
            Ok(serde_json::to_value(result).map_err(|e| e.to_string())?)
        }
        ["regression", x_column, y_column] => {
            let analyzer = load_analyzer()?;
            let result = analyzer
                .run_regression(RegressionInput::Columns {
                    x: x_column.to_string(),
                    y: y_column.to_string(),
                })
                .map_err(engine_err)?;
            Ok(serde_json::to_value(result).map_err(|e| e.to_string())?)
        }
        ["regression-points", xs, ys] => {
            let analyzer = load_analyzer()?;
            let x = parse_point_list(xs).map_err(engine_err)?;
            let y = parse_point_list(ys).map_err(engine_err)?;
            let result = analyzer
                .run_regression(RegressionInput::Points { x, y })
                .map_err(engine_err)?;
            Ok(serde_json::to_value(result).map_err(|e| e.to_string())?)
        }
        _ => Err(format!(
            "Usage: contrasta <categories | ttest <g1> <g2> | anova | \
             regression <xcol> <ycol> | regression-points <x,..> <y,..>>\n\
             got: {:?}",
            args
        )),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match run(&args) {
        Ok(value) => {
            match serde_json::to_string_pretty(&value) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
