use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;

#[derive(Parser)]
#[command(name = "gauge")]
#[command(about = "A small expression language for dimensioned calculations.")]
#[command(
    long_about = "Gauge evaluates single-line expressions with arithmetic, lengths in mm, rounding-to-multiple operators, comparisons, string slicing, boolean logic, and conditionals.\nThe expression is read from the argument, or from stdin when no argument is given."
)]
#[command(version)]
struct Cli {
    /// Expression to evaluate (reads stdin when omitted)
    ///
    /// Examples:
    ///   gauge '1 + 2 * 3'
    ///   gauge '210mm ~ 50'
    ///   gauge 'if 3 > 2 then "yes" else "no"'
    expression: Option<String>,

    /// Print the result as JSON (an absent result prints null)
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let expression = match cli.expression {
        Some(expression) => expression,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read expression from stdin")?;
            buffer
        }
    };
    let expression = expression.trim_end_matches('\n');

    tracing::debug!(expression, "evaluating");

    let result = gauge::evaluate(expression)
        .with_context(|| format!("failed to evaluate {:?}", expression))?;

    if cli.json {
        println!("{}", serde_json::json!({ "result": result }));
    } else if let Some(value) = result {
        println!("{}", value);
    }

    Ok(())
}
