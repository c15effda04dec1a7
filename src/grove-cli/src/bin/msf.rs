//! msf - compute a minimum spanning forest from a delimited edge list.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package grove-cli --bin msf -- edges.csv
//! cargo run --package grove-cli --bin msf -- edges.csv --scale 1000 --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use common_error::GroveResult;
use grove_cli::{forest_to_json, load_graph, print_forest, print_summary};
use grove_core::minimum_spanning_forest;

/// msf CLI.
#[derive(Parser, Debug)]
#[command(name = "msf")]
#[command(about = "Compute a minimum spanning forest from a delimited edge list")]
#[command(version)]
struct Args {
    /// Edge list file, one `start,end,weight` record per line
    input: PathBuf,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Divide the reported total weight by this factor (e.g. 1000 for km)
    #[arg(short, long, default_value_t = 1.0)]
    scale: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Edge records followed by a summary block
    Text,
    /// A single JSON document
    Json,
}

fn main() -> GroveResult<()> {
    env_logger::init();
    let args = Args::parse();

    let graph = load_graph(&args.input, args.delimiter)?;
    let forest = minimum_spanning_forest(&graph)?;

    match args.format {
        Format::Text => {
            print_forest(&forest);
            print_summary(&forest, args.scale);
        }
        Format::Json => println!("{}", forest_to_json(&forest, args.scale)?),
    }
    Ok(())
}
