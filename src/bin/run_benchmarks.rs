use std::env;
use std::path::Path;

use bitmap_benchmark_rs::suite;

const DEFAULT_OUTPUT_DIR: &str = "benchmark_results";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Get the command-line arguments
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <dataset_directory> [output_directory]", args[0]);
        eprintln!("  <dataset_directory>  - Directory containing dataset subdirectories");
        eprintln!(
            "  [output_directory]   - Where result CSVs are written (default: {})",
            DEFAULT_OUTPUT_DIR
        );
        std::process::exit(1);
    }

    let top_level = Path::new(&args[1]);
    let output_dir = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT_DIR);

    if let Err(e) = suite::run_suite(top_level, Path::new(output_dir)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("\nAll benchmarks complete.");
}
