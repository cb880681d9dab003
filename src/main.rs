//! CLI entry point for greedy tile reassembly

use atsumaru::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> atsumaru::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
