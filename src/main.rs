//! CLI entry point for the braille display calibration pattern generator

use braille_calibrate::io::cli::{Cli, Runner};
use clap::Parser;

fn main() -> braille_calibrate::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut runner = Runner::new(cli);
    runner.run()
}
