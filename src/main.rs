use anyhow::Result;
use clap::Parser;
use reliefgrid::cli::{Cli, Commands};
use reliefgrid::commands::evaluate::{evaluate_case, EvaluateConfig};
use reliefgrid::commands::simulate::{simulate_case, SimulateConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            seed,
            format,
            output,
            config_dir,
        } => simulate_case(SimulateConfig {
            seed,
            format: format.into(),
            output,
            config_dir,
        }),
        Commands::Evaluate {
            case_file,
            format,
            output,
            config_dir,
        } => evaluate_case(EvaluateConfig {
            case_file,
            format: format.into(),
            output,
            config_dir,
        }),
        Commands::Init { force } => reliefgrid::commands::init::init_config(force),
    }
}
