use clap::Parser;
use std::process;

use sprintboard::cli::commands::{Cli, Commands};
use sprintboard::{cli, logging};

fn main() {
    let cli_args = Cli::parse();
    if let Err(e) = logging::init(cli_args.verbose) {
        eprintln!("warning: {e}");
    }

    let json_output = cli_args.json;
    let data_dir = cli_args.data_dir.clone();
    let data_dir = data_dir.as_deref();

    let exit_code = match cli_args.command {
        Commands::Init => cli::init::run(json_output, data_dir),
        Commands::Sprint(cmd) => cli::sprint::run(cmd, json_output, data_dir),
        Commands::Board(cmd) => cli::board::run(cmd, json_output, data_dir),
        Commands::Task(cmd) => cli::task::run(cmd, json_output, data_dir),
        Commands::Team => cli::team::run(json_output),
        Commands::Status => cli::status::run(json_output, data_dir),
    };

    process::exit(exit_code);
}
