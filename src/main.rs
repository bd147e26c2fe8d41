use std::{fs, path::PathBuf, process::exit};

use clap::Parser;
use rill::{error::Error, interpreter::evaluator::core::Context};

/// rill is a small imperative scripting language. Give it a script file and
/// it runs it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the parsed syntax tree before running the script.
    #[arg(short, long)]
    dump_ast: bool,

    /// Pipe mode automatically prints out the last value the script
    /// produced.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Path of the script to run.
    path: PathBuf,
}

fn main() {
    let args = Args::parse();

    let script = fs::read_to_string(&args.path).unwrap_or_else(|e| {
                                                    eprintln!("Failed to read the input file '{}': {e}",
                                                              args.path.display());
                                                    exit(1);
                                                });

    if let Err(e) = execute(&script, &args) {
        eprintln!("{e}");
        exit(1);
    }
}

fn execute(script: &str, args: &Args) -> Result<(), Error> {
    let program = rill::parse(script)?;

    if args.dump_ast {
        println!("{program:#?}");
    }

    let mut context = Context::new();
    let result = context.evaluate(&program)?;

    if args.pipe_mode
       && let Some(value) = result
    {
        println!("{value}");
    }

    Ok(())
}
