use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use styleval::evaluator;
use styleval::expr::Expr;
use styleval::printer::Printer;
use styleval::symbols::SymbolTable;

#[derive(ClapParser, Debug)]
#[command(version, about = "Stylesheet expression evaluator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluates a JSON-serialized expression tree and prints the result
    Evaluate { filename: Option<PathBuf> },

    /// Evaluates a JSON-serialized expression tree in boolean context
    EvaluateBool { filename: Option<PathBuf> },

    /// Prints the prefix form of a JSON-serialized expression tree
    Print { filename: Option<PathBuf> },
}

/// Reads the contents of a file into a Vec<u8>
fn read_file(filename: PathBuf) -> Result<Vec<u8>> {
    info!("Reading file: {:?}", filename);
    let file = File::open(&filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    let bytes = reader
        .read_to_end(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    Ok(buf)
}

/// Deserializes an expression tree, exiting with the conventional
/// malformed-input code when the JSON does not describe one.
fn read_expr(filename: PathBuf) -> Result<Expr> {
    let buf = read_file(filename)?;

    match serde_json::from_slice::<Expr>(&buf) {
        Ok(expr) => {
            debug!("Deserialized expression: {:?}", expr);
            Ok(expr)
        }

        Err(e) => {
            debug!("Deserialize debug: {}", e);
            eprintln!("{}", e);
            std::process::exit(65);
        }
    }
}

fn init_logger() -> Result<()> {
    // Create or open the log file
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    // Configure env_logger to write to file with module path and source line
    Builder::new()
        .format(|buf, record| {
            // Strip 'styleval::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("styleval::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug) // Default to Debug, override with RUST_LOG
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        // Initialize a minimal logger to avoid "no logger" errors
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    match args.commands {
        Commands::Evaluate { filename } => match filename {
            Some(filename) => {
                info!("Running Evaluate subcommand");

                let expr = read_expr(filename)?;
                let symbols = SymbolTable::new();

                match evaluator::evaluate(&expr, &symbols) {
                    Ok(value) => {
                        debug!("Evaluated to: {}", value);
                        println!("{}", value);
                    }

                    Err(e) => {
                        debug!("Evaluation debug: {}", e);
                        eprintln!("{}", e);
                        std::process::exit(70);
                    }
                }

                info!("Evaluate subcommand completed");
            }

            None => {
                info!("No filepath provided for Evaluate");
                println!("No input filepath was provided. Exiting...");
                std::process::exit(0);
            }
        },

        Commands::EvaluateBool { filename } => match filename {
            Some(filename) => {
                info!("Running EvaluateBool subcommand");

                let expr = read_expr(filename)?;
                let symbols = SymbolTable::new();

                match evaluator::evaluate_boolean(&expr, &symbols) {
                    Ok(value) => {
                        debug!("Evaluated to: {}", value);
                        println!("{}", value);
                    }

                    Err(e) => {
                        debug!("Evaluation debug: {}", e);
                        eprintln!("{}", e);
                        std::process::exit(70);
                    }
                }

                info!("EvaluateBool subcommand completed");
            }

            None => {
                info!("No filepath provided for EvaluateBool");
                println!("No input filepath was provided. Exiting...");
                std::process::exit(0);
            }
        },

        Commands::Print { filename } => match filename {
            Some(filename) => {
                info!("Running Print subcommand");

                let expr = read_expr(filename)?;
                let printed = Printer::print(&expr);

                debug!("Prefix form: {}", printed);
                println!("{}", printed);

                info!("Print subcommand completed");
            }

            None => {
                info!("No filepath provided for Print");
                println!("No input filepath was provided. Exiting...");
                std::process::exit(0);
            }
        },
    }

    Ok(())
}
