use clap::{Parser, Subcommand};
use kodi_bridge::{
    Argument, BridgeConfig, CannedExecutor, FunctionReference, InternalResult, RemoteEvaluator,
};
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Prints the exact statements that would be sent to Kodi's interpreter.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Call module.function with the given arguments
    Call {
        module: String,
        function: String,
        args: Vec<String>,
    },
    /// Run a builtin through the dispatcher
    Builtin { name: String, args: Vec<String> },
    /// Assign a raw expression to a remote variable
    EvalTo { variable: String, code: String },
    /// Read a remote variable
    Get { variable: String },
    /// Delete a remote variable
    Del { variable: String },
}

/// `None`, integers, floats, `True`/`False`, `$name` for a remote variable;
/// anything else is text.
fn parse_argument(raw: &str, config: &BridgeConfig) -> Argument {
    if raw == "None" {
        return Argument::Null;
    }
    if let Some(name) = raw.strip_prefix('$') {
        return Argument::Variable(config.variable_expression(name));
    }
    match raw {
        "True" => return Argument::Bool(true),
        "False" => return Argument::Bool(false),
        _ => {}
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Argument::Int(value);
    }
    if let Ok(value) = raw.parse::<u64>() {
        return Argument::UInt(value);
    }
    // "inf" and "nan" parse as floats but are meant as text here.
    if raw.chars().any(|c| c.is_ascii_digit()) {
        if let Ok(value) = raw.parse::<f64>() {
            return Argument::Float(value);
        }
    }
    Argument::from(raw)
}

fn parse_all(args: &[String], config: &BridgeConfig) -> Vec<Argument> {
    args.iter().map(|a| parse_argument(a, config)).collect()
}

fn load_config(cli: &Cli) -> InternalResult<BridgeConfig> {
    match &cli.config {
        Some(path) => Ok(BridgeConfig::from_file(path)?),
        None => Ok(BridgeConfig::default()),
    }
}

fn run(cli: &Cli) -> InternalResult<Vec<String>> {
    let config = load_config(cli)?;
    debug!("config: {:?}", config);

    let evaluator = RemoteEvaluator::with_config(CannedExecutor::default(), config.clone());
    match &cli.command {
        Command::Call {
            module,
            function,
            args,
        } => {
            evaluator.call(&FunctionReference::new(module, function), &parse_all(args, &config))?;
        }
        Command::Builtin { name, args } => {
            evaluator.call_builtin(name, &parse_all(args, &config))?;
        }
        Command::EvalTo { variable, code } => {
            evaluator.eval_to_variable(variable, code)?;
        }
        Command::Get { variable } => {
            evaluator.get_variable(variable)?;
        }
        Command::Del { variable } => {
            evaluator.destroy_variable(variable)?;
        }
    }

    let statements = evaluator.into_executor().sent();
    info!("{} statement(s) generated", statements.len());
    Ok(statements)
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(statements) => {
            for statement in statements {
                println!("{}", statement);
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
