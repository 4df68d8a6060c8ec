use anyhow::{bail, Context, Result};
use clap::Parser;
use deoxyribose::config::{AppConfig, ConfigManager};
use deoxyribose::engines::execution::{
    seed_main_stack, ExecutionEngine, Machine, Outcome, RunContext,
};
use deoxyribose::types::Value;
use deoxyribose::DeoxyriboseError;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

/// Run a Deoxyribose program.
#[derive(Parser)]
#[command(
    name = "deoxyribose",
    version,
    about = "Interpreter for the Deoxyribose DNA programming language"
)]
struct Args {
    /// Program text; only a, c, g and t (any case) are significant.
    /// Programs are read from standard input, one per line, when omitted.
    program: Option<String>,

    /// Initial main stack: integers are pushed as-is, other text as one
    /// code point per character.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    seeds: Vec<String>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Trace gene location and every executed codon to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Give up after this many steps instead of running until a stop codon.
    #[arg(long)]
    step_limit: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let manager = ConfigManager::new();
    match &args.config {
        Some(path) => manager
            .load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => manager.load_from_env().context("Failed to read configuration")?,
    }
    manager.update(|c| {
        if args.verbose {
            c.interpreter.verbose = true;
        }
        if args.step_limit.is_some() {
            c.interpreter.step_limit = args.step_limit;
        }
    })?;
    let config = manager.get();

    init_logging(config.interpreter.verbose);

    let seed = seed_main_stack(&args.seeds);
    match args.program {
        Some(source) => {
            let context = RunContext::from_source(&source, config.interpreter.clone())
                .context("Cannot run program")?;
            run_program(context, seed, &config)
        }
        None => run_stdin(seed, &config),
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("deoxyribose", log::LevelFilter::Trace);
    }
    builder.init();
}

/// Read programs line by line. Lines with no program text are reported and
/// skipped; a stop codon ends the whole process.
fn run_stdin(seed: Vec<Value>, config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read program from standard input")?;
        match RunContext::from_source(&line, config.interpreter.clone()) {
            Ok(context) => run_program(context, seed.clone(), config)?,
            Err(DeoxyriboseError::EmptyChromosome) => {
                log::error!("Input contains no a, c, g or t; waiting for another program");
            }
            Err(e) => return Err(e.into()),
        }
        if !config.input.reread_stdin {
            break;
        }
    }
    Ok(())
}

fn run_program(context: RunContext, seed: Vec<Value>, config: &AppConfig) -> Result<()> {
    if config.input.echo_chromosome {
        log::info!(
            "Chromosome ({} symbols): {}",
            context.chromosome.len(),
            context.chromosome
        );
    }

    let stdout = io::stdout();
    let mut engine = ExecutionEngine::new(context, stdout.lock()).with_machine(Machine::seeded(seed));

    match engine.run()? {
        Outcome::Stopped => process::exit(0),
        Outcome::StepLimitReached(steps) => {
            bail!("No stop codon reached within {} steps", steps)
        }
    }
}
