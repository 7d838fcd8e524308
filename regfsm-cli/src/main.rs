use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{LevelFilter, info};
use regfsm_core::{DotOptions, Regex, tokenize, to_dot_with};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "regfsm")]
#[command(about = "regfsm - compile patterns into finite automata and match strings")]
#[command(version)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether each input is fully matched by the pattern
    Match {
        /// The pattern
        pattern: String,
        /// The input strings to check
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Test a pattern against one input with a detailed report
    Test {
        /// The pattern
        pattern: String,
        /// The input string to test
        input: String,
    },
    /// Print the automaton as a Graphviz digraph
    Dot {
        /// The pattern
        pattern: String,
        /// Name of the digraph
        #[arg(long, default_value = "FSM")]
        name: String,
        /// Lay the graph out left to right
        #[arg(long)]
        lr: bool,
        /// Write the graph to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the tokens of a pattern
    Tokens {
        /// The pattern
        pattern: String,
    },
    /// List every state with its successors
    States {
        /// The pattern
        pattern: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Match { pattern, inputs } => cmd_match(&pattern, &inputs),
        Commands::Test { pattern, input } => cmd_test(&pattern, &input),
        Commands::Dot {
            pattern,
            name,
            lr,
            output,
        } => cmd_dot(&pattern, name, lr, output),
        Commands::Tokens { pattern } => cmd_tokens(&pattern),
        Commands::States { pattern } => cmd_states(&pattern),
    }
}

/// Print an error and exit with status 1
fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), e);
    std::process::exit(1);
}

fn compile_or_exit(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(r) => r,
        Err(e) => fail(e),
    }
}

fn cmd_match(pattern: &str, inputs: &[String]) {
    let regex = compile_or_exit(pattern);
    let mut all_matched = true;

    for input in inputs {
        if regex.is_match(input) {
            println!("{}", "true".green());
        } else {
            println!("{}", "false".red());
            all_matched = false;
        }
    }

    std::process::exit(if all_matched { 0 } else { 1 });
}

fn cmd_test(pattern: &str, input: &str) {
    println!("{}", "Testing pattern...".bold());
    println!("  Pattern: {}", pattern.cyan());
    println!("  Input:   {}", format!("{:?}", input).yellow());
    println!();

    let regex = compile_or_exit(pattern);

    println!("  Tokens:  {}", regex.tokens().len());
    println!("  States:  {}", regex.nfa().len());
    println!("  Accepts: {:?}", regex.nfa().accepting_states());
    println!();

    if regex.is_match(input) {
        println!("{}", "✓ Match".green().bold());
    } else {
        println!("{}", "✗ No match".red());
    }
}

fn cmd_dot(pattern: &str, name: String, lr: bool, output: Option<PathBuf>) {
    let regex = compile_or_exit(pattern);
    let options = DotOptions {
        name,
        left_to_right: lr,
    };
    let dot = to_dot_with(regex.nfa(), &options);

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, dot + "\n") {
                fail(format!("cannot write {}: {}", path.display(), e));
            }
            info!("wrote {}", path.display());
        }
        None => println!("{}", dot),
    }
}

fn cmd_tokens(pattern: &str) {
    let tokens = match tokenize(pattern) {
        Ok(tokens) => tokens,
        Err(e) => fail(e),
    };

    println!(
        "{} {}",
        "Found".bold(),
        format!("{} token(s)", tokens.len()).green()
    );
    for (i, token) in tokens.iter().enumerate() {
        println!("  [{}] {}", i, token);
    }
}

fn cmd_states(pattern: &str) {
    let regex = compile_or_exit(pattern);
    println!("{}", regex.nfa());
}
