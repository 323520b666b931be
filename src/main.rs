use std::{fs, process::ExitCode};

use clap::Parser;
use reckon::{
    error::PipelineError,
    evaluate_tokens,
    interpreter::{lexer::tokenize, parser::core::parse},
    util::num::format_real,
};
use tracing_subscriber::EnvFilter;

/// reckon evaluates arithmetic expressions built from decimal numbers,
/// `+ - * /`, parentheses and prefix signs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read expressions from a file, one per line, instead of
    /// the argument itself.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream before evaluating.
    #[arg(long)]
    tokens: bool,

    /// Prints the fully parenthesised syntax tree before evaluating.
    #[arg(long)]
    ast: bool,

    /// Prints `0` for an empty expression instead of reporting an error.
    #[arg(short = 'z', long)]
    empty_as_zero: bool,

    /// Enables debug logging on stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate, or a file path with `--file`. Values may
    /// start with `-`, as in `-5+3`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let expressions = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script.lines()
                                .filter(|line| !line.trim().is_empty())
                                .map(str::to_string)
                                .collect(),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![args.contents.clone()]
    };

    let mut failed = false;
    for expression in &expressions {
        if let Err(e) = evaluate_and_print(expression, &args) {
            eprintln!("{e}");
            failed = true;
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Evaluates one expression, printing any requested diagnostics and the
/// result on stdout.
///
/// The expression is tokenized once; the token and tree printouts reuse that
/// token stream.
fn evaluate_and_print(expression: &str, args: &Args) -> Result<(), PipelineError> {
    if expression.is_empty() {
        if args.empty_as_zero {
            println!("0");
            return Ok(());
        }
        return Err(PipelineError::EmptyInput);
    }

    let tokens = tokenize(expression)?;

    if args.tokens {
        let rendered: Vec<String> = tokens.iter().map(|(token, _)| token.to_string()).collect();
        println!("{}", rendered.join(" "));
    }

    if args.ast
       && let Ok(Some(tree)) = parse(&tokens)
    {
        println!("{tree}");
    }

    println!("{}", format_real(evaluate_tokens(&tokens)?));
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}
