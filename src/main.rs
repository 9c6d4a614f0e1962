use std::{fs, io};

use clap::Parser;
use lalg::{Config, Error, check, parse, run, tokenize};
use tracing::level_filters::LevelFilter;

/// lalg runs programs written in LALG, a small Pascal-like teaching language
/// with Portuguese keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lalg to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Only tokenize, parse and check the program, without running it.
    #[arg(short, long)]
    check_only: bool,

    /// Print the token stream and stop.
    #[arg(short, long)]
    tokens: bool,

    /// After a successful run, print every variable with its type and final
    /// value.
    #[arg(short, long)]
    dump_state: bool,

    /// Fail once any single loop runs more than this many iterations.
    #[arg(short, long, value_name = "N")]
    max_iterations: Option<u64>,

    /// Accept the literals 0 and 1 as values for boolean variables.
    #[arg(short, long)]
    literal_booleans: bool,

    /// Log what each stage does on stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

/// What to do with the program once it is loaded.
enum Mode {
    Tokens,
    Check,
    Run { dump_state: bool },
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_target(false)
                             .with_max_level(level)
                             .with_writer(io::stderr)
                             .init();

    let mut config = Config::default().with_literal_booleans(args.literal_booleans);
    if let Some(limit) = args.max_iterations {
        config = config.with_max_loop_iterations(limit);
    }

    let mode = if args.tokens {
        Mode::Tokens
    } else if args.check_only {
        Mode::Check
    } else {
        Mode::Run { dump_state: args.dump_state }
    };

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = execute(&script, &config, &mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn execute(script: &str, config: &Config, mode: &Mode) -> Result<(), Error> {
    match mode {
        Mode::Tokens => {
            for token in tokenize(script)? {
                println!("{}:{}\t{}\t{}", token.line, token.column, token.kind, token.text);
            }
        },
        Mode::Check => {
            let program = parse(&tokenize(script)?)?;
            check(&program, config.check)?;
            println!("Program '{}' passed all checks.", program.name.text);
        },
        Mode::Run { dump_state } => {
            let store = run(script, config, io::stdin().lock(), io::stdout().lock())?;
            if *dump_state {
                print!("{store}");
            }
        },
    }
    Ok(())
}
