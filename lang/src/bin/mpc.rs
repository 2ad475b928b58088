use minipas::toolchain;
use minipas::toolchain::diagnostics::diagnostic_emitter::console_diagnostic_consumer;
use minipas::toolchain::diagnostics::CollectingDiagnosticConsumer;
use minipas::toolchain::lexer::{RuleTable, TokenizedBuffer};
use minipas::toolchain::parser::{ValidationResult, ValidatorLimits};
use minipas::toolchain::source::{SourceBuffer, SourceError};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
    mpc - the minipas syntax checker

    USAGE:
        mpc [--phase PHASE] [--quiet] [--max-depth N] [-v] FILENAME

    OPTIONS:
        --phase PHASE       Which phase to take the source through. PHASE is one of 'lex', or
                            'validate'. Defaults to 'validate'.
        --quiet             If present, all non-error output is suppressed.
        --max-depth N       How deeply statement lists and parentheses may nest, counting the
                            program body as the first level. At least 1, defaults to 256.
        -v, --verbose       Log more about what is going on. Repeat for even more.

    ARGS:
        FILENAME            The path to the minipas file to check, or supply '-' to take input
                            from stdin.

    EXIT STATUS:
        0 if no diagnostics were reported, 2 if any were, 1 on any other error.
";

const EXIT_DIAGNOSTICS: i32 = 2;

#[derive(Debug, Eq, PartialEq)]
enum Phase {
    Lex,
    Validate,
}

#[derive(Debug, Eq, PartialEq)]
struct MpcArgs {
    phase: Phase,
    quiet: bool,
    max_depth: usize,
    verbose: u8,
    source_file: std::path::PathBuf,
}

fn main() {
    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };
    init_logging(args.verbose);
    tracing::debug!(?args, "starting");

    let source = match open_source(&args.source_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    let mut console = console_diagnostic_consumer();
    let result = match args.phase {
        Phase::Lex => {
            let mut lexical = CollectingDiagnosticConsumer::new();
            let tokens = TokenizedBuffer::tokenize(&source, RuleTable::shared(), &mut lexical);
            if !args.quiet {
                println!("TokenizedBuffer [");
                tokens.print_tokens();
                println!("]");
            }
            ValidationResult::new(lexical.into_diagnostics())
        }

        Phase::Validate => {
            let limits = ValidatorLimits { max_nesting_depth: args.max_depth };
            let result = toolchain::check(&source, RuleTable::shared(), limits);
            if result.succeeded() && !args.quiet {
                println!("No syntax errors found.");
            }
            result
        }
    };
    result.report(&mut console);

    if !result.succeeded() {
        std::process::exit(EXIT_DIAGNOSTICS);
    }
}

fn open_source(path: &std::path::Path) -> Result<SourceBuffer<'static>, SourceError> {
    if path.as_os_str() == "-" {
        SourceBuffer::new_from_reader(std::io::stdin().lock(), "<stdin>")
    } else {
        SourceBuffer::new_from_file(path)
    }
}

fn init_logging(verbose: u8) {
    let default_directive = directive_for_verbosity(verbose);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

// Targets are module paths, so the library and this binary each need naming.
fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "minipas=warn,mpc=warn",
        1 => "minipas=debug,mpc=debug",
        _ => "minipas=trace,mpc=trace",
    }
}

fn parse_args() -> Result<MpcArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let mut verbose = 0u8;
    while pargs.contains(["-v", "--verbose"]) {
        verbose = verbose.saturating_add(1);
    }

    let args = MpcArgs {
        phase: pargs.opt_value_from_fn("--phase", parse_phase)?.unwrap_or(Phase::Validate),
        quiet: pargs.contains("--quiet"),
        max_depth: pargs
            .opt_value_from_fn("--max-depth", parse_max_depth)?
            .unwrap_or(ValidatorLimits::DEFAULT_MAX_NESTING_DEPTH),
        verbose,
        source_file: pargs.free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Error: unused arguments left: {:?}.", remaining);
        std::process::exit(1);
    }
    Ok(args)
}

fn parse_phase(s: &str) -> Result<Phase, &'static str> {
    match s {
        "lex" => Ok(Phase::Lex),
        "validate" => Ok(Phase::Validate),
        _ => Err("unrecognized phase"),
    }
}

// The program body is itself a statement list, so a depth of zero would refuse every program.
fn parse_max_depth(s: &str) -> Result<usize, &'static str> {
    match s.parse::<usize>() {
        Ok(0) => Err("max depth must be at least 1"),
        Ok(depth) => Ok(depth),
        Err(_) => Err("max depth must be a positive number"),
    }
}
