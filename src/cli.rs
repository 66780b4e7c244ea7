// Command-line front end for unilzw.
//
// Subcommands mirror the library surface: encode/decode a file with a
// chosen universal code, compare two files, print byte statistics.

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::io::{self as fileio, IoError};
use crate::stats::{self, CompressionReport};
use crate::universal::Scheme;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const DEFAULT_ENCODED_OUTPUT: &str = "encoded_output.lzw";
const DEFAULT_DECODED_OUTPUT: &str = "decoded_output.bin";

const EXIT_OK: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_DIFFERENT: i32 = 2;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// LZW compressor with universal-code token serialization.
#[derive(Parser, Debug)]
#[command(
    name = "unilzw",
    version,
    about = "LZW compression with Elias/Fibonacci universal codes",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Compress a file.
    Encode(CodecArgs),
    /// Decompress a file produced by `encode` with the same method.
    Decode(CodecArgs),
    /// Check whether two files have identical content.
    Compare(CompareArgs),
    /// Print byte entropy and conditional entropy of a file.
    Stats(StatsArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Omega,
    Gamma,
    Delta,
    Fibonacci,
}

impl From<MethodArg> for Scheme {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Omega => Scheme::Omega,
            MethodArg::Gamma => Scheme::Gamma,
            MethodArg::Delta => Scheme::Delta,
            MethodArg::Fibonacci => Scheme::Fibonacci,
        }
    }
}

#[derive(Args, Debug)]
struct CodecArgs {
    /// Universal coding method. Must match between encode and decode.
    #[arg(long, short = 'm', value_enum, default_value_t = MethodArg::Omega)]
    method: MethodArg,

    /// Input file.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output file.
    #[arg(value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// First file.
    #[arg(value_hint = ValueHint::FilePath)]
    file1: PathBuf,

    /// Second file.
    #[arg(value_hint = ValueHint::FilePath)]
    file2: PathBuf,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// File to analyze.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,
}

// ---------------------------------------------------------------------------
// Resolved options
// ---------------------------------------------------------------------------

struct Options {
    force: bool,
    quiet: bool,
    verbose: u8,
    json_output: bool,
}

fn log_filter(opts: &Options) -> &'static str {
    if opts.quiet {
        return "error";
    }
    match opts.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn output_allowed(path: &Path, opts: &Options) -> bool {
    if path.exists() && !opts.force {
        eprintln!(
            "unilzw: output file exists, use -f to overwrite: {}",
            path.display()
        );
        return false;
    }
    true
}

fn print_json(json: &serde_json::Value) {
    match serde_json::to_string_pretty(json) {
        Ok(s) => eprintln!("{s}"),
        Err(e) => eprintln!("unilzw: json: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("unilzw version {version}");

    let file_io = cfg!(feature = "file-io") as u8;
    let parallel = cfg!(feature = "parallel") as u8;
    let methods: Vec<&str> = Scheme::ALL.iter().map(|s| s.name()).collect();

    eprintln!("FILE_IO={file_io}");
    eprintln!("PARALLEL={parallel}");
    eprintln!("METHODS={}", methods.join(","));
    eprintln!("DEFAULT_METHOD={}", Scheme::default());

    EXIT_OK
}

// ---------------------------------------------------------------------------
// Encode command
// ---------------------------------------------------------------------------

fn cmd_encode(args: &CodecArgs, opts: &Options) -> i32 {
    let scheme = Scheme::from(args.method);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENCODED_OUTPUT));

    let raw = match std::fs::read(&args.input) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("unilzw: input file: {}: {e}", args.input.display());
            return EXIT_ERROR;
        }
    };
    if raw.is_empty() {
        if !opts.quiet {
            eprintln!("unilzw: input file is empty, nothing to do");
        }
        return EXIT_OK;
    }
    if !output_allowed(&output, opts) {
        return EXIT_ERROR;
    }

    let stats = match fileio::compress_file(&args.input, &output, scheme) {
        Ok(Some(stats)) => stats,
        Ok(None) => return EXIT_OK,
        Err(e) => {
            eprintln!("unilzw: encode error: {e}");
            return EXIT_ERROR;
        }
    };

    let packed = match std::fs::read(&output) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("unilzw: output file: {}: {e}", output.display());
            return EXIT_ERROR;
        }
    };
    let report = CompressionReport::new(&raw, &packed);
    log::info!(
        "encoded {} with {scheme}: {} -> {} bytes",
        args.input.display(),
        stats.input_size,
        stats.output_size
    );

    if !opts.quiet {
        eprintln!("input length:        {}", report.input_len);
        eprintln!("encoded length:      {}", report.output_len);
        eprintln!("compression ratio:   {:.4}", report.ratio);
        eprintln!("input entropy:       {:.4}", report.input_entropy);
        eprintln!("encoded entropy:     {:.4}", report.output_entropy);
    }

    if opts.json_output {
        let json = serde_json::json!({
            "command": "encode",
            "method": scheme.name(),
            "input_size": report.input_len,
            "output_size": report.output_len,
            "ratio": report.ratio,
            "input_entropy": report.input_entropy,
            "output_entropy": report.output_entropy,
            "input_sha256": stats.input_sha256.map(hex),
        });
        print_json(&json);
    }

    EXIT_OK
}

// ---------------------------------------------------------------------------
// Decode command
// ---------------------------------------------------------------------------

fn cmd_decode(args: &CodecArgs, opts: &Options) -> i32 {
    let scheme = Scheme::from(args.method);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DECODED_OUTPUT));

    if !output_allowed(&output, opts) {
        return EXIT_ERROR;
    }

    match fileio::decompress_file(&args.input, &output, scheme) {
        Ok(stats) => {
            log::info!(
                "decoded {} with {scheme}: {} -> {} bytes",
                args.input.display(),
                stats.input_size,
                stats.output_size
            );
            if opts.verbose > 0 && !opts.quiet {
                eprintln!(
                    "unilzw: decoder: input size: {}, output size: {}",
                    stats.input_size, stats.output_size
                );
            }
            if opts.json_output {
                let json = serde_json::json!({
                    "command": "decode",
                    "method": scheme.name(),
                    "input_size": stats.input_size,
                    "output_size": stats.output_size,
                    "output_sha256": stats.output_sha256.map(hex),
                });
                print_json(&json);
            }
            EXIT_OK
        }
        Err(IoError::Codec(e)) => {
            eprintln!("unilzw: decode error ({scheme}): {e}");
            EXIT_ERROR
        }
        Err(e) => {
            eprintln!("unilzw: {e}");
            EXIT_ERROR
        }
    }
}

// ---------------------------------------------------------------------------
// Compare / stats commands
// ---------------------------------------------------------------------------

fn cmd_compare(args: &CompareArgs, opts: &Options) -> i32 {
    let identical = match fileio::files_identical(&args.file1, &args.file2) {
        Ok(same) => same,
        Err(e) => {
            eprintln!("unilzw: compare: {e}");
            return EXIT_ERROR;
        }
    };

    if !opts.quiet {
        if identical {
            println!("files have the same content");
        } else {
            println!("files differ");
        }
    }
    if opts.json_output {
        print_json(&serde_json::json!({
            "command": "compare",
            "identical": identical,
        }));
    }

    if identical { EXIT_OK } else { EXIT_DIFFERENT }
}

fn cmd_stats(args: &StatsArgs, opts: &Options) -> i32 {
    let data = match std::fs::read(&args.input) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("unilzw: input file: {}: {e}", args.input.display());
            return EXIT_ERROR;
        }
    };
    let entropy = stats::entropy(&data);
    let conditional = stats::conditional_entropy(&data);

    if !opts.quiet {
        println!("size:                {}", data.len());
        println!("entropy:             {entropy:.4}");
        println!("conditional entropy: {conditional:.4}");
    }
    if opts.json_output {
        print_json(&serde_json::json!({
            "command": "stats",
            "size": data.len(),
            "entropy": entropy,
            "conditional_entropy": conditional,
        }));
    }
    EXIT_OK
}

fn hex(bytes: [u8; 32]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("unilzw".to_string())
        .chain(args.iter().cloned())
        .collect();
    let _ = Cli::try_parse_from(argv);
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let opts = Options {
        force: cli.force,
        quiet: cli.quiet,
        verbose: cli.verbose.min(2),
        json_output: cli.json_output,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(&opts)))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let exit_code = match &cli.command {
        Cmd::Encode(args) => cmd_encode(args, &opts),
        Cmd::Decode(args) => cmd_decode(args, &opts),
        Cmd::Compare(args) => cmd_compare(args, &opts),
        Cmd::Stats(args) => cmd_stats(args, &opts),
        Cmd::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
