// ABOUTME: CLI binary for sift: extract values from HTML elements matched by a CSS selector.
// ABOUTME: Flags: --url, --timeout, --query, --values (repeatable), --delim, --help.

use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, CommandFactory, Parser};
use sift::{options, Client, RuleSet};

#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "Extract values from HTML elements matched by a CSS selector")]
#[command(disable_help_flag = true)]
struct Args {
    /// Show this help text and exit
    #[arg(long = "help", action = ArgAction::SetTrue)]
    help: bool,

    /// Input source: a URL, a file path, or empty for stdin
    #[arg(short = 'u', long = "url", default_value = "")]
    url: String,

    /// Request timeout in seconds for network input (0 = transport default)
    #[arg(short = 't', long = "timeout", default_value_t = 0)]
    timeout: i64,

    /// CSS selector identifying the elements to extract from
    #[arg(short = 'q', long = "query", default_value = "")]
    query: String,

    /// Value to extract per element: text, html, or an attribute name (repeatable)
    #[arg(short = 'v', long = "values", value_name = "VALUE")]
    values: Vec<String>,

    /// Delimiter between multiple values of one element
    #[arg(short = 'd', long = "delim", default_value = ",")]
    delim: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if args.help {
        let mut cmd = Args::command();
        let _ = cmd.print_help();
        return ExitCode::from(10);
    }

    let errors = options::validate(args.timeout, &args.values);
    if !errors.is_empty() {
        eprintln!("invalid parameters");
        eprintln!("  errors:");
        for (i, err) in errors.iter().enumerate() {
            eprintln!("    {:2} {}", i + 1, err);
        }
        return ExitCode::from(1);
    }

    // Validation already guaranteed a non-empty value list.
    let rules = match RuleSet::parse(&args.values, &args.delim) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("invalid parameters");
            eprintln!("  errors:");
            eprintln!("     1 {err}");
            return ExitCode::from(1);
        }
    };

    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout as u64))
        .build();

    match client.extract(&args.url, &args.query, &rules).await {
        Ok(extraction) => {
            if let Some(err) = &extraction.error {
                eprintln!("runtime errors");
                eprintln!("{err}");
            }
            for line in &extraction.lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Acquisition or decoding failed: nothing was extracted. The run
            // still terminates normally; the diagnostic goes to stderr.
            eprintln!("runtime errors");
            eprintln!("{err}");
            ExitCode::SUCCESS
        }
    }
}
