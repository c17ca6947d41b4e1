//! CLI for rewriting a saved KEGG pathway map page into static HTML.
//!
//! Exit codes: 0 on success, 1 when processing fails, 2 on bad arguments.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use kegg_map::rules::BASE_URL;
use kegg_map::{Options, ShapePolicy};
use log::{info, LevelFilter};

#[derive(Parser, Debug)]
#[command(name = "kegg-map", version)]
#[command(about = "Preprocess a KEGG pathway map page into clean static HTML")]
#[command(after_help = "Example:\n  $ kegg-map map00010.html map00010.clean.html")]
struct Args {
    /// KEGG map HTML page to read
    input: PathBuf,

    /// Where to write the cleaned HTML
    output: PathBuf,

    /// Prefix for relative hotspot and anchor links
    #[arg(long = "base-url", default_value = BASE_URL)]
    base_url: String,

    /// Spaces per nesting level in the output
    #[arg(long = "indent", default_value_t = 2)]
    indent: usize,

    /// Warn about hotspots with an unknown shape instead of failing
    #[arg(long = "skip-unknown-shapes")]
    skip_unknown_shapes: bool,

    /// Log progress to stderr (-v: summary, -vv: every rule)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            base_url: self.base_url.clone(),
            indent: self.indent,
            unknown_shapes: if self.skip_unknown_shapes {
                ShapePolicy::Skip
            } else {
                ShapePolicy::Fail
            },
            ..Options::default()
        }
    }
}

/// Help and version go to stdout with success; any other argument error
/// prints the help to stdout, the reason to stderr, and exits with 2.
fn argument_error(err: &clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        print!("{err}");
        return ExitCode::SUCCESS;
    }

    println!("{}", Args::command().render_help());
    eprint!("{err}");
    ExitCode::from(2)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return argument_error(&err),
    };

    init_logging(args.verbose);

    match kegg_map::process_file(&args.input, &args.output, &args.options()) {
        Ok(report) => {
            info!(
                "wrote {} ({} hotspot(s) classified)",
                args.output.display(),
                report.hotspots.total()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
