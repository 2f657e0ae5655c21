//! CLI entry point for twig

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use twig::{DisplayOptions, PlainFormatter, TreeOutput, TreeRenderer};

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Renders a text-based directory tree. Defaults to current directory.")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Max depth to display (0 = unlimited)
    #[arg(long = "depth", value_name = "N", default_value = "0")]
    depth: usize,

    /// Include hidden files and directories (those starting with .)
    #[arg(long = "all")]
    all: bool,

    /// Show directories only
    #[arg(long = "dirs-only")]
    dirs_only: bool,

    /// Show file sizes
    #[arg(long = "size")]
    size: bool,

    /// Increase diagnostic logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            max_depth: self.depth,
            include_hidden: self.all,
            dirs_only: self.dirs_only,
            show_size: self.size,
        }
    }
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        // Usage text goes to stderr so it never mixes with a rendered tree
        match e.kind() {
            ErrorKind::DisplayHelp => eprint!("{}", e.render()),
            ErrorKind::DisplayVersion => {
                let _ = e.print();
            }
            _ => {
                eprintln!("{}", e.render());
                eprint!("{}", Args::command().render_help());
            }
        }
        process::exit(e.exit_code());
    });

    init_logging(args.verbose);
    tracing::debug!(?args, "Parsed arguments");

    let stdout = io::stdout();
    let mut formatter = PlainFormatter::new(BufWriter::new(stdout.lock()));
    let renderer = TreeRenderer::new(args.display_options());

    if let Err(e) = renderer.render(&args.path, &mut formatter) {
        // Keep the lines rendered before the failure
        let _ = formatter.finish();
        eprintln!("twig: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::new(format!("twig={}", level)))
        .init();
}
