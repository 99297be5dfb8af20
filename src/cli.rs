// Idiomatic Rust CLI for the Inf26 dumper.
//
// The tool is single-shot: it decodes the `Inf26.bin` store in the current
// directory and prints every serial, one per line, in record order. The
// input path and record layout are fixed, so there are no options beyond
// clap's standard --help/--version surface.

use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::Parser;

/// Fixed input path, matching the file name used by the vendor tooling.
const INF26_FILE: &str = "Inf26.bin";

/// Inf26.bin serial-number store decoder.
#[derive(Parser, Debug)]
#[command(name = "inf26", version, about = "Decode serials from an Inf26.bin store")]
struct Cli {}

fn cmd_dump() -> i32 {
    let serials = match crate::io::decode_file(Path::new(INF26_FILE)) {
        Ok(serials) => serials,
        Err(e) => {
            eprintln!("inf26: {INF26_FILE}: {e}");
            return 1;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for serial in &serials {
        if let Err(e) = writeln!(out, "{serial}") {
            eprintln!("inf26: write error: {e}");
            return 1;
        }
    }
    if let Err(e) = out.flush() {
        eprintln!("inf26: write flush error: {e}");
        return 1;
    }

    0
}

/// Main CLI entry point. Parses arguments via clap, runs the dump.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let _cli = Cli::parse();
    process::exit(cmd_dump());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
