use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use is_terminal::IsTerminal;
use plainjson::Formatter;

/// A plain, predictable JSON formatter.
///
/// pjson reads JSON from stdin or files and writes it back with every
/// element on its own line, two-space indentation, and keys in document
/// order. The same input always produces the same output.
#[derive(Parser, Debug)]
#[command(name = "pjson")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of spaces per indentation level.
    #[arg(short, long, default_value = "2")]
    indent: usize,

    /// Apply JSON escaping to string content on output.
    #[arg(long)]
    escape_strings: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("pjson: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let input = if args.files.is_empty() {
        if io::stdin().is_terminal() {
            return Err("no input files and stdin is a terminal (try `pjson --help`)".into());
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let mut combined = String::new();
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            combined.push_str(&content);
        }
        combined
    };

    let mut formatter = Formatter::new();
    formatter.options.indent_spaces = args.indent;
    formatter.options.escape_strings = args.escape_strings;

    let output = formatter.reformat(&input)?;

    if let Some(path) = args.output {
        fs::write(&path, &output)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        let mut stdout = io::stdout();
        stdout.write_all(output.as_bytes())?;
        // Root objects end without a newline; terminals want one.
        if !output.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
