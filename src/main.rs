use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use logic_sim::{
    file_formats::netlist::to_netlist, Interpreter, TokenSource, WhitespaceTokens, WriteSink,
};

#[derive(Parser)]
#[command(
    name = "logic-sim",
    version,
    about = "Simulates a logic circuit described by a command stream"
)]
struct Cli {
    /// File with the command stream. Reads stdin if absent or `-`.
    input: Option<PathBuf>,
    /// Print the final circuit as a command stream after interpretation.
    #[arg(long, default_value_t = false)]
    dump_netlist: bool,
}

impl Cli {
    /// Returns the input file, or `None` for stdin.
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| path.as_os_str() != "-")
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = io::stdout().lock();
    match cli.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            run(
                WhitespaceTokens::new(BufReader::new(file)),
                stdout,
                cli.dump_netlist,
            )
        }
        None => run(
            WhitespaceTokens::new(io::stdin().lock()),
            stdout,
            cli.dump_netlist,
        ),
    }
}

fn run(source: impl TokenSource, out: impl Write, dump_netlist: bool) -> Result<()> {
    let mut interpreter = Interpreter::new(source, WriteSink(out));
    interpreter.run()?;
    let (circuit, WriteSink(mut out)) = interpreter.into_parts();
    if dump_netlist {
        to_netlist(&mut out, &circuit)?;
    }
    out.flush()?;
    Ok(())
}
