use clap::{Parser, ValueEnum};
use clap_num::maybe_hex;
use lazy_static::lazy_static;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Rust module with enums, MNEMONIC_NAMES and OP_CODES
    Rust,
    /// C++ header/source pair
    Cpp,
    /// JSON array of per-opcode records
    Json,
}

#[derive(Parser, Debug)]
#[command(author,version,about,long_about=None)]
pub struct Args {
    /// Tab-separated reference listing to use instead of the built-in 65816 table
    #[arg(short, long)]
    pub table: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Rust)]
    pub format: Format,

    /// Output file (stdout if omitted; for cpp the .h/.cpp extensions are derived from it)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Namespace for cpp output
    #[arg(long, default_value = "snes")]
    pub namespace: String,

    /// Print the reconciled table in readable form
    #[arg(short, long)]
    pub list: bool,

    /// Print the entry for a single opcode (hex ok with '0x') and exit
    #[arg(long,value_parser=maybe_hex::<u8>)]
    pub opcode: Option<u8>,

    /// Build and validate the table without writing any output
    #[arg(short, long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

lazy_static! {
    pub static ref ARGS: Args = if cfg!(test) {
        // manually set parameters for running tests
        Args::parse_from(["test", "--check"])
    } else {
        Args::parse()
    };
}

pub fn init() { lazy_static::initialize(&ARGS); }
/// true if the generated table should be written somewhere
pub fn emit() -> bool { emits(&ARGS) }
/// true if generated source goes to stdout, in which case log chatter must stay off stdout
pub fn to_stdout() -> bool { emits_to_stdout(&ARGS) }

fn emits(args: &Args) -> bool { !args.check && args.opcode.is_none() && !(args.list && args.output.is_none()) }
fn emits_to_stdout(args: &Args) -> bool { emits(args) && args.output.is_none() }

#[cfg(test)]
mod tests {
    use super::*;

    fn stdout_taken(argv: &[&str]) -> bool { emits_to_stdout(&Args::parse_from(argv.iter().copied())) }

    #[test]
    fn stdout_is_reserved_only_when_source_goes_there() {
        assert!(stdout_taken(&["optab", "-v"]));
        assert!(stdout_taken(&["optab", "-v", "-f", "json"]));
        assert!(!stdout_taken(&["optab", "-v", "-o", "optab.rs"]));
        assert!(!stdout_taken(&["optab", "-v", "--check"]));
        assert!(!stdout_taken(&["optab", "-v", "--list"]));
        assert!(!stdout_taken(&["optab", "-v", "--opcode", "0xEA"]));
    }
    #[test]
    fn list_with_output_still_emits() {
        let args = Args::parse_from(["optab", "--list", "-o", "optab.rs"]);
        assert!(emits(&args));
        assert!(!emits_to_stdout(&args));
    }
}
