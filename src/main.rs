//! # A 65816 opcode table compiler.
//!
//! Reconciles a scraped 65816 reference listing with a hand-maintained override table and
//! writes one canonical 256-entry opcode descriptor table (operation, size class, operand
//! mode, operand-load flag) for downstream disassembly tooling.
//!
//! ## Getting Started
//! To generate the Rust table from the built-in listing:
//! ```
//! cargo run -- -o optab.rs
//! ```
//! ...or to check a hand-edited listing without writing anything:
//! ```
//! optab --check --table my_listing.tsv
//! ```
//! ## Options
//! Help for command line options is available using -h or --help.
#[macro_use]
mod macros;
mod catalog;
mod config;
mod emit;
mod error;
mod overrides;
mod reconcile;
mod reference;
use catalog::Catalog;
use config::Format;
use overrides::OverrideTable;
use reconcile::OpcodeTable;
use reference::ReferenceTable;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::result::Result;
pub(crate) use crate::error::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::init();
    // run does all the work
    if let Err(e) = run() {
        eprintln!("{}", e);
        return Err(Box::new(e));
    }
    Ok(())
}

/// Build the canonical table from the given listing (or the built-in one).
fn compile(listing: Option<&Path>) -> Result<OpcodeTable, Error> {
    let catalog = Catalog::new()?;
    let reference = match listing {
        Some(path) => {
            if !config::to_stdout() {
                info!("Reading reference listing {}", path.display());
            }
            ReferenceTable::read_from_file(path, &catalog)?
        }
        None => ReferenceTable::builtin(&catalog)?,
    };
    let overrides = OverrideTable::builtin()?;
    verbose_println!("{} reference rows, {} overrides", reference.len(), overrides.len());
    reconcile::reconcile(&catalog, &reference, &overrides)
}

/// run drives the top level functionality (compile, inspect, emit) of the app
fn run() -> Result<(), Error> {
    let table = compile(config::ARGS.table.as_deref())?;
    if !config::to_stdout() {
        let en = table.enumerations();
        info!(
            "Reconciled 256 opcodes ({} overridden): {} operations, {} operand modes, {} size classes",
            table.iter().filter(|e| e.is_overridden()).count(),
            en.operations.len(),
            en.operands.len(),
            en.sizes.len()
        );
    }
    if let Some(op) = config::ARGS.opcode {
        println!("{}", table[op]);
        return Ok(());
    }
    if config::ARGS.list {
        for e in table.iter() {
            println!("{}", e);
        }
    }
    if !config::emit() {
        return Ok(());
    }
    match config::ARGS.output.as_deref() {
        Some(path) => write_files(&table, config::ARGS.format, path),
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_table(&table, config::ARGS.format, &mut out)
        }
    }
}

/// Write every output of `format` into a single stream (cpp writes header then source).
fn write_table(table: &OpcodeTable, format: Format, out: &mut dyn Write) -> Result<(), Error> {
    match format {
        Format::Rust => emit::write_rust(table, out),
        Format::Json => emit::write_json(table, out),
        Format::Cpp => {
            emit::write_cpp_header(table, &config::ARGS.namespace, out)?;
            writeln!(out)?;
            emit::write_cpp_source(table, &config::ARGS.namespace, "optab.h", out)
        }
    }
}

fn write_files(table: &OpcodeTable, format: Format, path: &Path) -> Result<(), Error> {
    let create = |p: &Path| -> Result<BufWriter<File>, Error> { Ok(BufWriter::new(File::create(p)?)) };
    match format {
        Format::Cpp => {
            let h_path = path.with_extension("h");
            let cpp_path = path.with_extension("cpp");
            let header = h_path
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .ok_or_else(|| general_err!(format!("invalid output path {}", path.display())))?;
            let mut h = create(&h_path)?;
            emit::write_cpp_header(table, &config::ARGS.namespace, &mut h)?;
            h.flush()?;
            let mut cpp = create(&cpp_path)?;
            emit::write_cpp_source(table, &config::ARGS.namespace, &header, &mut cpp)?;
            cpp.flush()?;
            info!("Wrote {} and {}", h_path.display(), cpp_path.display());
        }
        _ => {
            let mut f = create(path)?;
            write_table(table, format, &mut f)?;
            f.flush()?;
            info!("Wrote {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn render(table: &OpcodeTable, format: Format) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::new();
        write_table(table, format, &mut buf)?;
        Ok(buf)
    }

    #[test]
    fn compiling_twice_is_byte_identical() -> Result<(), Error> {
        let a = compile(None)?;
        let b = compile(None)?;
        assert!(a == b);
        for format in [Format::Rust, Format::Cpp, Format::Json] {
            assert_eq!(render(&a, format)?, render(&b, format)?, "{:?}", format);
        }
        Ok(())
    }
    #[test]
    fn listing_file_matches_builtin() -> Result<(), Error> {
        let path = std::env::temp_dir().join(format!("optab-listing-{}.tsv", std::process::id()));
        fs::write(&path, reference::BUILTIN_TABLE)?;
        let from_file = compile(Some(&path));
        fs::remove_file(&path)?;
        assert!(from_file? == compile(None)?);
        Ok(())
    }
    #[test]
    fn incomplete_listing_file_fails() -> Result<(), Error> {
        let path = std::env::temp_dir().join(format!("optab-partial-{}.tsv", std::process::id()));
        let partial: String = reference::BUILTIN_TABLE
            .lines()
            .filter(|l| !l.contains("\tEA\t"))
            .map(|l| format!("{}\n", l))
            .collect();
        fs::write(&path, partial)?;
        let result = compile(Some(&path));
        fs::remove_file(&path)?;
        match result {
            Err(e) => assert_eq!(e.kind, ErrorKind::IncompleteOpcodeCoverage),
            Ok(_) => panic!("listing without 0xEA accepted"),
        }
        Ok(())
    }
    #[test]
    fn bad_row_names_its_line() -> Result<(), Error> {
        let path = std::env::temp_dir().join(format!("optab-bad-{}.tsv", std::process::id()));
        let broken = reference::BUILTIN_TABLE.replacen("\tDirect Page\n", "\tDirect Pgae\n", 1);
        fs::write(&path, broken)?;
        let result = compile(Some(&path));
        fs::remove_file(&path)?;
        match result {
            Err(e) => {
                assert_eq!(e.kind, ErrorKind::UnresolvedAddressingMode);
                assert!(e.msg.contains("Direct Pgae"));
                assert!(e.ctx.is_some());
            }
            Ok(_) => panic!("misspelled mode accepted"),
        }
        Ok(())
    }
    #[test]
    fn missing_listing_is_io_error() {
        let e = compile(Some(Path::new("no/such/listing.tsv"))).err();
        assert_eq!(e.map(|e| e.kind), Some(ErrorKind::IO));
    }
}
