//! Parsing of the tab-separated 65816 reference listing.
//!
//! Each row looks like this (tabs shown as `|`):
//! ```text
//! LDA (dp),Y |  | 2 | B1 | DP Indirect Indexed, Y
//! ```
//! Column 0 is the assembler syntax, column 1 an assembler-specific alias, column 2 the byte
//! count (unused), column 3 the opcode in hex and column 4 the addressing-mode description.
//! Rows do not have to be in opcode order; the reconciler remaps them.
use super::catalog::{Catalog, Mode};
use super::*;

use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// The reference listing that ships with the compiler.
pub const BUILTIN_TABLE: &str = include_str!("../data/65816.tsv");

const COL_SYNTAX: usize = 0;
const COL_ALIAS: usize = 1;
const COL_OPCODE: usize = 3;
const COL_MODE: usize = 4;

lazy_static! {
    static ref RE_MNEMONIC: Regex = Regex::new(r"^\s*([A-Za-z]+)").unwrap();
    static ref RE_OPCODE: Regex = Regex::new(r"^\s*(?:0[xX]|\$)?([0-9A-Fa-f]{2})\s*$").unwrap();
}

/// "Immediate" alone does not say how wide the operand is; the mnemonic decides.
fn immediate_mode(mnemonic: &str) -> Option<Mode> {
    match mnemonic {
        "ADC" | "AND" | "BIT" | "CMP" | "EOR" | "LDA" | "ORA" | "SBC" => Some(Mode::ImmediateMemory),
        "CPX" | "CPY" | "LDX" | "LDY" => Some(Mode::ImmediateIndex),
        "REP" | "SEP" => Some(Mode::Immediate8),
        _ => None,
    }
}

/// One parsed row of the reference listing.
#[derive(Debug, Clone)]
pub struct ReferenceRow {
    /// line in the source listing (1-based)
    pub line: usize,
    /// opcode text exactly as found in the listing
    pub opcode_hex: String,
    pub opcode: u8,
    pub mnemonic: String,
    pub alias: String,
    /// raw addressing-mode description
    pub description: String,
    /// resolved catalog index
    pub mode: usize,
}
impl ReferenceRow {
    pub fn from_str(line: usize, row: &str, catalog: &Catalog) -> Result<Self, Error> {
        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() <= COL_MODE {
            return Err(syntax_err_line!(
                line,
                row,
                format!("expected at least {} tab-separated fields, found {}", COL_MODE + 1, fields.len())
            ));
        }
        let mnemonic = RE_MNEMONIC
            .captures(fields[COL_SYNTAX])
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_ascii_uppercase())
            .ok_or_else(|| syntax_err_line!(line, row, "missing mnemonic"))?;
        let opcode_hex = fields[COL_OPCODE].trim().to_string();
        let opcode = RE_OPCODE
            .captures(fields[COL_OPCODE])
            .and_then(|c| c.get(1))
            .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
            .ok_or_else(|| syntax_err_line!(line, row, format!("invalid opcode \"{}\"", opcode_hex)))?;
        let description = fields[COL_MODE].trim().to_string();
        let mode = if description.eq_ignore_ascii_case("immediate") {
            let m = immediate_mode(&mnemonic).ok_or_else(|| {
                row_err!(
                    ErrorKind::UnknownImmediateMnemonic,
                    Some(row),
                    "line {}: unknown immediate usage for {} (opcode 0x{:02X})",
                    line,
                    mnemonic,
                    opcode
                )
            })?;
            catalog.index_of(m).ok_or_else(|| {
                row_err!(ErrorKind::Catalog, Some(row), "line {}: catalog has no {} mode", line, m)
            })?
        } else {
            catalog.resolve(&description).map_err(|e| {
                row_err!(e.kind, Some(row), "line {}: opcode 0x{:02X}: {}", line, opcode, e.msg)
            })?
        };
        Ok(ReferenceRow {
            line,
            opcode_hex,
            opcode,
            mnemonic,
            alias: fields[COL_ALIAS].trim().to_string(),
            description,
            mode,
        })
    }
}

/// All rows of a reference listing, in listing order.
pub struct ReferenceTable {
    rows: Vec<ReferenceRow>,
}
impl ReferenceTable {
    /// Parse rows from any line source. Blank lines and `#` comments are skipped,
    /// but still count toward line numbers.
    pub fn from_str_iter<I, T>(iter: I, catalog: &Catalog) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut rows = Vec::new();
        for (i, s) in iter.into_iter().enumerate() {
            let s = s.as_ref().trim_end_matches(&['\r', '\n'][..]);
            if s.trim().is_empty() || s.trim_start().starts_with('#') {
                continue;
            }
            let row = ReferenceRow::from_str(i + 1, s, catalog)?;
            verbose_println!(
                "line {:3}: {:>4} {:<4} {:<8} {:<34} -> {:<8} {}",
                row.line,
                row.opcode_hex,
                row.mnemonic,
                row.alias,
                format!("\"{}\"", row.description),
                catalog.symbol(row.mode),
                catalog.name(row.mode)
            );
            rows.push(row);
        }
        Ok(ReferenceTable { rows })
    }
    pub fn builtin(catalog: &Catalog) -> Result<Self, Error> { ReferenceTable::from_str_iter(BUILTIN_TABLE.lines(), catalog) }
    pub fn read_from_file(path: &Path, catalog: &Catalog) -> Result<Self, Error> {
        let lines = BufReader::new(File::open(path)?)
            .lines()
            .collect::<Result<Vec<String>, io::Error>>()?;
        ReferenceTable::from_str_iter(lines, catalog)
    }
}

use std::ops::Deref;
impl Deref for ReferenceTable {
    type Target = Vec<ReferenceRow>;
    fn deref(&self) -> &Self::Target { &self.rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(s: &str) -> Result<ReferenceRow, Error> { ReferenceRow::from_str(1, s, &Catalog::new()?) }

    #[test]
    fn immediate_is_sized_by_mnemonic() -> Result<(), Error> {
        let cat = Catalog::new()?;
        let ldx = row("LDX #const\t\t2*\tA2\tImmediate")?;
        assert_eq!(cat.mode(ldx.mode), Mode::ImmediateIndex);
        assert_eq!(cat.name(ldx.mode), "Immediate (size of index)");
        let lda = row("LDA #const\t\t2*\tA9\timmediate")?;
        assert_eq!(cat.mode(lda.mode), Mode::ImmediateMemory);
        assert_eq!(cat.name(lda.mode), "Immediate (size of accumulator)");
        let rep = row("REP #const\t\t2\tC2\tIMMEDIATE")?;
        assert_eq!(cat.mode(rep.mode), Mode::Immediate8);
        Ok(())
    }
    #[test]
    fn unknown_immediate_mnemonic_fails() {
        let e = row("STA #const\t\t2\t89\tImmediate").err();
        assert_eq!(e.map(|e| e.kind), Some(ErrorKind::UnknownImmediateMnemonic));
    }
    #[test]
    fn fields_are_extracted() -> Result<(), Error> {
        let r = row("tcs\tTAS\t1\t1b\tImplied\t2")?;
        assert_eq!(r.mnemonic, "TCS");
        assert_eq!(r.alias, "TAS");
        assert_eq!(r.opcode, 0x1b);
        assert_eq!(r.opcode_hex, "1b");
        assert_eq!(r.description, "Implied");
        assert_eq!(row("JML [addr]\t\t3\t0xDC\tAbsolute Indirect Long")?.opcode, 0xdc);
        assert_eq!(row("WDM\t\t2\t$42\t")?.opcode, 0x42);
        Ok(())
    }
    #[test]
    fn mixed_case_correction_matches_canonical() -> Result<(), Error> {
        let a = row("LDA (dp)\t\t2\tB2\tDP Indirect")?;
        let b = row("LDA (dp)\t\t2\tB2\tDirect indirect")?;
        assert_eq!(a.mode, b.mode);
        Ok(())
    }
    #[test]
    fn malformed_rows_fail() {
        for bad in [
            "LDA dp\t\t2\tA5",
            "LDA dp\t\t2\tA5G\tDirect Page",
            "LDA dp\t\t2\t1A5\tDirect Page",
            "\t\t2\tA5\tDirect Page",
        ] {
            assert_eq!(row(bad).err().map(|e| e.kind), Some(ErrorKind::Syntax), "{}", bad);
        }
        assert_eq!(
            row("LDA dp\t\t2\tA5\tDirect Page Sideways").err().map(|e| e.kind),
            Some(ErrorKind::UnresolvedAddressingMode)
        );
    }
    #[test]
    fn builtin_table_parses() -> Result<(), Error> {
        let t = ReferenceTable::builtin(&Catalog::new()?)?;
        assert_eq!(t.len(), 256);
        // listing order is by mnemonic, not by opcode
        assert_eq!(t[0].mnemonic, "ADC");
        Ok(())
    }
    #[test]
    fn comments_keep_line_numbers() -> Result<(), Error> {
        let src = ["# header", "", "NOP\t\t1\tEA\tImplied"];
        let t = ReferenceTable::from_str_iter(src, &Catalog::new()?)?;
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].line, 3);
        Ok(())
    }
}
