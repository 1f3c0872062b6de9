//! Merging the reference listing with the manual overrides.
//!
//! Building the canonical table is a two-step process:
//!
//!  1. Remap the listing rows into a 256-slot array indexed by opcode. Every opcode must be
//!     listed exactly once; a gap or a collision stops the build.
//!  2. For each opcode, take the override if there is one, otherwise the listing row, and
//!     derive the operand-load flag from the resulting mnemonic and mode.
//!
//! The `Operation`, `InstructionSize` and `Operand` enumerations are derived afterwards from
//! the finished table, never accumulated while building it.
use super::catalog::{Catalog, Mode};
use super::overrides::{OverrideTable, SizeClass};
use super::reference::ReferenceRow;
use super::*;

use std::ops::Index;

/// The final description of one opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalEntry {
    pub opcode: u8,
    /// canonical operation
    pub op: String,
    /// mnemonic as written in the reference listing (as used in an assembler)
    pub mnemonic: String,
    pub size: SizeClass,
    /// catalog mode, or MANUAL for overridden opcodes
    pub operand: Mode,
    pub load_operand: bool,
    /// assembler display alias; always empty for overridden opcodes
    pub alias: String,
    /// the mode the override declared, kept for listings
    pub override_mode: Option<Mode>,
}
impl CanonicalEntry {
    pub fn is_overridden(&self) -> bool { self.override_mode.is_some() }
}
impl fmt::Display for CanonicalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02X} {:<4} {:<6} {:<35} {:<5}",
            self.opcode, self.op, self.size, self.operand, self.load_operand
        )?;
        if let Some(m) = self.override_mode {
            write!(f, " override:{}", m)?;
        }
        if !self.alias.is_empty() {
            write!(f, " alias:{}", self.alias)?;
        }
        Ok(())
    }
}

/// Does executing `op` in `mode` read the addressed operand first?
/// Jumps, calls, pure stores and branches (BIT excepted) don't, and neither does anything
/// without a memory operand.
pub fn operand_load(op: &str, mode: Mode) -> bool {
    if matches!(op, "JSR" | "JSL" | "JMP" | "JML" | "STA" | "STZ" | "STX" | "STY") {
        return false;
    }
    if op.starts_with('B') && op != "BIT" {
        return false;
    }
    !(mode == Mode::Accumulator || mode.is_immediate() || mode == Mode::Manual)
}

/// Map each opcode to the index of the one listing row that describes it.
pub fn remap(rows: &[ReferenceRow]) -> Result<[usize; 256], Error> {
    let mut slots: [Option<usize>; 256] = [None; 256];
    for (i, row) in rows.iter().enumerate() {
        let slot = &mut slots[row.opcode as usize];
        if let Some(prev) = *slot {
            return Err(row_err!(
                ErrorKind::IncompleteOpcodeCoverage,
                None,
                "opcode 0x{:02X} is listed twice (line {} {} and line {} {})",
                row.opcode,
                rows[prev].line,
                rows[prev].mnemonic,
                row.line,
                row.mnemonic
            ));
        }
        *slot = Some(i);
    }
    let missing: Vec<String> = slots
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_none())
        .map(|(op, _)| format!("0x{:02X}", op))
        .collect();
    if !missing.is_empty() {
        return Err(row_err!(
            ErrorKind::IncompleteOpcodeCoverage,
            None,
            "{} opcode(s) missing from the reference table: {}",
            missing.len(),
            missing.join(" ")
        ));
    }
    Ok(slots.map(|s| s.unwrap_or_default()))
}

/// Build the canonical 256-entry table. Either every opcode is described or nothing is returned.
pub fn reconcile(catalog: &Catalog, rows: &[ReferenceRow], overrides: &OverrideTable) -> Result<OpcodeTable, Error> {
    let map = remap(rows)?;
    let mut entries = Vec::with_capacity(256);
    for opcode in 0..=255u8 {
        let row = &rows[map[opcode as usize]];
        let entry = match overrides.lookup(opcode) {
            Some(ov) => {
                if ov.op != row.mnemonic {
                    warn!(
                        "override for 0x{:02X} says {} but line {} lists {}",
                        opcode, ov.op, row.line, row.mnemonic
                    );
                }
                CanonicalEntry {
                    opcode,
                    op: ov.op.to_string(),
                    mnemonic: row.mnemonic.clone(),
                    size: ov.size.normalized(),
                    operand: Mode::Manual,
                    load_operand: operand_load(ov.op, Mode::Manual),
                    alias: String::new(),
                    override_mode: Some(ov.mode),
                }
            }
            None => {
                let mode = catalog.mode(row.mode);
                CanonicalEntry {
                    opcode,
                    op: row.mnemonic.clone(),
                    mnemonic: row.mnemonic.clone(),
                    size: SizeClass::Small,
                    operand: mode,
                    load_operand: operand_load(&row.mnemonic, mode),
                    alias: row.alias.clone(),
                    override_mode: None,
                }
            }
        };
        entries.push(entry);
    }
    Ok(OpcodeTable { entries })
}

/// The reconciled table; always exactly 256 entries in opcode order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeTable {
    entries: Vec<CanonicalEntry>,
}
impl OpcodeTable {
    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalEntry> { self.entries.iter() }
    pub fn enumerations(&self) -> Enumerations {
        let mut operations = BTreeSet::new();
        let mut sizes = BTreeSet::new();
        let mut operands = BTreeSet::new();
        sizes.insert(SizeClass::Wide.tag());
        for e in self.iter() {
            operations.insert(e.op.as_str());
            sizes.insert(e.size.tag());
            operands.insert(e.operand.tag());
        }
        Enumerations {
            operations: operations.into_iter().map(String::from).collect(),
            sizes: sizes.into_iter().collect(),
            operands: operands.into_iter().collect(),
        }
    }
}
impl Index<u8> for OpcodeTable {
    type Output = CanonicalEntry;
    fn index(&self, opcode: u8) -> &Self::Output { &self.entries[opcode as usize] }
}

/// Sorted, deduplicated member names of the three generated enumerations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerations {
    pub operations: Vec<String>,
    pub sizes: Vec<&'static str>,
    pub operands: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::{OverrideEntry, OVERRIDES};
    use crate::reference::ReferenceTable;

    fn builtin() -> Result<(Catalog, ReferenceTable, OverrideTable), Error> {
        let catalog = Catalog::new()?;
        let reference = ReferenceTable::builtin(&catalog)?;
        Ok((catalog, reference, OverrideTable::builtin()?))
    }

    #[test]
    fn every_opcode_has_one_entry() -> Result<(), Error> {
        let (cat, rows, ovr) = builtin()?;
        let table = reconcile(&cat, &rows, &ovr)?;
        assert_eq!(table.iter().count(), 256);
        for (i, e) in table.iter().enumerate() {
            assert_eq!(e.opcode as usize, i);
        }
        Ok(())
    }
    #[test]
    fn overrides_win() -> Result<(), Error> {
        let (cat, rows, ovr) = builtin()?;
        let table = reconcile(&cat, &rows, &ovr)?;
        for ov in OVERRIDES {
            let e = &table[ov.opcode];
            assert_eq!(e.op, ov.op);
            assert_eq!(e.size, ov.size.normalized());
            assert_eq!(e.operand, Mode::Manual);
            assert!(e.alias.is_empty());
            assert_eq!(e.override_mode, Some(ov.mode));
        }
        assert_eq!(table.iter().filter(|e| e.is_overridden()).count(), OVERRIDES.len());
        assert!(table.iter().all(|e| e.size != SizeClass::None));
        Ok(())
    }
    #[test]
    fn unmodified_entries_round_trip_through_catalog() -> Result<(), Error> {
        let (cat, rows, ovr) = builtin()?;
        let table = reconcile(&cat, &rows, &ovr)?;
        for row in rows.iter().filter(|r| ovr.lookup(r.opcode).is_none()) {
            let e = &table[row.opcode];
            assert_eq!(e.op, row.mnemonic);
            assert_eq!(e.alias, row.alias);
            assert_eq!(e.size, SizeClass::Small);
            let idx = cat.index_of(e.operand).ok_or_else(|| general_err!("mode not in catalog"))?;
            if !row.description.eq_ignore_ascii_case("immediate") {
                assert_eq!(cat.resolve(&row.description)?, idx, "line {}", row.line);
            }
        }
        assert_eq!(table[0x1B].alias, "TAS");
        assert_eq!(table[0xEB].operand, Mode::Implied);
        assert_eq!(table[0x54].operand, Mode::BlockMove);
        assert_eq!(table[0xC2].operand, Mode::Immediate8);
        Ok(())
    }
    #[test]
    fn operand_load_rule() {
        assert!(operand_load("BIT", Mode::DirectPage));
        assert!(operand_load("PHP", Mode::Stack));
        assert!(operand_load("LDA", Mode::Absolute));
        assert!(!operand_load("BRK", Mode::Stack));
        assert!(!operand_load("BRL", Mode::Branch16));
        assert!(!operand_load("LDA", Mode::ImmediateMemory));
        assert!(!operand_load("SEP", Mode::Immediate8));
        assert!(!operand_load("STA", Mode::Absolute));
        assert!(!operand_load("JML", Mode::AbsoluteLong));
        assert!(!operand_load("ASL", Mode::Accumulator));
        assert!(!operand_load("ADC", Mode::Manual));
    }
    #[test]
    fn operand_load_applied_everywhere() -> Result<(), Error> {
        let (cat, rows, ovr) = builtin()?;
        let table = reconcile(&cat, &rows, &ovr)?;
        for e in table.iter() {
            let no_load = matches!(e.op.as_str(), "JSR" | "JSL" | "JMP" | "JML" | "STA" | "STZ" | "STX" | "STY")
                || (e.op.starts_with('B') && e.op != "BIT")
                || e.operand == Mode::Accumulator
                || e.operand.is_immediate()
                || e.operand == Mode::Manual;
            assert_eq!(e.load_operand, !no_load, "{}", e);
        }
        assert!(table[0x08].load_operand);
        assert!(!table[0xAD].load_operand);
        Ok(())
    }
    #[test]
    fn missing_opcode_is_reported() -> Result<(), Error> {
        let (cat, rows, ovr) = builtin()?;
        let partial: Vec<ReferenceRow> = rows.iter().filter(|r| r.opcode != 0xEA).cloned().collect();
        match reconcile(&cat, &partial, &ovr) {
            Err(e) => {
                assert_eq!(e.kind, ErrorKind::IncompleteOpcodeCoverage);
                assert!(e.msg.contains("0xEA"), "{}", e.msg);
            }
            Ok(_) => panic!("incomplete table accepted"),
        }
        Ok(())
    }
    #[test]
    fn duplicate_opcode_is_reported() -> Result<(), Error> {
        let (_, rows, _) = builtin()?;
        let mut dup: Vec<ReferenceRow> = rows.to_vec();
        let mut extra = dup[0].clone();
        extra.line = 999;
        dup.push(extra);
        let e = remap(&dup).err().ok_or_else(|| general_err!("duplicate accepted"))?;
        assert_eq!(e.kind, ErrorKind::IncompleteOpcodeCoverage);
        assert!(e.msg.contains("line 999"));
        Ok(())
    }
    #[test]
    fn remap_ignores_listing_order() -> Result<(), Error> {
        let (_, rows, _) = builtin()?;
        let map = remap(&rows)?;
        for (op, &i) in map.iter().enumerate() {
            assert_eq!(rows[i].opcode as usize, op);
        }
        let mut reversed: Vec<ReferenceRow> = rows.to_vec();
        reversed.reverse();
        let rmap = remap(&reversed)?;
        for op in 0..256 {
            assert_eq!(reversed[rmap[op]].opcode, rows[map[op]].opcode);
        }
        Ok(())
    }
    #[test]
    fn enumerations_are_sorted_and_complete() -> Result<(), Error> {
        let (cat, rows, ovr) = builtin()?;
        let en = reconcile(&cat, &rows, &ovr)?.enumerations();
        assert_eq!(en.sizes, vec!["INDEX", "MEMORY", "SMALL", "WIDE"]);
        assert!(en.operands.contains(&"MANUAL"));
        assert!(!en.operands.contains(&"ACCUMULATOR"));
        assert!(en.operations.windows(2).all(|w| w[0] < w[1]));
        assert!(en.operands.windows(2).all(|w| w[0] < w[1]));
        assert!(en.operations.iter().any(|o| o == "XCE"));
        Ok(())
    }
    #[test]
    fn small_synthetic_table() -> Result<(), Error> {
        let cat = Catalog::new()?;
        let src: Vec<String> = (0..256).map(|op| format!("NOP\tNOP{}\t1\t{:02X}\tImplied", op, op)).collect();
        let rows = ReferenceTable::from_str_iter(src, &cat)?;
        let ovr = OverrideTable::new(&[OverrideEntry {
            opcode: 0x10,
            op: "BRA",
            mode: Mode::Branch8,
            size: SizeClass::None,
        }])?;
        let table = reconcile(&cat, &rows, &ovr)?;
        assert_eq!(table[0x10].op, "BRA");
        assert_eq!(table[0x10].size, SizeClass::Small);
        assert_eq!(table[0x11].alias, "NOP17");
        assert!(table[0x11].load_operand);
        let en = table.enumerations();
        assert_eq!(en.operations, vec!["BRA".to_string(), "NOP".to_string()]);
        assert_eq!(en.sizes, vec!["SMALL", "WIDE"]);
        assert_eq!(en.operands, vec!["IMPLIED", "MANUAL"]);
        Ok(())
    }
}
