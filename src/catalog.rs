//! The 65816 addressing-mode catalog.
//!
//! Mode names and symbols follow the WDC W65C816S datasheet (page 37). Reference listings
//! scraped from the web use their own phrasing for many modes, so the catalog also carries
//! a correction map from those phrases to catalog symbols. Both are checked when the
//! catalog is built; an unknown correction target is an error, not a silent miss.
use super::*;

/// Every addressing-mode tag the table compiler knows about.
/// The first 25 variants are the catalog modes, in catalog order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Mode {
    ImmediateMemory,
    ImmediateIndex,
    Immediate8,
    Branch8,
    Branch16,
    Implied,
    Stack,
    DirectPage,
    DirectPageIndexedX,
    DirectPageIndexedY,
    DirectPageIndirect,
    DirectPageIndexedXIndirect,
    DirectPageIndirectIndexedY,
    DirectPageIndirectLong,
    DirectPageIndirectLongIndexedY,
    Absolute,
    AbsoluteIndexedX,
    AbsoluteIndexedY,
    AbsoluteLong,
    AbsoluteLongIndexedX,
    StackRelative,
    StackRelativeIndirectIndexedY,
    AbsoluteIndirect,
    AbsoluteIndexedXIndirect,
    BlockMove,

    /****** used only by manual overrides ******/
    Accumulator,
    AbsoluteIndirectLong,
    /*******************************************/
    /// no catalog mode applies; consult the size class instead
    Manual,
}
impl Mode {
    /// Name used for this mode in the generated `Operand` enumeration.
    pub fn tag(&self) -> &'static str {
        match self {
            Mode::ImmediateMemory => "IMMEDIATE_MEMORY",
            Mode::ImmediateIndex => "IMMEDIATE_INDEX",
            Mode::Immediate8 => "IMMEDIATE_8",
            Mode::Branch8 => "BRANCH_8",
            Mode::Branch16 => "BRANCH_16",
            Mode::Implied => "IMPLIED",
            Mode::Stack => "STACK",
            Mode::DirectPage => "DIRECT_PAGE",
            Mode::DirectPageIndexedX => "DIRECT_PAGE_INDEXED_X",
            Mode::DirectPageIndexedY => "DIRECT_PAGE_INDEXED_Y",
            Mode::DirectPageIndirect => "DIRECT_PAGE_INDIRECT",
            Mode::DirectPageIndexedXIndirect => "DIRECT_PAGE_INDEXED_X_INDIRECT",
            Mode::DirectPageIndirectIndexedY => "DIRECT_PAGE_INDIRECT_INDEXED_Y",
            Mode::DirectPageIndirectLong => "DIRECT_PAGE_INDIRECT_LONG",
            Mode::DirectPageIndirectLongIndexedY => "DIRECT_PAGE_INDIRECT_LONG_INDEXED_Y",
            Mode::Absolute => "ABSOLUTE",
            Mode::AbsoluteIndexedX => "ABSOLUTE_INDEXED_X",
            Mode::AbsoluteIndexedY => "ABSOLUTE_INDEXED_Y",
            Mode::AbsoluteLong => "ABSOLUTE_LONG",
            Mode::AbsoluteLongIndexedX => "ABSOLUTE_LONG_INDEXED_X",
            Mode::StackRelative => "STACK_RELATIVE",
            Mode::StackRelativeIndirectIndexedY => "STACK_RELATIVE_INDIRECT_INDEXED_Y",
            Mode::AbsoluteIndirect => "ABSOLUTE_INDIRECT",
            Mode::AbsoluteIndexedXIndirect => "ABSOLUTE_INDEXED_X_INDIRECT",
            Mode::BlockMove => "BLOCK_MOVE",
            Mode::Accumulator => "ACCUMULATOR",
            Mode::AbsoluteIndirectLong => "ABSOLUTE_INDIRECT_LONG",
            Mode::Manual => "MANUAL",
        }
    }
    pub fn is_immediate(&self) -> bool {
        matches!(self, Mode::ImmediateMemory | Mode::ImmediateIndex | Mode::Immediate8)
    }
}
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.tag()) }
}

/// One catalog entry: datasheet symbol, datasheet name and the mode it stands for.
#[derive(Debug)]
pub struct ModeDef {
    pub symbol: &'static str,
    pub name: &'static str,
    pub mode: Mode,
}
type D = ModeDef;

#[rustfmt::skip]
pub const ADDRESSING_MODES: [ModeDef; 25] = [
    D{symbol:"#A",      name:"Immediate (size of accumulator)",  mode:Mode::ImmediateMemory},
    D{symbol:"#X",      name:"Immediate (size of index)",        mode:Mode::ImmediateIndex},
    D{symbol:"#8",      name:"Immediate 8-bit",                  mode:Mode::Immediate8},
    D{symbol:"r",       name:"Program Counter Relative",         mode:Mode::Branch8},
    D{symbol:"rl",      name:"Program Counter Relative long",    mode:Mode::Branch16},
    D{symbol:"I",       name:"Implied",                          mode:Mode::Implied},
    D{symbol:"s",       name:"Stack",                            mode:Mode::Stack},
    D{symbol:"d",       name:"Direct",                           mode:Mode::DirectPage},
    D{symbol:"d,x",     name:"Direct indexed,X",                 mode:Mode::DirectPageIndexedX},
    D{symbol:"d,y",     name:"Direct indexed,Y",                 mode:Mode::DirectPageIndexedY},
    D{symbol:"(d)",     name:"Direct indirect",                  mode:Mode::DirectPageIndirect},
    D{symbol:"(d,x)",   name:"Direct indexed indirect",          mode:Mode::DirectPageIndexedXIndirect},
    D{symbol:"(d),y",   name:"Direct indirect indexed",          mode:Mode::DirectPageIndirectIndexedY},
    D{symbol:"[d]",     name:"Direct indirect long",             mode:Mode::DirectPageIndirectLong},
    D{symbol:"[d],y",   name:"Direct indirect indexed long,Y",   mode:Mode::DirectPageIndirectLongIndexedY},
    D{symbol:"a",       name:"Absolute",                         mode:Mode::Absolute},
    D{symbol:"a,x",     name:"Absolute indexed,X",               mode:Mode::AbsoluteIndexedX},
    D{symbol:"a,y",     name:"Absolute indexed,Y",               mode:Mode::AbsoluteIndexedY},
    D{symbol:"al",      name:"Absolute long",                    mode:Mode::AbsoluteLong},
    D{symbol:"al,x",    name:"Absolute indexed long",            mode:Mode::AbsoluteLongIndexedX},
    D{symbol:"d,s",     name:"Stack relative",                   mode:Mode::StackRelative},
    D{symbol:"(d,s),y", name:"Stack relative indirect indexed,Y",mode:Mode::StackRelativeIndirectIndexedY},
    D{symbol:"(a)",     name:"Absolute indirect",                mode:Mode::AbsoluteIndirect},
    D{symbol:"(a,x)",   name:"Absolute indexed indirect",        mode:Mode::AbsoluteIndexedXIndirect},
    D{symbol:"xyc",     name:"Block move",                       mode:Mode::BlockMove},
];

/// Alternate mode phrases found in reference listings, mapped to catalog symbols.
/// Keys are compared lowercased.
#[rustfmt::skip]
pub const CORRECTIONS: &[(&str, &str)] = &[
    ("dp indexed indirect,x",         "(d,x)"),
    ("dp indexed indirect, y",        "(d),y"),
    ("direct page",                   "d"),
    ("dp indirect long",              "[d]"),
    ("dp indirect indexed, y",        "(d),y"),
    ("dp indirect long indexed, y",   "[d],y"),
    ("dp indirect",                   "(d)"),
    ("dp indexed,x",                  "d,x"),
    ("dp indexed,y",                  "d,y"),
    ("sr indirect indexed,y",         "(d,s),y"),
    ("absolute long indexed,x",       "al,x"),
    ("accumulator",                   "I"),
    ("stack (dp indirect)",           "s"),
    ("stack (pc relative long)",      "s"),
    ("stack/interrupt",               "s"),
    ("stack (absolute)",              "s"),
    ("stack (push)",                  "s"),
    ("stack (pull)",                  "s"),
    ("stack (rti)",                   "s"),
    ("stack (rtl)",                   "s"),
    ("stack (rts)",                   "s"),
    ("absolute indirect long",        "(a)"),
    ("",                              "I"),
];

/// A validated addressing-mode catalog with its correction map.
pub struct Catalog {
    modes: &'static [ModeDef],
    by_name: HashMap<String, usize>,
    corrections: HashMap<String, usize>,
}
impl Catalog {
    /// The standard 65816 catalog.
    pub fn new() -> Result<Catalog, Error> { Catalog::with_corrections(&ADDRESSING_MODES, CORRECTIONS) }

    pub fn with_corrections(modes: &'static [ModeDef], corrections: &[(&str, &str)]) -> Result<Catalog, Error> {
        let mut by_name = HashMap::new();
        let mut by_symbol = HashMap::new();
        let mut seen_modes = HashSet::new();
        for (i, md) in modes.iter().enumerate() {
            if md.mode == Mode::Manual {
                return Err(row_err!(ErrorKind::Catalog, None, "catalog entry \"{}\" cannot be MANUAL", md.symbol));
            }
            if by_symbol.insert(md.symbol, i).is_some() {
                return Err(row_err!(ErrorKind::Catalog, None, "duplicate catalog symbol \"{}\"", md.symbol));
            }
            if by_name.insert(md.name.to_lowercase(), i).is_some() {
                return Err(row_err!(ErrorKind::Catalog, None, "duplicate catalog description \"{}\"", md.name));
            }
            if !seen_modes.insert(md.mode) {
                return Err(row_err!(ErrorKind::Catalog, None, "mode {} appears twice in the catalog", md.mode));
            }
        }
        let mut fixes = HashMap::new();
        for &(phrase, symbol) in corrections {
            let idx = by_symbol.get(symbol).copied().ok_or_else(|| {
                row_err!(
                    ErrorKind::Catalog,
                    None,
                    "correction \"{}\" targets unknown symbol \"{}\"",
                    phrase,
                    symbol
                )
            })?;
            let key = phrase.trim().to_lowercase();
            if by_name.contains_key(&key) {
                return Err(row_err!(
                    ErrorKind::Catalog,
                    None,
                    "correction \"{}\" shadows a catalog description",
                    phrase
                ));
            }
            if fixes.insert(key, idx).is_some() {
                return Err(row_err!(ErrorKind::Catalog, None, "duplicate correction \"{}\"", phrase));
            }
        }
        Ok(Catalog {
            modes,
            by_name,
            corrections: fixes,
        })
    }

    /// Resolve a mode description to a catalog index.
    /// Canonical names win over corrections; both comparisons ignore case and surrounding whitespace.
    pub fn resolve(&self, description: &str) -> Result<usize, Error> {
        let key = description.trim().to_lowercase();
        self.by_name
            .get(&key)
            .or_else(|| self.corrections.get(&key))
            .copied()
            .ok_or_else(|| {
                row_err!(
                    ErrorKind::UnresolvedAddressingMode,
                    None,
                    "unresolved addressing mode \"{}\"",
                    description.trim()
                )
            })
    }
    pub fn index_of(&self, mode: Mode) -> Option<usize> { self.modes.iter().position(|md| md.mode == mode) }
    pub fn mode(&self, idx: usize) -> Mode { self.modes[idx].mode }
    pub fn symbol(&self, idx: usize) -> &'static str { self.modes[idx].symbol }
    pub fn name(&self, idx: usize) -> &'static str { self.modes[idx].name }
    #[cfg(test)]
    pub fn len(&self) -> usize { self.modes.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_consistent() -> Result<(), Error> {
        let cat = Catalog::new()?;
        assert_eq!(cat.len(), 25);
        for i in 0..cat.len() {
            assert_eq!(cat.index_of(cat.mode(i)), Some(i));
            assert_eq!(cat.resolve(cat.name(i))?, i);
        }
        assert!(cat.index_of(Mode::Manual).is_none());
        assert!(cat.index_of(Mode::Accumulator).is_none());
        Ok(())
    }
    #[test]
    fn resolution_ignores_case_and_padding() -> Result<(), Error> {
        let cat = Catalog::new()?;
        let canonical = cat.resolve("Direct indirect")?;
        assert_eq!(cat.resolve("DP Indirect")?, canonical);
        assert_eq!(cat.resolve("  dp indirect ")?, canonical);
        assert_eq!(cat.symbol(canonical), "(d)");
        assert_eq!(cat.mode(cat.resolve("ABSOLUTE LONG")?), Mode::AbsoluteLong);
        Ok(())
    }
    #[test]
    fn empty_description_is_implied() -> Result<(), Error> {
        let cat = Catalog::new()?;
        assert_eq!(cat.mode(cat.resolve("")?), Mode::Implied);
        assert_eq!(cat.mode(cat.resolve("   ")?), Mode::Implied);
        Ok(())
    }
    #[test]
    fn unknown_description_fails() -> Result<(), Error> {
        let cat = Catalog::new()?;
        match cat.resolve("Direct Page Sideways") {
            Err(e) => assert_eq!(e.kind, ErrorKind::UnresolvedAddressingMode),
            Ok(i) => panic!("resolved to {}", cat.symbol(i)),
        }
        Ok(())
    }
    #[test]
    fn bad_correction_target_rejected() {
        let e = Catalog::with_corrections(&ADDRESSING_MODES, &[("direct page", "dp")]).err();
        assert_eq!(e.map(|e| e.kind), Some(ErrorKind::Catalog));
    }
    #[test]
    fn duplicate_correction_rejected() {
        let e = Catalog::with_corrections(&ADDRESSING_MODES, &[("dp indirect", "(d)"), ("DP Indirect ", "[d]")]).err();
        assert_eq!(e.map(|e| e.kind), Some(ErrorKind::Catalog));
    }
    #[test]
    fn correction_shadowing_a_description_rejected() {
        let e = Catalog::with_corrections(&ADDRESSING_MODES, &[("absolute long", "al,x")]).err();
        assert_eq!(e.map(|e| e.kind), Some(ErrorKind::Catalog));
    }
    #[test]
    fn duplicate_symbol_rejected() {
        static DUP: [ModeDef; 2] = [
            D { symbol: "d", name: "Direct", mode: Mode::DirectPage },
            D { symbol: "d", name: "Direct again", mode: Mode::DirectPageIndexedX },
        ];
        let e = Catalog::with_corrections(&DUP, &[]).err();
        assert_eq!(e.map(|e| e.kind), Some(ErrorKind::Catalog));
    }
}
