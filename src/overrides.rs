//! Hand-maintained opcode classifications.
//!
//! The reference listing cannot tell accumulator shifts from memory shifts, carries no operand
//! width for branches, and does not mark the X/Y register instructions as index-sized. The
//! entries below are taken as given and bypass automatic classification entirely.
use super::catalog::Mode;
use super::*;

/// Operand width category of an instruction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum SizeClass {
    /// no operand width; only appears in overrides and becomes SMALL in the final table
    None,
    /// width follows the X flag
    Index,
    /// width follows the M flag
    Memory,
    Small,
    /// never produced today; kept in the generated enumeration for 24-bit operands
    Wide,
}
impl SizeClass {
    pub fn tag(&self) -> &'static str {
        match self {
            SizeClass::None => "NONE",
            SizeClass::Index => "INDEX",
            SizeClass::Memory => "MEMORY",
            SizeClass::Small => "SMALL",
            SizeClass::Wide => "WIDE",
        }
    }
    pub fn normalized(self) -> SizeClass {
        match self {
            SizeClass::None => SizeClass::Small,
            s => s,
        }
    }
}
impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.tag()) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideEntry {
    pub opcode: u8,
    pub op: &'static str,
    pub mode: Mode,
    pub size: SizeClass,
}
type O = OverrideEntry;

#[rustfmt::skip]
pub const OVERRIDES: &[OverrideEntry] = &[
    O{opcode:0x24, op:"BIT", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x2C, op:"BIT", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x34, op:"BIT", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0x3C, op:"BIT", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x89, op:"BIT", mode:Mode::ImmediateMemory,                   size:SizeClass::Memory},
    O{opcode:0x1A, op:"INC", mode:Mode::Accumulator,                       size:SizeClass::Memory},
    O{opcode:0xE6, op:"INC", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0xEE, op:"INC", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0xF6, op:"INC", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0xFE, op:"INC", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x3A, op:"DEC", mode:Mode::Accumulator,                       size:SizeClass::Memory},
    O{opcode:0xC6, op:"DEC", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0xCE, op:"DEC", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0xD6, op:"DEC", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0xDE, op:"DEC", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x26, op:"ROL", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x2A, op:"ROL", mode:Mode::Accumulator,                       size:SizeClass::Memory},
    O{opcode:0x2E, op:"ROL", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x36, op:"ROL", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0x3E, op:"ROL", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x66, op:"ROR", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x6A, op:"ROR", mode:Mode::Accumulator,                       size:SizeClass::Memory},
    O{opcode:0x6E, op:"ROR", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x76, op:"ROR", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0x7E, op:"ROR", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x06, op:"ASL", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x0A, op:"ASL", mode:Mode::Accumulator,                       size:SizeClass::Memory},
    O{opcode:0x0E, op:"ASL", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x16, op:"ASL", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0x1E, op:"ASL", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x46, op:"LSR", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x4A, op:"LSR", mode:Mode::Accumulator,                       size:SizeClass::Memory},
    O{opcode:0x4E, op:"LSR", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x56, op:"LSR", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0x5E, op:"LSR", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x90, op:"BCC", mode:Mode::Branch8,                           size:SizeClass::None},
    O{opcode:0xB0, op:"BCS", mode:Mode::Branch8,                           size:SizeClass::None},
    O{opcode:0xF0, op:"BEQ", mode:Mode::Branch8,                           size:SizeClass::None},
    O{opcode:0x30, op:"BMI", mode:Mode::Branch8,                           size:SizeClass::None},
    O{opcode:0xD0, op:"BNE", mode:Mode::Branch8,                           size:SizeClass::None},
    O{opcode:0x10, op:"BPL", mode:Mode::Branch8,                           size:SizeClass::None},
    O{opcode:0x80, op:"BRA", mode:Mode::Branch8,                           size:SizeClass::None},
    O{opcode:0x82, op:"BRL", mode:Mode::Branch16,                          size:SizeClass::None},
    O{opcode:0x50, op:"BVC", mode:Mode::Branch8,                           size:SizeClass::None},
    O{opcode:0x70, op:"BVS", mode:Mode::Branch8,                           size:SizeClass::None},
    O{opcode:0x4C, op:"JMP", mode:Mode::Absolute,                          size:SizeClass::None},
    O{opcode:0x6C, op:"JMP", mode:Mode::AbsoluteIndirect,                  size:SizeClass::None},
    O{opcode:0x7C, op:"JMP", mode:Mode::AbsoluteIndexedXIndirect,          size:SizeClass::None},
    O{opcode:0x5C, op:"JML", mode:Mode::AbsoluteLong,                      size:SizeClass::None},
    O{opcode:0xDC, op:"JML", mode:Mode::AbsoluteIndirectLong,              size:SizeClass::None},
    O{opcode:0x20, op:"JSR", mode:Mode::Absolute,                          size:SizeClass::None},
    O{opcode:0xFC, op:"JSR", mode:Mode::AbsoluteIndexedXIndirect,          size:SizeClass::None},
    O{opcode:0x22, op:"JSL", mode:Mode::AbsoluteLong,                      size:SizeClass::None},
    O{opcode:0x86, op:"STX", mode:Mode::DirectPage,                        size:SizeClass::Index},
    O{opcode:0x8E, op:"STX", mode:Mode::Absolute,                          size:SizeClass::Index},
    O{opcode:0x96, op:"STX", mode:Mode::DirectPageIndexedY,                size:SizeClass::Index},
    O{opcode:0x84, op:"STY", mode:Mode::DirectPage,                        size:SizeClass::Index},
    O{opcode:0x8C, op:"STY", mode:Mode::Absolute,                          size:SizeClass::Index},
    O{opcode:0x94, op:"STY", mode:Mode::DirectPageIndexedX,                size:SizeClass::Index},
    O{opcode:0x64, op:"STZ", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x74, op:"STZ", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0x9C, op:"STZ", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x9E, op:"STZ", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0xA2, op:"LDX", mode:Mode::ImmediateIndex,                    size:SizeClass::Index},
    O{opcode:0xA6, op:"LDX", mode:Mode::DirectPage,                        size:SizeClass::Index},
    O{opcode:0xAE, op:"LDX", mode:Mode::Absolute,                          size:SizeClass::Index},
    O{opcode:0xB6, op:"LDX", mode:Mode::DirectPageIndexedY,                size:SizeClass::Index},
    O{opcode:0xBE, op:"LDX", mode:Mode::AbsoluteIndexedY,                  size:SizeClass::Index},
    O{opcode:0xA0, op:"LDY", mode:Mode::ImmediateIndex,                    size:SizeClass::Index},
    O{opcode:0xA4, op:"LDY", mode:Mode::DirectPage,                        size:SizeClass::Index},
    O{opcode:0xAC, op:"LDY", mode:Mode::Absolute,                          size:SizeClass::Index},
    O{opcode:0xB4, op:"LDY", mode:Mode::DirectPageIndexedX,                size:SizeClass::Index},
    O{opcode:0xBC, op:"LDY", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Index},
    O{opcode:0x04, op:"TSB", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x0C, op:"TSB", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x14, op:"TRB", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x1C, op:"TRB", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0xC0, op:"CPY", mode:Mode::ImmediateIndex,                    size:SizeClass::Index},
    O{opcode:0xC4, op:"CPY", mode:Mode::DirectPage,                        size:SizeClass::Index},
    O{opcode:0xCC, op:"CPY", mode:Mode::Absolute,                          size:SizeClass::Index},
    O{opcode:0xE0, op:"CPX", mode:Mode::ImmediateIndex,                    size:SizeClass::Index},
    O{opcode:0xE4, op:"CPX", mode:Mode::DirectPage,                        size:SizeClass::Index},
    O{opcode:0xEC, op:"CPX", mode:Mode::Absolute,                          size:SizeClass::Index},
    O{opcode:0xA1, op:"LDA", mode:Mode::DirectPageIndexedXIndirect,        size:SizeClass::Memory},
    O{opcode:0xA3, op:"LDA", mode:Mode::StackRelative,                     size:SizeClass::Memory},
    O{opcode:0xA5, op:"LDA", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0xAF, op:"LDA", mode:Mode::AbsoluteLong,                      size:SizeClass::Memory},
    O{opcode:0xA7, op:"LDA", mode:Mode::DirectPageIndirectLong,            size:SizeClass::Memory},
    O{opcode:0xA9, op:"LDA", mode:Mode::ImmediateMemory,                   size:SizeClass::Memory},
    O{opcode:0xAD, op:"LDA", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0xB1, op:"LDA", mode:Mode::DirectPageIndirectIndexedY,        size:SizeClass::Memory},
    O{opcode:0xB2, op:"LDA", mode:Mode::DirectPageIndirect,                size:SizeClass::Memory},
    O{opcode:0xB3, op:"LDA", mode:Mode::StackRelativeIndirectIndexedY,     size:SizeClass::Memory},
    O{opcode:0xB5, op:"LDA", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0xB7, op:"LDA", mode:Mode::DirectPageIndirectLongIndexedY,    size:SizeClass::Memory},
    O{opcode:0xB9, op:"LDA", mode:Mode::AbsoluteIndexedY,                  size:SizeClass::Memory},
    O{opcode:0xBD, op:"LDA", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0xBF, op:"LDA", mode:Mode::AbsoluteLongIndexedX,              size:SizeClass::Memory},
    O{opcode:0x81, op:"STA", mode:Mode::DirectPageIndexedXIndirect,        size:SizeClass::Memory},
    O{opcode:0x83, op:"STA", mode:Mode::StackRelative,                     size:SizeClass::Memory},
    O{opcode:0x85, op:"STA", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x87, op:"STA", mode:Mode::DirectPageIndirectLong,            size:SizeClass::Memory},
    O{opcode:0x8D, op:"STA", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x8F, op:"STA", mode:Mode::AbsoluteLong,                      size:SizeClass::Memory},
    O{opcode:0x91, op:"STA", mode:Mode::DirectPageIndirectIndexedY,        size:SizeClass::Memory},
    O{opcode:0x92, op:"STA", mode:Mode::DirectPageIndirect,                size:SizeClass::Memory},
    O{opcode:0x93, op:"STA", mode:Mode::StackRelativeIndirectIndexedY,     size:SizeClass::Memory},
    O{opcode:0x95, op:"STA", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0x97, op:"STA", mode:Mode::DirectPageIndirectLongIndexedY,    size:SizeClass::Memory},
    O{opcode:0x99, op:"STA", mode:Mode::AbsoluteIndexedY,                  size:SizeClass::Memory},
    O{opcode:0x9D, op:"STA", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x9F, op:"STA", mode:Mode::AbsoluteLongIndexedX,              size:SizeClass::Memory},
    O{opcode:0x61, op:"ADC", mode:Mode::DirectPageIndexedXIndirect,        size:SizeClass::Memory},
    O{opcode:0x63, op:"ADC", mode:Mode::StackRelative,                     size:SizeClass::Memory},
    O{opcode:0x65, op:"ADC", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x67, op:"ADC", mode:Mode::DirectPageIndirectLong,            size:SizeClass::Memory},
    O{opcode:0x69, op:"ADC", mode:Mode::ImmediateMemory,                   size:SizeClass::Memory},
    O{opcode:0x6D, op:"ADC", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x6F, op:"ADC", mode:Mode::AbsoluteLong,                      size:SizeClass::Memory},
    O{opcode:0x71, op:"ADC", mode:Mode::DirectPageIndirectIndexedY,        size:SizeClass::Memory},
    O{opcode:0x72, op:"ADC", mode:Mode::DirectPageIndirect,                size:SizeClass::Memory},
    O{opcode:0x73, op:"ADC", mode:Mode::StackRelativeIndirectIndexedY,     size:SizeClass::Memory},
    O{opcode:0x75, op:"ADC", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0x77, op:"ADC", mode:Mode::DirectPageIndirectLongIndexedY,    size:SizeClass::Memory},
    O{opcode:0x79, op:"ADC", mode:Mode::AbsoluteIndexedY,                  size:SizeClass::Memory},
    O{opcode:0x7D, op:"ADC", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x7F, op:"ADC", mode:Mode::AbsoluteLongIndexedX,              size:SizeClass::Memory},
    O{opcode:0xE1, op:"SBC", mode:Mode::DirectPageIndexedXIndirect,        size:SizeClass::Memory},
    O{opcode:0xE3, op:"SBC", mode:Mode::StackRelative,                     size:SizeClass::Memory},
    O{opcode:0xE5, op:"SBC", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0xE7, op:"SBC", mode:Mode::DirectPageIndirectLong,            size:SizeClass::Memory},
    O{opcode:0xE9, op:"SBC", mode:Mode::ImmediateMemory,                   size:SizeClass::Memory},
    O{opcode:0xED, op:"SBC", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0xEF, op:"SBC", mode:Mode::AbsoluteLong,                      size:SizeClass::Memory},
    O{opcode:0xF1, op:"SBC", mode:Mode::DirectPageIndirectIndexedY,        size:SizeClass::Memory},
    O{opcode:0xF2, op:"SBC", mode:Mode::DirectPageIndirect,                size:SizeClass::Memory},
    O{opcode:0xF3, op:"SBC", mode:Mode::StackRelativeIndirectIndexedY,     size:SizeClass::Memory},
    O{opcode:0xF5, op:"SBC", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0xF7, op:"SBC", mode:Mode::DirectPageIndirectLongIndexedY,    size:SizeClass::Memory},
    O{opcode:0xF9, op:"SBC", mode:Mode::AbsoluteIndexedY,                  size:SizeClass::Memory},
    O{opcode:0xFD, op:"SBC", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0xFF, op:"SBC", mode:Mode::AbsoluteLongIndexedX,              size:SizeClass::Memory},
    O{opcode:0x21, op:"AND", mode:Mode::DirectPageIndexedXIndirect,        size:SizeClass::Memory},
    O{opcode:0x23, op:"AND", mode:Mode::StackRelative,                     size:SizeClass::Memory},
    O{opcode:0x25, op:"AND", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x27, op:"AND", mode:Mode::DirectPageIndirectLong,            size:SizeClass::Memory},
    O{opcode:0x29, op:"AND", mode:Mode::ImmediateMemory,                   size:SizeClass::Memory},
    O{opcode:0x2D, op:"AND", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x2F, op:"AND", mode:Mode::AbsoluteLong,                      size:SizeClass::Memory},
    O{opcode:0x31, op:"AND", mode:Mode::DirectPageIndirectIndexedY,        size:SizeClass::Memory},
    O{opcode:0x32, op:"AND", mode:Mode::DirectPageIndirect,                size:SizeClass::Memory},
    O{opcode:0x33, op:"AND", mode:Mode::StackRelativeIndirectIndexedY,     size:SizeClass::Memory},
    O{opcode:0x35, op:"AND", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0x37, op:"AND", mode:Mode::DirectPageIndirectLongIndexedY,    size:SizeClass::Memory},
    O{opcode:0x39, op:"AND", mode:Mode::AbsoluteIndexedY,                  size:SizeClass::Memory},
    O{opcode:0x3D, op:"AND", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x3F, op:"AND", mode:Mode::AbsoluteLongIndexedX,              size:SizeClass::Memory},
    O{opcode:0xC1, op:"CMP", mode:Mode::DirectPageIndexedXIndirect,        size:SizeClass::Memory},
    O{opcode:0xC3, op:"CMP", mode:Mode::StackRelative,                     size:SizeClass::Memory},
    O{opcode:0xC5, op:"CMP", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0xC7, op:"CMP", mode:Mode::DirectPageIndirectLong,            size:SizeClass::Memory},
    O{opcode:0xC9, op:"CMP", mode:Mode::ImmediateMemory,                   size:SizeClass::Memory},
    O{opcode:0xCD, op:"CMP", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0xCF, op:"CMP", mode:Mode::AbsoluteLong,                      size:SizeClass::Memory},
    O{opcode:0xD1, op:"CMP", mode:Mode::DirectPageIndirectIndexedY,        size:SizeClass::Memory},
    O{opcode:0xD2, op:"CMP", mode:Mode::DirectPageIndirect,                size:SizeClass::Memory},
    O{opcode:0xD3, op:"CMP", mode:Mode::StackRelativeIndirectIndexedY,     size:SizeClass::Memory},
    O{opcode:0xD5, op:"CMP", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0xD7, op:"CMP", mode:Mode::DirectPageIndirectLongIndexedY,    size:SizeClass::Memory},
    O{opcode:0xD9, op:"CMP", mode:Mode::AbsoluteIndexedY,                  size:SizeClass::Memory},
    O{opcode:0xDD, op:"CMP", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0xDF, op:"CMP", mode:Mode::AbsoluteLongIndexedX,              size:SizeClass::Memory},
    O{opcode:0x01, op:"ORA", mode:Mode::DirectPageIndexedXIndirect,        size:SizeClass::Memory},
    O{opcode:0x03, op:"ORA", mode:Mode::StackRelative,                     size:SizeClass::Memory},
    O{opcode:0x05, op:"ORA", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x07, op:"ORA", mode:Mode::DirectPageIndirectLong,            size:SizeClass::Memory},
    O{opcode:0x09, op:"ORA", mode:Mode::ImmediateMemory,                   size:SizeClass::Memory},
    O{opcode:0x0D, op:"ORA", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x0F, op:"ORA", mode:Mode::AbsoluteLong,                      size:SizeClass::Memory},
    O{opcode:0x11, op:"ORA", mode:Mode::DirectPageIndirectIndexedY,        size:SizeClass::Memory},
    O{opcode:0x12, op:"ORA", mode:Mode::DirectPageIndirect,                size:SizeClass::Memory},
    O{opcode:0x13, op:"ORA", mode:Mode::StackRelativeIndirectIndexedY,     size:SizeClass::Memory},
    O{opcode:0x15, op:"ORA", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0x17, op:"ORA", mode:Mode::DirectPageIndirectLongIndexedY,    size:SizeClass::Memory},
    O{opcode:0x19, op:"ORA", mode:Mode::AbsoluteIndexedY,                  size:SizeClass::Memory},
    O{opcode:0x1D, op:"ORA", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x1F, op:"ORA", mode:Mode::AbsoluteLongIndexedX,              size:SizeClass::Memory},
    O{opcode:0x41, op:"EOR", mode:Mode::DirectPageIndexedXIndirect,        size:SizeClass::Memory},
    O{opcode:0x43, op:"EOR", mode:Mode::StackRelative,                     size:SizeClass::Memory},
    O{opcode:0x45, op:"EOR", mode:Mode::DirectPage,                        size:SizeClass::Memory},
    O{opcode:0x47, op:"EOR", mode:Mode::DirectPageIndirectLong,            size:SizeClass::Memory},
    O{opcode:0x49, op:"EOR", mode:Mode::ImmediateMemory,                   size:SizeClass::Memory},
    O{opcode:0x4D, op:"EOR", mode:Mode::Absolute,                          size:SizeClass::Memory},
    O{opcode:0x4F, op:"EOR", mode:Mode::AbsoluteLong,                      size:SizeClass::Memory},
    O{opcode:0x51, op:"EOR", mode:Mode::DirectPageIndirectIndexedY,        size:SizeClass::Memory},
    O{opcode:0x52, op:"EOR", mode:Mode::DirectPageIndirect,                size:SizeClass::Memory},
    O{opcode:0x53, op:"EOR", mode:Mode::StackRelativeIndirectIndexedY,     size:SizeClass::Memory},
    O{opcode:0x55, op:"EOR", mode:Mode::DirectPageIndexedX,                size:SizeClass::Memory},
    O{opcode:0x57, op:"EOR", mode:Mode::DirectPageIndirectLongIndexedY,    size:SizeClass::Memory},
    O{opcode:0x59, op:"EOR", mode:Mode::AbsoluteIndexedY,                  size:SizeClass::Memory},
    O{opcode:0x5D, op:"EOR", mode:Mode::AbsoluteIndexedX,                  size:SizeClass::Memory},
    O{opcode:0x5F, op:"EOR", mode:Mode::AbsoluteLongIndexedX,              size:SizeClass::Memory},
];

/// Overrides indexed by opcode. Built once; at most one entry per opcode.
pub struct OverrideTable {
    slots: [Option<OverrideEntry>; 256],
    count: usize,
}
impl OverrideTable {
    pub fn new(entries: &[OverrideEntry]) -> Result<OverrideTable, Error> {
        let mut slots: [Option<OverrideEntry>; 256] = [None; 256];
        for e in entries {
            let slot = &mut slots[e.opcode as usize];
            if let Some(prev) = slot.as_ref() {
                return Err(row_err!(
                    ErrorKind::DuplicateOverride,
                    None,
                    "duplicate override for opcode 0x{:02X} ({} {} and {} {})",
                    e.opcode,
                    prev.op,
                    prev.mode,
                    e.op,
                    e.mode
                ));
            }
            *slot = Some(*e);
        }
        Ok(OverrideTable {
            slots,
            count: entries.len(),
        })
    }
    pub fn builtin() -> Result<OverrideTable, Error> { OverrideTable::new(OVERRIDES) }
    pub fn lookup(&self, opcode: u8) -> Option<&OverrideEntry> { self.slots[opcode as usize].as_ref() }
    pub fn len(&self) -> usize { self.count }
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &OverrideEntry> { self.slots.iter().flatten() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_overrides_are_unique() -> Result<(), Error> {
        let t = OverrideTable::builtin()?;
        assert_eq!(t.len(), OVERRIDES.len());
        assert_eq!(t.iter().count(), OVERRIDES.len());
        let inc_a = t.lookup(0x1A).ok_or_else(|| general_err!("no override for 0x1A"))?;
        assert_eq!((inc_a.op, inc_a.mode, inc_a.size), ("INC", Mode::Accumulator, SizeClass::Memory));
        assert!(t.lookup(0xEA).is_none());
        Ok(())
    }
    #[test]
    fn duplicate_override_rejected() {
        let twice = [
            O { opcode: 0x1A, op: "INC", mode: Mode::Accumulator, size: SizeClass::Memory },
            O { opcode: 0x3A, op: "DEC", mode: Mode::Accumulator, size: SizeClass::Memory },
            O { opcode: 0x1A, op: "INA", mode: Mode::Implied, size: SizeClass::None },
        ];
        match OverrideTable::new(&twice) {
            Err(e) => {
                assert_eq!(e.kind, ErrorKind::DuplicateOverride);
                assert!(e.msg.contains("0x1A"));
            }
            Ok(_) => panic!("duplicate override accepted"),
        }
    }
    #[test]
    fn index_register_instructions_are_index_sized() -> Result<(), Error> {
        let t = OverrideTable::builtin()?;
        for e in t.iter().filter(|e| matches!(e.op, "STX" | "STY" | "LDX" | "LDY" | "CPX" | "CPY")) {
            assert_eq!(e.size, SizeClass::Index, "{:02X}", e.opcode);
        }
        for e in t.iter().filter(|e| e.op.starts_with('B') && e.op != "BIT") {
            assert!(matches!(e.mode, Mode::Branch8 | Mode::Branch16));
            assert_eq!(e.size.normalized(), SizeClass::Small);
        }
        Ok(())
    }
}
