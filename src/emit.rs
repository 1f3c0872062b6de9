//! Serialization of the reconciled table.
//!
//! All writers are deterministic: the same table always produces the same bytes.
use super::reconcile::{CanonicalEntry, Enumerations, OpcodeTable};
use super::*;

use serde::Serialize;

const HEADER_COMMENT: &str = "Generated by optab from the 65816 reference listing. Do not edit.";
const INDENT: &str = "    ";

fn write_rust_enum(out: &mut dyn Write, name: &str, names_const: &str, members: &[&str]) -> Result<(), Error> {
    writeln!(out, "#[allow(non_camel_case_types, clippy::upper_case_acronyms)]")?;
    writeln!(out, "#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]")?;
    writeln!(out, "pub enum {} {{", name)?;
    for (i, m) in members.iter().enumerate() {
        writeln!(out, "{}{} = {},", INDENT, m, i)?;
    }
    writeln!(out, "}}\n")?;
    writeln!(out, "pub const {}: [&str; {}] = [", names_const, members.len())?;
    for m in members {
        writeln!(out, "{}\"{}\",", INDENT, m)?;
    }
    writeln!(out, "];\n")?;
    Ok(())
}

fn row_comment(e: &CanonicalEntry) -> String {
    let mut c = format!("0x{:02X} {}", e.opcode, e.mnemonic);
    if !e.alias.is_empty() {
        c.push(' ');
        c.push_str(&e.alias);
    }
    c
}

/// Write the table as a Rust module.
pub fn write_rust(table: &OpcodeTable, out: &mut dyn Write) -> Result<(), Error> {
    let Enumerations {
        operations,
        sizes,
        operands,
    } = table.enumerations();
    let operations: Vec<&str> = operations.iter().map(String::as_str).collect();
    writeln!(out, "// {}\n", HEADER_COMMENT)?;
    write_rust_enum(out, "Operation", "OPERATION_NAMES", &operations)?;
    write_rust_enum(out, "InstructionSize", "INSTRUCTION_SIZE_NAMES", &sizes)?;
    write_rust_enum(out, "Operand", "OPERAND_NAMES", &operands)?;

    writeln!(out, "#[derive(Clone, Copy, PartialEq, Eq, Debug)]")?;
    writeln!(out, "pub struct OpCode {{")?;
    writeln!(out, "{}pub op: Operation,", INDENT)?;
    writeln!(out, "{}pub size: InstructionSize,", INDENT)?;
    writeln!(out, "{}pub mode: Operand,", INDENT)?;
    writeln!(out, "{}pub load_operand: bool,", INDENT)?;
    writeln!(out, "}}\n")?;

    writeln!(out, "/// Mnemonics as used in an assembler, indexed by opcode.")?;
    writeln!(out, "pub const MNEMONIC_NAMES: [&str; 256] = [")?;
    let entries: Vec<&CanonicalEntry> = table.iter().collect();
    for chunk in entries.chunks(16) {
        let line: Vec<String> = chunk.iter().map(|e| format!("\"{}\",", e.mnemonic)).collect();
        writeln!(out, "{}{}", INDENT, line.join(" "))?;
    }
    writeln!(out, "];\n")?;

    writeln!(out, "pub const OP_CODES: [OpCode; 256] = [")?;
    for e in table.iter() {
        writeln!(
            out,
            "{}OpCode {{ op: Operation::{:<4} size: InstructionSize::{:<7} mode: Operand::{:<36} load_operand: {:<5} }}, // {}",
            INDENT,
            format!("{},", e.op),
            format!("{},", e.size),
            format!("{},", e.operand),
            e.load_operand,
            row_comment(e)
        )?;
    }
    writeln!(out, "];")?;
    Ok(())
}

fn write_cpp_enum(out: &mut dyn Write, name: &str, members: &[&str]) -> Result<(), Error> {
    writeln!(out, "enum class {} {{", name)?;
    for (i, m) in members.iter().enumerate() {
        writeln!(out, "\t{} = {},", m, i)?;
    }
    writeln!(out, "}};\n")?;
    writeln!(out, "static const char* const {}_names[{}]={{", name, members.len())?;
    for m in members {
        writeln!(out, "\t\"{}\",", m)?;
    }
    writeln!(out, "}};\n")?;
    Ok(())
}

/// Write the C++ header: enumerations, the OpCode struct and extern table declarations.
pub fn write_cpp_header(table: &OpcodeTable, namespace: &str, out: &mut dyn Write) -> Result<(), Error> {
    let en = table.enumerations();
    let operations: Vec<&str> = en.operations.iter().map(String::as_str).collect();
    writeln!(out, "// {}", HEADER_COMMENT)?;
    writeln!(out, "#pragma once\n")?;
    writeln!(out, "namespace {} {{\n", namespace)?;
    write_cpp_enum(out, "Operation", &operations)?;
    write_cpp_enum(out, "InstructionSize", &en.sizes)?;
    write_cpp_enum(out, "Operand", &en.operands)?;
    writeln!(out, "struct OpCode {{")?;
    writeln!(out, "\tOperation op;")?;
    writeln!(out, "\tInstructionSize size;")?;
    writeln!(out, "\tOperand mode;")?;
    writeln!(out, "\tbool load_operand;")?;
    writeln!(out, "}};\n")?;
    writeln!(out, "extern const char* const mnemonic_names[256]; // as used in an assembler")?;
    writeln!(out, "extern const OpCode op_codes[256];\n")?;
    writeln!(out, "}}")?;
    Ok(())
}

/// Write the C++ source defining `mnemonic_names` and `op_codes`.
pub fn write_cpp_source(table: &OpcodeTable, namespace: &str, header: &str, out: &mut dyn Write) -> Result<(), Error> {
    writeln!(out, "// {}", HEADER_COMMENT)?;
    writeln!(out, "#include \"{}\"\n", header)?;
    writeln!(out, "namespace {} {{\n", namespace)?;
    writeln!(out, "const char* const mnemonic_names[256] = {{")?;
    let entries: Vec<&CanonicalEntry> = table.iter().collect();
    for chunk in entries.chunks(16) {
        let line: String = chunk.iter().map(|e| format!("\t\"{}\",", e.mnemonic)).collect();
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "}};\n")?;
    writeln!(out, "const OpCode op_codes[256] = {{")?;
    for e in table.iter() {
        writeln!(
            out,
            "\t{{Operation::{:<4} InstructionSize::{:<7} Operand::{:<36} {:<5}}}, // {}",
            format!("{},", e.op),
            format!("{},", e.size),
            format!("{},", e.operand),
            e.load_operand,
            row_comment(e)
        )?;
    }
    writeln!(out, "}};\n")?;
    writeln!(out, "}}")?;
    Ok(())
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    opcode: String,
    mnemonic: &'a str,
    op: &'a str,
    operand: &'static str,
    size: &'static str,
    load_operand: bool,
    alias: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    override_mode: Option<&'static str>,
}
impl<'a> From<&'a CanonicalEntry> for JsonEntry<'a> {
    fn from(e: &'a CanonicalEntry) -> Self {
        JsonEntry {
            opcode: format!("0x{:02X}", e.opcode),
            mnemonic: &e.mnemonic,
            op: &e.op,
            operand: e.operand.tag(),
            size: e.size.tag(),
            load_operand: e.load_operand,
            alias: &e.alias,
            override_mode: e.override_mode.map(|m| m.tag()),
        }
    }
}

/// Write the table as a pretty-printed JSON array, one record per opcode.
pub fn write_json(table: &OpcodeTable, out: &mut dyn Write) -> Result<(), Error> {
    let records: Vec<JsonEntry> = table.iter().map(JsonEntry::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}
