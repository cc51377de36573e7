//! Instruction Disassembler for the MIPS-I integer subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics. Registers are
//! printed with their ABI names, branch offsets as the signed word offset held
//! in the immediate, and jump targets as the byte address within the region.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x01e2_c821), "addu t9, t7, v0");
//! assert_eq!(disassemble(0x8c0a_0000), "lw t2, 0(zero)");
//! assert_eq!(disassemble(0), "nop");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes as op;

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"addu t9, t7, v0"` or `"unknown 0x........"` for
/// encodings the pipeline does not implement.
pub fn disassemble(inst: u32) -> String {
    if inst == 0 {
        return "nop".to_string();
    }

    let rs = reg_name(inst.rs());
    let rt = reg_name(inst.rt());
    let imm = inst.imm();
    let simm = imm as i16;

    match inst.opcode() {
        op::OP_SPECIAL => disasm_special(inst),
        op::OP_REGIMM => {
            let mnemonic = match inst.rt() {
                op::RT_BLTZ => "bltz",
                op::RT_BGEZ => "bgez",
                op::RT_BLTZAL => "bltzal",
                op::RT_BGEZAL => "bgezal",
                _ => return unknown(inst),
            };
            format!("{mnemonic} {rs}, {simm}")
        }
        op::OP_J => format!("j {:#x}", inst.target() << 2),
        op::OP_JAL => format!("jal {:#x}", inst.target() << 2),
        op::OP_BEQ => format!("beq {rs}, {rt}, {simm}"),
        op::OP_BNE => format!("bne {rs}, {rt}, {simm}"),
        op::OP_BLEZ => format!("blez {rs}, {simm}"),
        op::OP_BGTZ => format!("bgtz {rs}, {simm}"),
        op::OP_ADDI => format!("addi {rt}, {rs}, {simm}"),
        op::OP_ADDIU => format!("addiu {rt}, {rs}, {simm}"),
        op::OP_SLTI => format!("slti {rt}, {rs}, {simm}"),
        op::OP_SLTIU => format!("sltiu {rt}, {rs}, {simm}"),
        op::OP_ANDI => format!("andi {rt}, {rs}, {imm:#x}"),
        op::OP_ORI => format!("ori {rt}, {rs}, {imm:#x}"),
        op::OP_XORI => format!("xori {rt}, {rs}, {imm:#x}"),
        op::OP_LUI => format!("lui {rt}, {imm:#x}"),
        opcode @ (op::OP_LB
        | op::OP_LH
        | op::OP_LW
        | op::OP_LBU
        | op::OP_LHU
        | op::OP_SB
        | op::OP_SH
        | op::OP_SW) => {
            let mnemonic = match opcode {
                op::OP_LB => "lb",
                op::OP_LH => "lh",
                op::OP_LW => "lw",
                op::OP_LBU => "lbu",
                op::OP_LHU => "lhu",
                op::OP_SB => "sb",
                op::OP_SH => "sh",
                _ => "sw",
            };
            format!("{mnemonic} {rt}, {simm}({rs})")
        }
        _ => unknown(inst),
    }
}

/// Disassembles the SPECIAL (opcode 0) group.
fn disasm_special(inst: u32) -> String {
    let rs = reg_name(inst.rs());
    let rt = reg_name(inst.rt());
    let rd = reg_name(inst.rd());
    let shamt = inst.shamt();

    let mnemonic = match inst.funct() {
        op::FUNCT_SLL => return format!("sll {rd}, {rt}, {shamt}"),
        op::FUNCT_SRL => return format!("srl {rd}, {rt}, {shamt}"),
        op::FUNCT_SRA => return format!("sra {rd}, {rt}, {shamt}"),
        op::FUNCT_SLLV => return format!("sllv {rd}, {rt}, {rs}"),
        op::FUNCT_SRLV => return format!("srlv {rd}, {rt}, {rs}"),
        op::FUNCT_SRAV => return format!("srav {rd}, {rt}, {rs}"),
        op::FUNCT_JR => return format!("jr {rs}"),
        op::FUNCT_JALR => return format!("jalr {rd}, {rs}"),
        op::FUNCT_ADD => "add",
        op::FUNCT_ADDU => "addu",
        op::FUNCT_SUB => "sub",
        op::FUNCT_SUBU => "subu",
        op::FUNCT_AND => "and",
        op::FUNCT_OR => "or",
        op::FUNCT_XOR => "xor",
        op::FUNCT_NOR => "nor",
        op::FUNCT_SLT => "slt",
        op::FUNCT_SLTU => "sltu",
        _ => return unknown(inst),
    };
    format!("{mnemonic} {rd}, {rs}, {rt}")
}

/// Formats an unrecognised encoding.
fn unknown(inst: u32) -> String {
    format!("unknown {inst:#010x}")
}
