//! MIPS-I instruction decoder.
//!
//! Splits a 32-bit instruction word into the register slots, operand fields
//! and [`ControlSignals`] consumed by the pipeline. Decoding is a pure function
//! of the instruction word; register values are read by the decode stage.
//!
//! Register slots are normalised so that every slot an instruction does not use
//! holds register 0:
//! 1. **Destinations:** I-type instructions move the rt field into the rd slot.
//! 2. **Shifts:** The register being shifted always occupies the rs slot; for
//!    variable shifts the shift-amount register occupies the rt slot.
//! 3. **Sign branches:** `blez`, `bgtz` and REGIMM branches compare rs against
//!    the rt slot, which holds register 0.

use crate::core::pipeline::signals::{AluMode, BranchMode, ControlSignals, MemSize};
use crate::isa::abi::REG_RA;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::{
    FUNCT_ADD, FUNCT_JALR, FUNCT_JR, FUNCT_NOR, FUNCT_SLL, FUNCT_SLLV, FUNCT_SLT, FUNCT_SLTU,
    FUNCT_SRA, FUNCT_SRAV, FUNCT_SRL, FUNCT_SRLV, OP_ADDI, OP_ADDIU, OP_ANDI, OP_BEQ,
    OP_BGTZ, OP_BLEZ, OP_BNE, OP_J, OP_JAL, OP_LB, OP_LBU, OP_LH, OP_LHU, OP_LUI, OP_LW, OP_ORI,
    OP_REGIMM, OP_SB, OP_SH, OP_SLTI, OP_SLTIU, OP_SPECIAL, OP_SW, OP_XORI, RT_BGEZ, RT_BGEZAL,
    RT_BLTZ, RT_BLTZAL,
};

/// Mask selecting the size bits of a load/store opcode.
const MEM_SIZE_MASK: u32 = 0b11;

/// Opcode bit that distinguishes unsigned loads.
const LOAD_UNSIGNED_BIT: u32 = 0b100;

/// Mask selecting the branch condition bits of a branch opcode.
const BRANCH_MODE_MASK: u32 = 0b111;

/// Operand slots and control signals of one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Register read through the rs slot.
    pub rs: usize,
    /// Register read through the rt slot.
    pub rt: usize,
    /// Destination register.
    pub rd: usize,
    /// Shift amount, for constant shifts.
    pub shamt: Option<u8>,
    /// Raw 16-bit immediate, for I-type instructions.
    pub imm: Option<u16>,
    /// 26-bit jump target, for `j` and `jal`.
    pub target: Option<u32>,
    /// Control signals.
    pub ctrl: ControlSignals,
}

/// Decodes one instruction word.
///
/// Unsupported encodings decode to [`DecodedInstruction::default`]: every
/// control flag is false, so the instruction flows through the pipeline as a
/// no-op.
///
/// # Examples
///
/// ```
/// use mipsim_core::core::pipeline::signals::AluMode;
/// use mipsim_core::isa::decode::decode;
///
/// // addu $25, $15, $2
/// let d = decode(0x01e2_c821);
/// assert_eq!((d.rs, d.rt, d.rd), (15, 2, 25));
/// assert_eq!(d.ctrl.alu, Some(AluMode::Addu));
/// ```
pub fn decode(inst: u32) -> DecodedInstruction {
    match inst.opcode() {
        OP_SPECIAL => decode_special(inst),
        OP_REGIMM => decode_regimm(inst),
        OP_J | OP_JAL => decode_jump(inst),
        OP_BEQ | OP_BNE => DecodedInstruction {
            rs: inst.rs(),
            rt: inst.rt(),
            imm: Some(inst.imm()),
            ctrl: ControlSignals {
                reads_rs: true,
                reads_rt: true,
                branch: branch_mode(inst.opcode()),
                ..ControlSignals::default()
            },
            ..DecodedInstruction::default()
        },
        OP_BLEZ | OP_BGTZ => sign_branch(inst, branch_mode(inst.opcode())),
        OP_ADDI | OP_ADDIU | OP_SLTI | OP_SLTIU | OP_ANDI | OP_ORI | OP_XORI => {
            immediate_alu(inst)
        }
        OP_LUI => DecodedInstruction {
            rd: inst.rt(),
            imm: Some(inst.imm()),
            ctrl: ControlSignals {
                writes_rd: true,
                alu: Some(AluMode::Sll),
                lui: true,
                ..ControlSignals::default()
            },
            ..DecodedInstruction::default()
        },
        OP_LB | OP_LH | OP_LW | OP_LBU | OP_LHU => DecodedInstruction {
            rs: inst.rs(),
            rd: inst.rt(),
            imm: Some(inst.imm()),
            ctrl: ControlSignals {
                reads_rs: true,
                writes_rd: true,
                load: true,
                sign_extend: inst.opcode() & LOAD_UNSIGNED_BIT == 0,
                mem_size: mem_size(inst.opcode()),
                ..ControlSignals::default()
            },
            ..DecodedInstruction::default()
        },
        OP_SB | OP_SH | OP_SW => DecodedInstruction {
            rs: inst.rs(),
            rt: inst.rt(),
            imm: Some(inst.imm()),
            ctrl: ControlSignals {
                reads_rs: true,
                reads_rt: true,
                store: true,
                mem_size: mem_size(inst.opcode()),
                ..ControlSignals::default()
            },
            ..DecodedInstruction::default()
        },
        _ => DecodedInstruction::default(),
    }
}

/// Decodes the SPECIAL (opcode 0) group: register ALU ops, shifts, `jr`, `jalr`.
fn decode_special(inst: u32) -> DecodedInstruction {
    let funct = inst.funct();
    match funct {
        FUNCT_JR => DecodedInstruction {
            rs: inst.rs(),
            ctrl: ControlSignals {
                reads_rs: true,
                jump: true,
                ..ControlSignals::default()
            },
            ..DecodedInstruction::default()
        },
        FUNCT_JALR => DecodedInstruction {
            rs: inst.rs(),
            rd: inst.rd(),
            ctrl: ControlSignals {
                reads_rs: true,
                writes_rd: true,
                alu: Some(AluMode::Addu),
                link: true,
                jump: true,
                ..ControlSignals::default()
            },
            ..DecodedInstruction::default()
        },
        FUNCT_SLL | FUNCT_SRL | FUNCT_SRA => DecodedInstruction {
            rs: inst.rt(),
            rd: inst.rd(),
            shamt: Some(inst.shamt()),
            ctrl: ControlSignals {
                reads_rs: true,
                writes_rd: true,
                alu: shift_mode(funct),
                ..ControlSignals::default()
            },
            ..DecodedInstruction::default()
        },
        FUNCT_SLLV | FUNCT_SRLV | FUNCT_SRAV => DecodedInstruction {
            rs: inst.rt(),
            rt: inst.rs(),
            rd: inst.rd(),
            ctrl: ControlSignals {
                reads_rs: true,
                reads_rt: true,
                writes_rd: true,
                alu: shift_mode(funct),
                ..ControlSignals::default()
            },
            ..DecodedInstruction::default()
        },
        // mode is {1, funct[3:0]}
        FUNCT_ADD..=FUNCT_NOR | FUNCT_SLT | FUNCT_SLTU => DecodedInstruction {
            rs: inst.rs(),
            rt: inst.rt(),
            rd: inst.rd(),
            ctrl: ControlSignals {
                reads_rs: true,
                reads_rt: true,
                writes_rd: true,
                alu: AluMode::try_from(0b1_0000 | (funct & 0b1111) as u8).ok(),
                ..ControlSignals::default()
            },
            ..DecodedInstruction::default()
        },
        _ => DecodedInstruction::default(),
    }
}

/// Decodes the REGIMM (opcode 1) group: `bltz`, `bgez`, `bltzal`, `bgezal`.
fn decode_regimm(inst: u32) -> DecodedInstruction {
    let (mode, link) = match inst.rt() {
        RT_BLTZ => (BranchMode::Bltz, false),
        RT_BGEZ => (BranchMode::Bgez, false),
        RT_BLTZAL => (BranchMode::Bltz, true),
        RT_BGEZAL => (BranchMode::Bgez, true),
        _ => return DecodedInstruction::default(),
    };
    let mut decoded = sign_branch(inst, Some(mode));
    if link {
        decoded.rd = REG_RA;
        decoded.ctrl.writes_rd = true;
        decoded.ctrl.alu = Some(AluMode::Addu);
        decoded.ctrl.link = true;
    }
    decoded
}

/// Decodes `j` and `jal`.
fn decode_jump(inst: u32) -> DecodedInstruction {
    let link = inst.opcode() == OP_JAL;
    DecodedInstruction {
        rd: if link { REG_RA } else { 0 },
        target: Some(inst.target()),
        ctrl: ControlSignals {
            writes_rd: link,
            alu: link.then_some(AluMode::Addu),
            link,
            jump: true,
            ..ControlSignals::default()
        },
        ..DecodedInstruction::default()
    }
}

/// Decodes a branch comparing rs against zero through the rt slot.
fn sign_branch(inst: u32, mode: Option<BranchMode>) -> DecodedInstruction {
    DecodedInstruction {
        rs: inst.rs(),
        imm: Some(inst.imm()),
        ctrl: ControlSignals {
            reads_rs: true,
            reads_rt: true,
            branch: mode,
            ..ControlSignals::default()
        },
        ..DecodedInstruction::default()
    }
}

/// Decodes `addi`, `addiu`, `slti`, `sltiu`, `andi`, `ori` and `xori`.
fn immediate_alu(inst: u32) -> DecodedInstruction {
    let mode = match inst.opcode() {
        OP_ADDI => AluMode::Add,
        OP_ADDIU => AluMode::Addu,
        OP_SLTI => AluMode::Slt,
        OP_SLTIU => AluMode::Sltu,
        OP_ANDI => AluMode::And,
        OP_ORI => AluMode::Or,
        _ => AluMode::Xor,
    };
    DecodedInstruction {
        rs: inst.rs(),
        rd: inst.rt(),
        imm: Some(inst.imm()),
        ctrl: ControlSignals {
            reads_rs: true,
            writes_rd: true,
            alu: Some(mode),
            ..ControlSignals::default()
        },
        ..DecodedInstruction::default()
    }
}

/// Shift class mode `{0, 1, funct[1:0]}`.
fn shift_mode(funct: u32) -> Option<AluMode> {
    AluMode::try_from(0b0_0100 | (funct & 0b11) as u8).ok()
}

/// Branch condition from bits 2-0 of `beq`/`bne`/`blez`/`bgtz`.
fn branch_mode(opcode: u32) -> Option<BranchMode> {
    BranchMode::try_from((opcode & BRANCH_MODE_MASK) as u8).ok()
}

/// Access width from bits 1-0 of a load/store opcode.
fn mem_size(opcode: u32) -> MemSize {
    MemSize::try_from((opcode & MEM_SIZE_MASK) as u8).unwrap_or_default()
}

/// Returns true if the word decodes to a supported instruction.
///
/// The all-zero word is `sll $0, $0, 0` and therefore supported.
pub fn is_supported(inst: u32) -> bool {
    decode(inst) != DecodedInstruction::default()
}
