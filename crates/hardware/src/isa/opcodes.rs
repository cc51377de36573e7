//! MIPS-I opcode, function and REGIMM field values.
//!
//! Only the integer subset modelled by the pipeline is listed.

/// R-type instructions; the operation is selected by the function field.
pub const OP_SPECIAL: u32 = 0x00;
/// Branches on the sign of rs; the variant is selected by the rt field.
pub const OP_REGIMM: u32 = 0x01;
/// Jump (J).
pub const OP_J: u32 = 0x02;
/// Jump and link (JAL).
pub const OP_JAL: u32 = 0x03;
/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 0x04;
/// Branch on not equal (BNE).
pub const OP_BNE: u32 = 0x05;
/// Branch on less than or equal to zero (BLEZ).
pub const OP_BLEZ: u32 = 0x06;
/// Branch on greater than zero (BGTZ).
pub const OP_BGTZ: u32 = 0x07;
/// Add immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;
/// Add immediate unsigned (ADDIU).
pub const OP_ADDIU: u32 = 0x09;
/// Set on less than immediate (SLTI).
pub const OP_SLTI: u32 = 0x0A;
/// Set on less than immediate unsigned (SLTIU).
pub const OP_SLTIU: u32 = 0x0B;
/// AND immediate (ANDI).
pub const OP_ANDI: u32 = 0x0C;
/// OR immediate (ORI).
pub const OP_ORI: u32 = 0x0D;
/// XOR immediate (XORI).
pub const OP_XORI: u32 = 0x0E;
/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0x0F;
/// Load byte (LB).
pub const OP_LB: u32 = 0x20;
/// Load half-word (LH).
pub const OP_LH: u32 = 0x21;
/// Load word (LW).
pub const OP_LW: u32 = 0x23;
/// Load byte unsigned (LBU).
pub const OP_LBU: u32 = 0x24;
/// Load half-word unsigned (LHU).
pub const OP_LHU: u32 = 0x25;
/// Store byte (SB).
pub const OP_SB: u32 = 0x28;
/// Store half-word (SH).
pub const OP_SH: u32 = 0x29;
/// Store word (SW).
pub const OP_SW: u32 = 0x2B;

/// Shift left logical by shamt (SLL).
pub const FUNCT_SLL: u32 = 0x00;
/// Shift right logical by shamt (SRL).
pub const FUNCT_SRL: u32 = 0x02;
/// Shift right arithmetic by shamt (SRA).
pub const FUNCT_SRA: u32 = 0x03;
/// Shift left logical by register (SLLV).
pub const FUNCT_SLLV: u32 = 0x04;
/// Shift right logical by register (SRLV).
pub const FUNCT_SRLV: u32 = 0x06;
/// Shift right arithmetic by register (SRAV).
pub const FUNCT_SRAV: u32 = 0x07;
/// Jump register (JR).
pub const FUNCT_JR: u32 = 0x08;
/// Jump and link register (JALR).
pub const FUNCT_JALR: u32 = 0x09;
/// Add (ADD).
pub const FUNCT_ADD: u32 = 0x20;
/// Add unsigned (ADDU).
pub const FUNCT_ADDU: u32 = 0x21;
/// Subtract (SUB).
pub const FUNCT_SUB: u32 = 0x22;
/// Subtract unsigned (SUBU).
pub const FUNCT_SUBU: u32 = 0x23;
/// Bitwise AND (AND).
pub const FUNCT_AND: u32 = 0x24;
/// Bitwise OR (OR).
pub const FUNCT_OR: u32 = 0x25;
/// Bitwise XOR (XOR).
pub const FUNCT_XOR: u32 = 0x26;
/// Bitwise NOR (NOR).
pub const FUNCT_NOR: u32 = 0x27;
/// Set on less than (SLT).
pub const FUNCT_SLT: u32 = 0x2A;
/// Set on less than unsigned (SLTU).
pub const FUNCT_SLTU: u32 = 0x2B;

/// REGIMM: branch on less than zero (BLTZ).
pub const RT_BLTZ: usize = 0x00;
/// REGIMM: branch on greater than or equal to zero (BGEZ).
pub const RT_BGEZ: usize = 0x01;
/// REGIMM: branch on less than zero and link (BLTZAL).
pub const RT_BLTZAL: usize = 0x10;
/// REGIMM: branch on greater than or equal to zero and link (BGEZAL).
pub const RT_BGEZAL: usize = 0x11;
