//! Pipeline control signals and operation types.
//!
//! This module defines the signals that Decode derives for every instruction
//! and that travel with it to Writeback. It performs:
//! 1. **Operation Classification:** ALU modes for the computed and shift classes.
//! 2. **Control Flow:** Branch conditions for conditional branches.
//! 3. **Memory Control:** Access widths and sign-extension requirements.
//!
//! The numeric encodings of [`AluMode`], [`BranchMode`] and [`MemSize`] are
//! observable at the stage boundaries and are exposed through `bits()` and
//! `TryFrom<u8>`.

/// ALU operation selected by Decode.
///
/// Bit 4 separates the computed class (set) from the shift class (clear).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluMode {
    /// Shift left logical.
    Sll = 0b0_0100,
    /// Shift right logical.
    Srl = 0b0_0110,
    /// Shift right arithmetic.
    Sra = 0b0_0111,
    /// Addition (overflow is not trapped).
    Add = 0b1_0000,
    /// Addition, unsigned.
    Addu = 0b1_0001,
    /// Subtraction (overflow is not trapped).
    Sub = 0b1_0010,
    /// Subtraction, unsigned.
    Subu = 0b1_0011,
    /// Bitwise AND.
    And = 0b1_0100,
    /// Bitwise OR.
    Or = 0b1_0101,
    /// Bitwise XOR.
    Xor = 0b1_0110,
    /// Bitwise NOR.
    Nor = 0b1_0111,
    /// Set less than (signed).
    Slt = 0b1_1010,
    /// Set less than unsigned.
    Sltu = 0b1_1011,
}

impl AluMode {
    /// Every mode, in encoding order of the computed class then the shift class.
    pub const ALL: [Self; 13] = [
        Self::Add,
        Self::Addu,
        Self::Sub,
        Self::Subu,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Nor,
        Self::Slt,
        Self::Sltu,
        Self::Sll,
        Self::Srl,
        Self::Sra,
    ];

    /// Returns the 5-bit encoding.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns true for `Sll`, `Srl` and `Sra`.
    #[inline]
    pub const fn is_shift(self) -> bool {
        self.bits() & 0b1_0000 == 0
    }

    /// Returns true for the modes whose immediate operand is zero-extended.
    #[inline]
    pub const fn zero_extends_immediate(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor)
    }
}

impl TryFrom<u8> for AluMode {
    type Error = u8;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.bits() == bits)
            .ok_or(bits)
    }
}

/// Branch condition selected by Decode.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchMode {
    /// Taken when rs < 0.
    Bltz = 0b000,
    /// Taken when rs >= 0.
    Bgez = 0b001,
    /// Taken when rs == rt.
    Beq = 0b100,
    /// Taken when rs != rt.
    Bne = 0b101,
    /// Taken when rs <= 0.
    Blez = 0b110,
    /// Taken when rs > 0.
    Bgtz = 0b111,
}

impl BranchMode {
    /// Returns the 3-bit encoding.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for BranchMode {
    type Error = u8;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0b000 => Ok(Self::Bltz),
            0b001 => Ok(Self::Bgez),
            0b100 => Ok(Self::Beq),
            0b101 => Ok(Self::Bne),
            0b110 => Ok(Self::Blez),
            0b111 => Ok(Self::Bgtz),
            other => Err(other),
        }
    }
}

/// Memory access width for load and store operations.
///
/// The encoding equals bits 1-0 of the load/store opcode.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemSize {
    /// 8-bit byte access.
    #[default]
    Byte = 0b00,
    /// 16-bit half-word access.
    HalfWord = 0b01,
    /// 32-bit word access.
    Word = 0b11,
}

impl MemSize {
    /// Returns the 2-bit encoding.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the access width in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::HalfWord => 2,
            Self::Word => 4,
        }
    }
}

impl TryFrom<u8> for MemSize {
    type Error = u8;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0b00 => Ok(Self::Byte),
            0b01 => Ok(Self::HalfWord),
            0b11 => Ok(Self::Word),
            other => Err(other),
        }
    }
}

/// Control signals for pipeline stage execution.
///
/// Generated by Decode and carried unchanged to Writeback, except that
/// Execute clears `writes_rd` for a conditional branch-and-link that is not
/// taken. The all-false default is the control bundle of a bubble and of an
/// unsupported encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// The rs slot is a source operand.
    pub reads_rs: bool,
    /// The rt slot is a source operand.
    pub reads_rt: bool,
    /// Enable write to the destination register.
    pub writes_rd: bool,
    /// ALU operation; `None` when the instruction has no ALU result.
    pub alu: Option<AluMode>,
    /// Conditional branch and its condition.
    pub branch: Option<BranchMode>,
    /// Unconditional jump (`J`/`JAL`/`JR`/`JALR`).
    pub jump: bool,
    /// Writes the return address `pc + 8`.
    pub link: bool,
    /// Load upper immediate: the immediate, not rs, feeds the shifter.
    pub lui: bool,
    /// Enable memory read operation (load).
    pub load: bool,
    /// Enable memory write operation (store).
    pub store: bool,
    /// Load should be sign-extended.
    pub sign_extend: bool,
    /// Width of memory access.
    pub mem_size: MemSize,
}

impl ControlSignals {
    /// Returns true if the instruction may redirect fetch.
    #[inline]
    pub const fn is_control_flow(&self) -> bool {
        self.branch.is_some() || self.jump
    }
}
