use crate::common::builder::instruction::*;
use mipsim_core::isa::disasm::disassemble;
use rstest::rstest;

#[rstest]
#[case(0, "nop")]
#[case(addu(T9, T7, V0), "addu t9, t7, v0")]
#[case(0x8c0a_0000, "lw t2, 0(zero)")]
#[case(sw(RA, -4, SP), "sw ra, -4(sp)")]
#[case(lbu(T0, 3, A0), "lbu t0, 3(a0)")]
#[case(addiu(SP, SP, -16), "addiu sp, sp, -16")]
#[case(andi(T0, T1, 0xFF), "andi t0, t1, 0xff")]
#[case(lui(AT, 0xCECE), "lui at, 0xcece")]
#[case(sll(T0, T1, 4), "sll t0, t1, 4")]
#[case(srav(T0, T1, T2), "srav t0, t1, t2")]
#[case(beq(T0, ZERO, -1), "beq t0, zero, -1")]
#[case(bgezal(A0, 3), "bgezal a0, 3")]
#[case(j(0x100), "j 0x100")]
#[case(jal(0x40), "jal 0x40")]
#[case(jr(RA), "jr ra")]
#[case(jalr(RA, T9), "jalr ra, t9")]
#[case(0x0000_000C, "unknown 0x0000000c")]
fn mnemonics(#[case] inst: u32, #[case] text: &str) {
    assert_eq!(disassemble(inst), text);
}
