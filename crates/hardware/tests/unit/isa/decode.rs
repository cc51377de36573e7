//! Decoder field and control-signal tables.

use crate::common::builder::instruction::*;
use mipsim_core::core::pipeline::signals::{AluMode, BranchMode, ControlSignals, MemSize};
use mipsim_core::isa::decode::{DecodedInstruction, decode, is_supported};
use mipsim_core::isa::instruction::{InstructionBits, sext16};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn field_extraction() {
    let inst: u32 = 0x01e2_c821;
    assert_eq!(inst.opcode(), 0);
    assert_eq!(inst.rs(), 15);
    assert_eq!(inst.rt(), 2);
    assert_eq!(inst.rd(), 25);
    assert_eq!(inst.shamt(), 0);
    assert_eq!(inst.funct(), 0x21);
    assert_eq!(lw(T2, -8, SP).imm(), 0xFFF8);
    assert_eq!(lw(T2, -8, SP).imm_sext(), 0xFFFF_FFF8);
    assert_eq!(jal(0x0FFF_FFFC).target(), 0x03FF_FFFF);
    assert_eq!(sext16(0x7FFF), 0x0000_7FFF);
    assert_eq!(sext16(0x8000), 0xFFFF_8000);
}

#[test]
fn addu_decodes_fully() {
    assert_eq!(
        decode(addu(T9, T7, V0)),
        DecodedInstruction {
            rs: 15,
            rt: 2,
            rd: 25,
            shamt: None,
            imm: None,
            target: None,
            ctrl: ControlSignals {
                reads_rs: true,
                reads_rt: true,
                writes_rd: true,
                alu: Some(AluMode::Addu),
                ..ControlSignals::default()
            },
        }
    );
}

#[test]
fn load_word_slots() {
    let d = decode(0x8c0a_0000);
    assert_eq!((d.rs, d.rt, d.rd), (0, 0, 10));
    assert_eq!(d.imm, Some(0));
    assert_eq!(d.ctrl.alu, None);
    assert!(d.ctrl.load && d.ctrl.writes_rd && d.ctrl.sign_extend);
    assert_eq!(d.ctrl.mem_size, MemSize::Word);
}

#[rstest]
#[case::lb(lb(T0, 0, T1), MemSize::Byte, true)]
#[case::lbu(lbu(T0, 0, T1), MemSize::Byte, false)]
#[case::lh(lh(T0, 0, T1), MemSize::HalfWord, true)]
#[case::lhu(lhu(T0, 0, T1), MemSize::HalfWord, false)]
#[case::lw(lw(T0, 0, T1), MemSize::Word, true)]
fn load_sizes(#[case] inst: u32, #[case] size: MemSize, #[case] sign: bool) {
    let d = decode(inst);
    assert_eq!(d.ctrl.mem_size, size);
    assert_eq!(d.ctrl.sign_extend, sign);
    assert_eq!(d.rd, T0 as usize);
}

#[rstest]
#[case::sb(sb(T0, 4, T1), MemSize::Byte)]
#[case::sh(sh(T0, 4, T1), MemSize::HalfWord)]
#[case::sw(sw(T0, 4, T1), MemSize::Word)]
fn stores_read_both_and_write_nothing(#[case] inst: u32, #[case] size: MemSize) {
    let d = decode(inst);
    assert_eq!((d.rs, d.rt, d.rd), (T1 as usize, T0 as usize, 0));
    assert!(d.ctrl.store && d.ctrl.reads_rs && d.ctrl.reads_rt);
    assert!(!d.ctrl.writes_rd);
    assert_eq!(d.ctrl.mem_size, size);
}

#[rstest]
#[case::sll(sll(T0, T1, 3), AluMode::Sll)]
#[case::srl(srl(T0, T1, 3), AluMode::Srl)]
#[case::sra(sra(T0, T1, 3), AluMode::Sra)]
fn constant_shifts_move_rt_into_rs_slot(#[case] inst: u32, #[case] mode: AluMode) {
    let d = decode(inst);
    assert_eq!((d.rs, d.rt, d.rd), (T1 as usize, 0, T0 as usize));
    assert_eq!(d.shamt, Some(3));
    assert_eq!(d.ctrl.alu, Some(mode));
    assert!(!d.ctrl.reads_rt);
}

#[rstest]
#[case::sllv(sllv(T0, T1, T2), AluMode::Sll)]
#[case::srlv(srlv(T0, T1, T2), AluMode::Srl)]
#[case::srav(srav(T0, T1, T2), AluMode::Sra)]
fn variable_shifts_swap_slots(#[case] inst: u32, #[case] mode: AluMode) {
    let d = decode(inst);
    assert_eq!((d.rs, d.rt, d.rd), (T1 as usize, T2 as usize, T0 as usize));
    assert_eq!(d.shamt, None);
    assert_eq!(d.ctrl.alu, Some(mode));
}

#[rstest]
#[case::add(add(T0, T1, T2), AluMode::Add)]
#[case::sub(sub(T0, T1, T2), AluMode::Sub)]
#[case::subu(subu(T0, T1, T2), AluMode::Subu)]
#[case::and(and(T0, T1, T2), AluMode::And)]
#[case::or(or(T0, T1, T2), AluMode::Or)]
#[case::xor(xor(T0, T1, T2), AluMode::Xor)]
#[case::nor(nor(T0, T1, T2), AluMode::Nor)]
#[case::slt(slt(T0, T1, T2), AluMode::Slt)]
#[case::sltu(sltu(T0, T1, T2), AluMode::Sltu)]
fn register_alu_modes(#[case] inst: u32, #[case] mode: AluMode) {
    let d = decode(inst);
    assert_eq!(d.ctrl.alu, Some(mode));
    assert_eq!((d.rs, d.rt, d.rd), (T1 as usize, T2 as usize, T0 as usize));
}

#[rstest]
#[case::addi(addi(T0, T1, -1), AluMode::Add)]
#[case::addiu(addiu(T0, T1, -1), AluMode::Addu)]
#[case::slti(slti(T0, T1, -1), AluMode::Slt)]
#[case::sltiu(sltiu(T0, T1, -1), AluMode::Sltu)]
#[case::andi(andi(T0, T1, 0xFFFF), AluMode::And)]
#[case::ori(ori(T0, T1, 0xFFFF), AluMode::Or)]
#[case::xori(xori(T0, T1, 0xFFFF), AluMode::Xor)]
fn immediate_alu_modes(#[case] inst: u32, #[case] mode: AluMode) {
    let d = decode(inst);
    assert_eq!(d.ctrl.alu, Some(mode));
    assert_eq!((d.rs, d.rt, d.rd), (T1 as usize, 0, T0 as usize));
    assert_eq!(d.imm, Some(0xFFFF));
    assert!(d.ctrl.writes_rd && !d.ctrl.reads_rt);
}

#[test]
fn lui_uses_shifter() {
    let d = decode(lui(T0, 0xCECE));
    assert_eq!(d.rd, T0 as usize);
    assert_eq!(d.imm, Some(0xCECE));
    assert_eq!(d.ctrl.alu, Some(AluMode::Sll));
    assert!(d.ctrl.lui && !d.ctrl.reads_rs);
}

#[rstest]
#[case::beq(beq(T0, T1, 2), BranchMode::Beq, T1 as usize)]
#[case::bne(bne(T0, T1, 2), BranchMode::Bne, T1 as usize)]
#[case::blez(blez(T0, 2), BranchMode::Blez, 0)]
#[case::bgtz(bgtz(T0, 2), BranchMode::Bgtz, 0)]
#[case::bltz(bltz(T0, 2), BranchMode::Bltz, 0)]
#[case::bgez(bgez(T0, 2), BranchMode::Bgez, 0)]
fn branches(#[case] inst: u32, #[case] mode: BranchMode, #[case] rt: usize) {
    let d = decode(inst);
    assert_eq!(d.ctrl.branch, Some(mode));
    assert_eq!((d.rs, d.rt, d.rd), (T0 as usize, rt, 0));
    assert_eq!(d.imm, Some(2));
    assert!(!d.ctrl.writes_rd && !d.ctrl.link);
}

#[rstest]
#[case::bltzal(bltzal(T0, 2), BranchMode::Bltz)]
#[case::bgezal(bgezal(T0, 2), BranchMode::Bgez)]
fn branch_and_link(#[case] inst: u32, #[case] mode: BranchMode) {
    let d = decode(inst);
    assert_eq!(d.ctrl.branch, Some(mode));
    assert_eq!(d.rd, 31);
    assert!(d.ctrl.link && d.ctrl.writes_rd);
}

#[test]
fn jumps() {
    let j_d = decode(j(0x100));
    assert!(j_d.ctrl.jump && !j_d.ctrl.link && !j_d.ctrl.writes_rd);
    assert_eq!(j_d.target, Some(0x40));

    let jal_d = decode(jal(0x100));
    assert!(jal_d.ctrl.jump && jal_d.ctrl.link && jal_d.ctrl.writes_rd);
    assert_eq!(jal_d.rd, 31);

    let jr_d = decode(jr(RA));
    assert!(jr_d.ctrl.jump && jr_d.ctrl.reads_rs && !jr_d.ctrl.writes_rd);
    assert_eq!((jr_d.rs, jr_d.target), (31, None));

    let jalr_d = decode(jalr(S0, T0));
    assert!(jalr_d.ctrl.jump && jalr_d.ctrl.link);
    assert_eq!((jalr_d.rs, jalr_d.rd), (T0 as usize, S0 as usize));
    assert!(jalr_d.ctrl.is_control_flow());
}

#[rstest]
#[case::mult_funct(r_type(T0, T1, 0, 0, 0x18))]
#[case::syscall(0x0000_000C)]
#[case::cop0(0x4000_0000)]
#[case::lwl(i_type(0x22, T0, T1, 0))]
#[case::regimm_unknown(i_type(0x01, T0, 0x02, 0))]
fn unsupported_encodings_are_no_ops(#[case] inst: u32) {
    assert_eq!(decode(inst), DecodedInstruction::default());
    assert!(!is_supported(inst));
}

#[test]
fn all_zero_word_is_sll_nop() {
    assert!(is_supported(0));
    let d = decode(0);
    assert_eq!(d.ctrl.alu, Some(AluMode::Sll));
    assert_eq!(d.rd, 0);
}

proptest! {
    #[test]
    fn unused_slots_hold_register_zero(inst in any::<u32>()) {
        let d = decode(inst);
        if !d.ctrl.reads_rs {
            prop_assert_eq!(d.rs, 0);
        }
        if !d.ctrl.reads_rt {
            prop_assert_eq!(d.rt, 0);
        }
        if !d.ctrl.writes_rd {
            prop_assert_eq!(d.rd, 0);
        }
        prop_assert!(!(d.ctrl.load && d.ctrl.store));
    }
}
