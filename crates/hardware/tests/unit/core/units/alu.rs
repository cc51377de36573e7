//! ALU Operation Tests.
//!
//! Table-driven vectors for every ALU mode plus properties relating the
//! signed and unsigned variants, which must be bit-identical because
//! overflow is never trapped.

use mipsim_core::core::pipeline::signals::AluMode;
use mipsim_core::core::units::alu::Alu;
use proptest::prelude::*;
use rstest::rstest;

const NEG1: u32 = u32::MAX;
const I32_MIN: u32 = 0x8000_0000;
const I32_MAX: u32 = 0x7FFF_FFFF;

#[rstest]
#[case::add_basic(AluMode::Add, 2, 3, 5)]
#[case::add_wraps(AluMode::Add, I32_MAX, 1, I32_MIN)]
#[case::addu_wraps(AluMode::Addu, NEG1, 1, 0)]
#[case::sub_basic(AluMode::Sub, 5, 7, (-2i32) as u32)]
#[case::sub_wraps(AluMode::Sub, I32_MIN, 1, I32_MAX)]
#[case::subu_basic(AluMode::Subu, 0, 1, NEG1)]
#[case::and(AluMode::And, 0xF0F0_F0F0, 0xFF00_FF00, 0xF000_F000)]
#[case::or(AluMode::Or, 0xF0F0_0000, 0x0000_0F0F, 0xF0F0_0F0F)]
#[case::xor(AluMode::Xor, 0xFFFF_0000, 0xF0F0_F0F0, 0x0F0F_F0F0)]
#[case::nor(AluMode::Nor, 0xFFFF_0000, 0x0000_00FF, 0x0000_FF00)]
#[case::nor_zero(AluMode::Nor, 0, 0, NEG1)]
#[case::slt_negative(AluMode::Slt, NEG1, 0, 1)]
#[case::slt_positive(AluMode::Slt, 0, NEG1, 0)]
#[case::slt_equal(AluMode::Slt, 7, 7, 0)]
#[case::sltu_negative_is_large(AluMode::Sltu, NEG1, 0, 0)]
#[case::sltu_zero(AluMode::Sltu, 0, NEG1, 1)]
#[case::sltiu_sign_extended_immediate(AluMode::Sltu, 102, (-32000i32) as u32, 1)]
#[case::slti_sign_extended_immediate(AluMode::Slt, 102, (-32000i32) as u32, 0)]
#[case::sll(AluMode::Sll, 0x0000_0001, 31, I32_MIN)]
#[case::sll_masks_amount(AluMode::Sll, 1, 33, 2)]
#[case::srl(AluMode::Srl, I32_MIN, 31, 1)]
#[case::srl_zero(AluMode::Srl, 0xCECE_BABA, 0, 0xCECE_BABA)]
#[case::sra_negative(AluMode::Sra, I32_MIN, 4, 0xF800_0000)]
#[case::sra_positive(AluMode::Sra, I32_MAX, 30, 1)]
#[case::lui_shift(AluMode::Sll, 0xCECE, 16, 0xCECE_0000)]
fn alu_vectors(#[case] mode: AluMode, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(mode, a, b), expected, "{mode:?}({a:#x}, {b:#x})");
}

#[test]
fn mode_encodings_round_trip() {
    for mode in AluMode::ALL {
        assert_eq!(AluMode::try_from(mode.bits()), Ok(mode));
    }
    assert_eq!(AluMode::try_from(0b1_1000), Err(0b1_1000));
    assert_eq!(AluMode::try_from(0b0_0101), Err(0b0_0101));
}

#[test]
fn shift_class_is_bit_four_clear() {
    let shifts: Vec<AluMode> = AluMode::ALL.into_iter().filter(|m| m.is_shift()).collect();
    assert_eq!(shifts, vec![AluMode::Sll, AluMode::Srl, AluMode::Sra]);
}

proptest! {
    #[test]
    fn signed_and_unsigned_add_agree(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(Alu::execute(AluMode::Add, a, b), Alu::execute(AluMode::Addu, a, b));
        prop_assert_eq!(Alu::execute(AluMode::Sub, a, b), Alu::execute(AluMode::Subu, a, b));
    }

    #[test]
    fn sub_inverts_add(a in any::<u32>(), b in any::<u32>()) {
        let sum = Alu::execute(AluMode::Addu, a, b);
        prop_assert_eq!(Alu::execute(AluMode::Subu, sum, b), a);
    }

    #[test]
    fn comparisons_match_host(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(Alu::execute(AluMode::Slt, a, b), u32::from((a as i32) < (b as i32)));
        prop_assert_eq!(Alu::execute(AluMode::Sltu, a, b), u32::from(a < b));
    }

    #[test]
    fn shifts_use_low_five_bits(a in any::<u32>(), b in any::<u32>()) {
        for mode in [AluMode::Sll, AluMode::Srl, AluMode::Sra] {
            prop_assert_eq!(Alu::execute(mode, a, b), Alu::execute(mode, a, b & 0x1F));
        }
    }
}
