use mipsim_core::core::arch::gpr::{Gpr, RegWrite};
use proptest::prelude::*;

#[test]
fn starts_zeroed() {
    let gpr = Gpr::new();
    assert_eq!(gpr.snapshot(), [0; 32]);
}

#[test]
fn register_zero_discards_writes() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0xDEAD_BEEF);
    gpr.commit(RegWrite {
        addr: 0,
        value: 0x1234,
    });
    assert_eq!(gpr.read(0), 0);
    assert_eq!(gpr.snapshot()[0], 0);
}

#[test]
fn bypassed_read_sees_pending_write() {
    let mut gpr = Gpr::new();
    gpr.write(8, 1);
    let pending = Some(RegWrite { addr: 8, value: 2 });
    assert_eq!(gpr.read_bypassed(8, pending), 2);
    assert_eq!(gpr.read_bypassed(9, pending), 0);
    assert_eq!(gpr.read_bypassed(8, None), 1);
}

#[test]
fn bypassed_read_of_zero_ignores_pending_write() {
    let gpr = Gpr::new();
    assert_eq!(gpr.read_bypassed(0, Some(RegWrite { addr: 0, value: 5 })), 0);
}

#[test]
fn display_uses_abi_names() {
    let mut gpr = Gpr::new();
    gpr.write(31, 0x8);
    let text = gpr.to_string();
    assert!(text.contains("ra=0x00000008"), "{text}");
    assert!(text.contains("zero=0x00000000"), "{text}");
    assert_eq!(text.lines().count(), 16);
}

proptest! {
    #[test]
    fn write_then_read(idx in 1usize..32, value in any::<u32>()) {
        let mut gpr = Gpr::new();
        gpr.write(idx, value);
        prop_assert_eq!(gpr.read(idx), value);
        for other in (0..32).filter(|i| *i != idx) {
            prop_assert_eq!(gpr.read(other), 0);
        }
    }
}
