use crate::common::builder::instruction::*;
use crate::common::builder::pipeline_state::{fetched, redirecting, write};
use mipsim_core::core::arch::gpr::Gpr;
use mipsim_core::core::pipeline::hazards::{DelaySlot, PipelineControl};
use mipsim_core::core::pipeline::latches::{IdExEntry, IfIdEntry};
use mipsim_core::core::pipeline::signals::AluMode;
use mipsim_core::core::pipeline::stages::decode_stage;

fn quiet() -> PipelineControl {
    PipelineControl::default()
}

fn regs() -> Gpr {
    let mut gpr = Gpr::new();
    gpr.write(T7 as usize, 0x0F);
    gpr.write(V0 as usize, 0x02);
    gpr
}

#[test]
fn reads_operands_and_fields() {
    let e = decode_stage(&fetched(0x40, addu(T9, T7, V0)), &regs(), None, &quiet(), false);
    assert!(e.valid);
    assert_eq!((e.pc, e.inst), (0x40, addu(T9, T7, V0)));
    assert_eq!((e.rs, e.rt, e.rd), (15, 2, 25));
    assert_eq!((e.rs_data, e.rt_data), (0x0F, 0x02));
    assert_eq!(e.ctrl.alu, Some(AluMode::Addu));
    assert!(e.ctrl.writes_rd);
}

#[test]
fn load_reads_register_zero_through_rt() {
    let e = decode_stage(&fetched(0, lw(T2, 0, ZERO)), &regs(), None, &quiet(), true);
    assert_eq!((e.rs, e.rt, e.rd), (0, 0, 10));
    assert_eq!(e.rt_data, 0);
    assert!(e.ctrl.load);
}

#[test]
fn observes_same_tick_writeback() {
    let e = decode_stage(
        &fetched(0, addu(T9, T7, V0)),
        &regs(),
        write(T7 as usize, 0x77),
        &quiet(),
        false,
    );
    assert_eq!(e.rs_data, 0x77);
    assert_eq!(e.rt_data, 0x02);
}

#[test]
fn bubble_stays_bubble() {
    let e = decode_stage(&IfIdEntry::default(), &regs(), None, &quiet(), false);
    assert_eq!(e, IdExEntry::default());
}

#[test]
fn redirect_flushes_decoded_instruction() {
    let ctrl = redirecting(0, 0x100, DelaySlot::Issued, false);
    let e = decode_stage(&fetched(8, addu(T9, T7, V0)), &regs(), None, &ctrl, true);
    assert_eq!(e, IdExEntry::default());
}

#[test]
fn redirect_keeps_delay_slot_waiting_in_if_id() {
    let ctrl = redirecting(0, 0x100, DelaySlot::Fetched, false);
    let e = decode_stage(&fetched(4, addu(T9, T7, V0)), &regs(), None, &ctrl, false);
    assert!(e.valid);
    assert_eq!((e.pc, e.rd), (4, 25));
}

#[test]
fn stall_does_not_freeze_decode() {
    let ctrl = PipelineControl {
        stall: true,
        ..PipelineControl::default()
    };
    let e = decode_stage(&fetched(4, addu(T9, T7, V0)), &regs(), None, &ctrl, false);
    assert!(e.valid);
    assert_eq!(e.pc, 4);
}
