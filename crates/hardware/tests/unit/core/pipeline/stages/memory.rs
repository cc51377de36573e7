use mipsim_core::common::SimError;
use mipsim_core::config::ByteOrder;
use mipsim_core::core::pipeline::latches::ExMemEntry;
use mipsim_core::core::pipeline::signals::{ControlSignals, MemSize};
use mipsim_core::core::pipeline::stages::{MemOutput, StoreRequest, mem_stage};
use mipsim_core::soc::DataMemory;

fn dmem() -> DataMemory {
    let mut dmem = DataMemory::new(16, ByteOrder::Little);
    dmem.write(0, MemSize::Word, 0xCECE_BABA).expect("in bounds");
    dmem
}

fn access(addr: u32, ctrl: ControlSignals, store_data: u32) -> ExMemEntry {
    ExMemEntry {
        pc: 0x10,
        valid: true,
        rd: 8,
        alu_result: addr,
        store_data,
        ctrl,
        ..ExMemEntry::default()
    }
}

fn load(size: MemSize, sign_extend: bool) -> ControlSignals {
    ControlSignals {
        writes_rd: true,
        load: true,
        sign_extend,
        mem_size: size,
        ..ControlSignals::default()
    }
}

fn store(size: MemSize) -> ControlSignals {
    ControlSignals {
        store: true,
        mem_size: size,
        ..ControlSignals::default()
    }
}

#[test]
fn loads_extend_little_endian_data() {
    let cases = [
        (0, MemSize::Byte, true, 0xFFFF_FFBA),
        (0, MemSize::Byte, false, 0x0000_00BA),
        (2, MemSize::Byte, true, 0xFFFF_FFCE),
        (0, MemSize::HalfWord, true, 0xFFFF_BABA),
        (2, MemSize::HalfWord, false, 0x0000_CECE),
        (0, MemSize::Word, true, 0xCECE_BABA),
    ];
    for (addr, size, sign, expected) in cases {
        let out = mem_stage(&access(addr, load(size, sign), 0), &dmem(), false).expect("in bounds");
        assert_eq!(out.entry.load_data, expected, "{size:?} at {addr}");
        assert_eq!(out.store, None);
    }
}

#[test]
fn unaligned_load_is_allowed() {
    let out = mem_stage(&access(1, load(MemSize::HalfWord, false), 0), &dmem(), true).expect("in bounds");
    assert_eq!(out.entry.load_data, 0xCEBA);
}

#[test]
fn store_is_truncated_and_deferred() {
    let mem = dmem();
    let out = mem_stage(&access(4, store(MemSize::Byte), 0x1234_5678), &mem, true).expect("in bounds");
    assert_eq!(
        out.store,
        Some(StoreRequest {
            addr: 4,
            size: MemSize::Byte,
            value: 0x78
        })
    );
    assert_eq!(mem.read(4, MemSize::Word).expect("in bounds"), 0);
}

#[test]
fn out_of_bounds_accesses_fail() {
    let err = mem_stage(&access(14, load(MemSize::Word, true), 0), &dmem(), false).expect_err("oob");
    assert!(matches!(
        err,
        SimError::DataOutOfBounds {
            addr: 14,
            size: 4,
            len: 16
        }
    ));
    assert!(mem_stage(&access(16, store(MemSize::Byte), 0), &dmem(), false).is_err());
    assert!(mem_stage(&access(u32::MAX, load(MemSize::HalfWord, true), 0), &dmem(), false).is_err());
}

#[test]
fn non_memory_instruction_passes_through() {
    let entry = ExMemEntry {
        alu_result: 0xABCD,
        ctrl: ControlSignals {
            writes_rd: true,
            ..ControlSignals::default()
        },
        ..access(0, ControlSignals::default(), 0)
    };
    let out = mem_stage(&entry, &dmem(), false).expect("no access");
    assert_eq!(out.entry.alu_result, 0xABCD);
    assert_eq!(out.entry.rd, 8);
    assert_eq!(out.entry.pc, 0x10);
    assert!(out.entry.valid);
}

#[test]
fn bubble_skips_memory() {
    let bubble = ExMemEntry {
        alu_result: 0xFFFF_0000,
        ctrl: load(MemSize::Word, true),
        ..ExMemEntry::default()
    };
    assert_eq!(
        mem_stage(&bubble, &dmem(), false).expect("bubble"),
        MemOutput::default()
    );
}
