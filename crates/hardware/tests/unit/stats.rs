use mipsim_core::core::cpu::{Retired, TickReport};
use mipsim_core::core::pipeline::hazards::Redirect;
use mipsim_core::core::pipeline::signals::{AluMode, BranchMode, ControlSignals};
use mipsim_core::stats::{SECTIONS, SimStats};

fn retired(ctrl: ControlSignals) -> TickReport {
    TickReport {
        retired: Some(Retired {
            pc: 0,
            inst: 0,
            ctrl,
        }),
        ..TickReport::default()
    }
}

#[test]
fn empty_stats() {
    let stats = SimStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.cpi(), 0.0);
    assert_eq!(stats.ipc(), 0.0);
}

#[test]
fn instruction_mix_classification() {
    let mut stats = SimStats::default();
    stats.record(&retired(ControlSignals {
        writes_rd: true,
        alu: Some(AluMode::Addu),
        ..ControlSignals::default()
    }));
    // unsupported encoding: every control flag clear
    stats.record(&retired(ControlSignals::default()));
    stats.record(&retired(ControlSignals {
        load: true,
        ..ControlSignals::default()
    }));
    stats.record(&retired(ControlSignals {
        store: true,
        ..ControlSignals::default()
    }));
    stats.record(&retired(ControlSignals {
        branch: Some(BranchMode::Beq),
        ..ControlSignals::default()
    }));
    stats.record(&retired(ControlSignals {
        jump: true,
        link: true,
        ..ControlSignals::default()
    }));
    stats.record(&TickReport::default());

    assert_eq!(stats.cycles, 7);
    assert_eq!(stats.instructions_retired, 6);
    assert_eq!(
        (
            stats.inst_alu,
            stats.inst_load,
            stats.inst_store,
            stats.inst_branch,
            stats.inst_jump,
            stats.inst_other
        ),
        (1, 1, 1, 1, 1, 1)
    );
    assert!((stats.cpi() - 7.0 / 6.0).abs() < 1e-9);
}

#[test]
fn control_and_stall_counters() {
    let mut stats = SimStats::default();
    stats.record(&TickReport {
        redirect: Some(Redirect {
            source_pc: 0,
            target: 16,
        }),
        flushed: 2,
        ..TickReport::default()
    });
    stats.record(&TickReport {
        stalled: true,
        ..TickReport::default()
    });
    assert_eq!(stats.redirects, 1);
    assert_eq!(stats.flushed, 2);
    assert_eq!(stats.stall_cycles, 1);
}

#[test]
fn report_sections() {
    let mut stats = SimStats::default();
    stats.record(&retired(ControlSignals::default()));
    let full = stats.to_string();
    assert!(full.contains("sim_cycles               1"));
    assert!(full.contains("INSTRUCTION MIX"));
    assert!(full.contains("CONTROL FLOW"));
    assert!(full.contains("STALLS"));

    let only_mix = stats.render_sections(&["instruction_mix"]);
    assert!(only_mix.contains("op.alu"));
    assert!(!only_mix.contains("sim_cycles"));
    let all = stats.render_sections(&SECTIONS);
    for heading in ["sim_cpi", "INSTRUCTION MIX", "CONTROL FLOW", "STALLS"] {
        assert!(all.contains(heading), "{heading}");
    }
    stats.log();
}
