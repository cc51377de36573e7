//! Data Hazard Forwarding and Control Hazard Flushing.
//!
//! This module implements the logic that keeps the pipeline consistent when
//! instructions depend on each other. It provides:
//! 1. **Operand Forwarding:** Resolves Read-After-Write hazards by bypassing
//!    the register file with results that have not been committed yet.
//! 2. **Redirects:** Turns a branch or jump resolved in Execute into the fetch
//!    redirect consumed one tick later.
//! 3. **Flush and Stall Control:** Decides which stage slots become bubbles.
//!    The delay slot of a redirect always executes, even when a stall delays
//!    its fetch until after the branch has left Execute.
//!
//! The register file already provides write-then-read ordering for Decode, so
//! forwarding only has to cover the two producers younger than the register
//! file: the instruction one ahead (in Memory this tick) and the instruction
//! two ahead (in Writeback this tick). Because the Memory stage output
//! includes load data, a load followed by a dependent instruction needs no
//! stall.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::arch::gpr::RegWrite;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, Latches};

/// A fetch redirect produced by a taken branch or jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    /// Program counter of the branch or jump that resolved taken.
    pub source_pc: u32,
    /// Address fetched once the redirect is applied.
    pub target: u32,
}

/// Returns the redirect carried by the EX/ME latch, if any.
///
/// Execute latches its branch resolution into EX/ME, so the redirect reaches
/// Fetch one tick after the branch executes. Without stalls the delay slot
/// has entered Execute by then and the next two sequential instructions are
/// in flight.
pub const fn redirect(ex_mem: &ExMemEntry) -> Option<Redirect> {
    if ex_mem.valid && ex_mem.branch_taken {
        Some(Redirect {
            source_pc: ex_mem.pc,
            target: ex_mem.branch_target,
        })
    } else {
        None
    }
}

/// Where the delay slot of a pending redirect is when the redirect arrives.
///
/// Without stalls the delay slot is always in Execute. A stall between the
/// branch and its delay slot leaves the delay slot further back, and the
/// redirect must not discard it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DelaySlot {
    /// Already past Decode; IF/ID holds a wrong-path instruction.
    #[default]
    Issued,
    /// Waiting in IF/ID; only the word Fetch would issue is wrong-path.
    Fetched,
    /// Not fetched yet; Fetch issues it before the redirect is applied.
    Unfetched,
}

impl DelaySlot {
    /// Locates the delay slot of `redirect` given the latches and the fetch
    /// program counter.
    pub const fn locate(redirect: &Redirect, latches: &Latches, fetch_pc: u32) -> Self {
        let slot_pc = redirect.source_pc.wrapping_add(INSTRUCTION_SIZE);
        if latches.if_id.valid && latches.if_id.pc == slot_pc {
            Self::Fetched
        } else if !latches.if_id.valid
            && !(latches.id_ex.valid && latches.id_ex.pc == slot_pc)
            && fetch_pc == slot_pc
        {
            Self::Unfetched
        } else {
            // includes a branch in a delay slot, whose own delay slot was flushed
            Self::Issued
        }
    }
}

/// Per-tick control decisions shared by Fetch and Decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineControl {
    /// External stall input: Fetch holds its program counter and emits bubbles.
    pub stall: bool,
    /// Redirect pending this tick, from EX/ME or deferred from an earlier tick.
    pub redirect: Option<Redirect>,
    /// Position of the pending redirect's delay slot.
    pub delay_slot: DelaySlot,
}

impl PipelineControl {
    /// Combines the external stall input with the redirect held in EX/ME or
    /// the one deferred while its delay slot was not yet fetched.
    ///
    /// `fetch_pc` is the program counter Fetch reads this tick.
    pub const fn new(
        stall: bool,
        latches: &Latches,
        fetch_pc: u32,
        deferred: Option<Redirect>,
    ) -> Self {
        let pending = match redirect(&latches.ex_mem) {
            Some(r) => Some(r),
            None => deferred,
        };
        let delay_slot = match &pending {
            Some(r) => DelaySlot::locate(r, latches, fetch_pc),
            None => DelaySlot::Issued,
        };
        Self {
            stall,
            redirect: pending,
            delay_slot,
        }
    }

    /// Decode converts the IF/ID entry into a bubble.
    pub const fn squash_decode(&self) -> bool {
        self.redirect.is_some() && matches!(self.delay_slot, DelaySlot::Issued)
    }

    /// The redirect waits because its delay slot cannot be fetched this tick.
    pub const fn defers(&self) -> bool {
        self.stall && self.redirect.is_some() && matches!(self.delay_slot, DelaySlot::Unfetched)
    }

    /// Redirect that moves the fetch program counter this tick.
    pub const fn applied(&self) -> Option<Redirect> {
        if self.defers() { None } else { self.redirect }
    }

    /// Redirect carried into the next tick.
    pub const fn deferred(&self) -> Option<Redirect> {
        if self.defers() { self.redirect } else { None }
    }

    /// Number of valid wrong-path instructions discarded this tick.
    ///
    /// On a redirect these are the instruction leaving IF/ID when the delay
    /// slot has already issued, and the word Fetch would have issued unless
    /// Fetch is stalled or is issuing the delay slot itself.
    pub const fn flushed(&self, if_id: &IfIdEntry) -> u32 {
        if self.redirect.is_none() {
            return 0;
        }
        match self.delay_slot {
            DelaySlot::Issued => (if_id.valid as u32) + (!self.stall as u32),
            DelaySlot::Fetched => !self.stall as u32,
            DelaySlot::Unfetched => 0,
        }
    }
}

/// Forwards register values from later pipeline stages to Execute.
///
/// Sources are applied from oldest to newest so the nearest producer wins.
/// Register 0 is never forwarded.
///
/// # Arguments
///
/// * `id_entry` - The ID/EX entry whose operands are being resolved.
/// * `newer` - This tick's Memory stage result (the instruction one ahead).
/// * `older` - This tick's Writeback commit (the instruction two ahead).
/// * `trace` - Emit a trace event for each forwarded operand.
///
/// # Returns
///
/// A tuple `(rs_val, rt_val)` with the most recent values of the two slots.
pub fn forward_operands(
    id_entry: &IdExEntry,
    newer: Option<RegWrite>,
    older: Option<RegWrite>,
    trace: bool,
) -> (u32, u32) {
    let mut a = id_entry.rs_data;
    let mut b = id_entry.rt_data;

    let mut a_src = "RegFile";
    let mut b_src = "RegFile";

    for (write, src) in [(older, "WB"), (newer, "MEM")] {
        let Some(w) = write else { continue };
        if w.addr == 0 {
            continue;
        }
        if w.addr == id_entry.rs {
            a = w.value;
            a_src = src;
        }
        if w.addr == id_entry.rt {
            b = w.value;
            b_src = src;
        }
    }

    if trace && (a_src != "RegFile" || b_src != "RegFile") {
        tracing::trace!(
            pc = format_args!("{:#010x}", id_entry.pc),
            "FWD rs=${}<-{a_src} ({a:#010x}) rt=${}<-{b_src} ({b:#010x})",
            id_entry.rs,
            id_entry.rt,
        );
    }

    (a, b)
}
