//! Vapor-injection (economizer) cycle.
//!
//! N+1 compression stages interleaved with N merge points on the high side,
//! N+1 expansion stages interleaved with N splitter points on the low side.
//! Splitter k bleeds flash gas through its second outlet into merge N-k+1,
//! recovering the vapor into the matching intermediate compression stage.
//!
//! Cycle order is evaporator-first: cycle_closer -> evaporator ->
//! compressor_1, with the expansion train on the return path.

use crate::builder::{Topology, TopologyBuilder};
use crate::decl::{ComponentKind, Port};
use crate::error::TopologyResult;
use crate::interleave::interleave;
use crate::stages::{repeat_comp, repeat_conn, stage_name};
use crate::variant::ExpansionDevice;

pub(crate) fn build(n: usize, device: ExpansionDevice) -> TopologyResult<Topology> {
    let device_name = device.base_name();
    let mut b = TopologyBuilder::new();

    // ------------------- Components -------------------
    b.add_component("evaporator", ComponentKind::Evaporator)?;
    b.add_components(interleave(
        repeat_comp("compressor", ComponentKind::Compressor, n),
        repeat_comp("merge", ComponentKind::Merge, n),
    )?)?;
    b.add_component(stage_name("compressor", n + 1), ComponentKind::Compressor)?;
    b.add_component("condenser", ComponentKind::HeatExchanger)?;
    b.add_components(interleave(
        repeat_comp(device_name, device.component_kind(), n),
        repeat_comp("splitter", ComponentKind::Splitter, n),
    )?)?;
    b.add_component(stage_name(device_name, n + 1), device.component_kind())?;
    b.add_component("cycle_closer", ComponentKind::CycleCloser)?;

    // ------------------- Connections -------------------
    b.connect("cycle_closer", Port::Out1, "evaporator", Port::In1)?;
    b.connect("evaporator", Port::Out1, "compressor_1", Port::In1)?;
    b.connect_all(interleave(
        repeat_conn("compressor", Port::Out1, "merge", Port::In1, 1, 1, n),
        repeat_conn("merge", Port::Out1, "compressor", Port::In1, 1, 2, n),
    )?)?;
    b.connect(stage_name("compressor", n + 1), Port::Out1, "condenser", Port::In1)?;
    b.connect("condenser", Port::Out1, stage_name(device_name, 1), Port::In1)?;
    b.connect_all(interleave(
        repeat_conn(device_name, Port::Out1, "splitter", Port::In1, 1, 1, n),
        repeat_conn("splitter", Port::Out1, device_name, Port::In1, 1, 2, n),
    )?)?;
    b.connect(stage_name(device_name, n + 1), Port::Out1, "cycle_closer", Port::In1)?;

    // Cross wiring: splitter k injects into merge N-k+1.
    for k in 1..=n {
        b.connect(
            stage_name("splitter", k),
            Port::Out2,
            stage_name("merge", n - k + 1),
            Port::In2,
        )?;
    }

    b.build()
}
