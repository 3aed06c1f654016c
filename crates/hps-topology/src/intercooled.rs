//! Intercooled multi-stage heat pump cycle.
//!
//! N+1 compression stages with N-1 intermediate exchangers between the first
//! N stages; the suction line doubles as the exchanger cold side, so the
//! flash gas leaving the evaporator precools each intercooler before entering
//! stage 1. The hot-side routing order is configurable: counterflow feeds
//! stage i into exchanger N-i, parallel flow into exchanger i.

use crate::builder::{Topology, TopologyBuilder};
use crate::decl::{ComponentKind, Port};
use crate::error::TopologyResult;
use crate::interleave::interleave;
use crate::stages::{repeat_comp, repeat_conn, stage_name};
use crate::variant::{ExchangeDirection, ExpansionDevice};

pub(crate) fn build(
    n: usize,
    device: ExpansionDevice,
    direction: ExchangeDirection,
) -> TopologyResult<Topology> {
    let device_name = device.base_name();
    let mut b = TopologyBuilder::new();

    // ------------------- Components -------------------
    b.add_component("evaporator", ComponentKind::Evaporator)?;
    b.add_components(interleave(
        repeat_comp("compressor", ComponentKind::Compressor, n),
        repeat_comp("intermediate_hx", ComponentKind::HeatExchanger, n - 1),
    )?)?;
    b.add_component(stage_name("compressor", n + 1), ComponentKind::Compressor)?;
    b.add_component("condenser", ComponentKind::HeatExchanger)?;
    b.add_component(device_name, device.component_kind())?;
    b.add_component("cycle_closer", ComponentKind::CycleCloser)?;

    // ------------------- Connections -------------------
    b.connect("cycle_closer", Port::Out1, "evaporator", Port::In1)?;

    // Suction side: the evaporator outlet traverses every intercooler cold
    // side in series before reaching stage 1.
    if n == 1 {
        b.connect("evaporator", Port::Out1, "compressor_1", Port::In1)?;
    } else {
        b.connect("evaporator", Port::Out1, "intermediate_hx_1", Port::In2)?;
        b.connect_all(repeat_conn(
            "intermediate_hx",
            Port::Out2,
            "intermediate_hx",
            Port::In2,
            1,
            2,
            n - 2,
        ))?;
        b.connect(
            stage_name("intermediate_hx", n - 1),
            Port::Out2,
            "compressor_1",
            Port::In1,
        )?;
    }

    // Discharge side: stages 1..N-1 pass through an intercooler, stage N
    // feeds the trailing stage directly.
    match direction {
        ExchangeDirection::ParallelFlow => {
            b.connect_all(interleave(
                repeat_conn("compressor", Port::Out1, "intermediate_hx", Port::In1, 1, 1, n - 1),
                repeat_conn("intermediate_hx", Port::Out1, "compressor", Port::In1, 1, 2, n - 1),
            )?)?;
        }
        ExchangeDirection::Counterflow => {
            for i in 1..n {
                let hx = stage_name("intermediate_hx", n - i);
                b.connect(stage_name("compressor", i), Port::Out1, hx.clone(), Port::In1)?;
                b.connect(hx, Port::Out1, stage_name("compressor", i + 1), Port::In1)?;
            }
        }
    }
    b.connect(
        stage_name("compressor", n),
        Port::Out1,
        stage_name("compressor", n + 1),
        Port::In1,
    )?;

    b.connect(stage_name("compressor", n + 1), Port::Out1, "condenser", Port::In1)?;
    b.connect("condenser", Port::Out1, device_name, Port::In1)?;
    b.connect(device_name, Port::Out1, "cycle_closer", Port::In1)?;

    b.build()
}
