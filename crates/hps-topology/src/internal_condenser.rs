//! Internally-coupled condenser cycle.
//!
//! Same compression train as the intercooled variant, but the condenser is a
//! two-stream exchanger: a secondary consumer loop (pump -> intercooler cold
//! sides in series -> condenser -> load) carries the delivered heat, so the
//! intercoolers preheat the consumer water instead of the suction gas.

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
    // heat pump
    b.add_component("evaporator", ComponentKind::Evaporator)?;
    b.add_components(interleave(
        repeat_comp("compressor", ComponentKind::Compressor, n),
        repeat_comp("intermediate_hx", ComponentKind::HeatExchanger, n - 1),
    )?)?;
    b.add_component(stage_name("compressor", n + 1), ComponentKind::Compressor)?;
    b.add_component("condenser", ComponentKind::HeatExchanger)?;
    b.add_component(device_name, device.component_kind())?;
    b.add_component("cycle_closer", ComponentKind::CycleCloser)?;
    // consumer
    b.add_component("consumer_pump", ComponentKind::Pump)?;
    b.add_component("consumer", ComponentKind::HeatExchanger)?;
    b.add_component("consumer_cycle_closer", ComponentKind::CycleCloser)?;

    // ------------------- Connections -------------------
    // heat pump
    b.connect("cycle_closer", Port::Out1, "evaporator", Port::In1)?;
    b.connect("evaporator", Port::Out1, "compressor_1", Port::In1)?;

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

    // consumer
    b.connect("consumer_cycle_closer", Port::Out1, "consumer_pump", Port::In1)?;
    if n == 1 {
        b.connect("consumer_pump", Port::Out1, "condenser", Port::In2)?;
    } else {
        b.connect("consumer_pump", Port::Out1, "intermediate_hx_1", Port::In2)?;
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
            "condenser",
            Port::In2,
        )?;
    }
    b.connect("condenser", Port::Out2, "consumer", Port::In1)?;
    b.connect("consumer", Port::Out1, "consumer_cycle_closer", Port::In1)?;

    b.build()
}
