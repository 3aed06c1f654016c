//! Regular single-stage heat pump cycle.
//!
//! evaporator -> compressor -> condenser -> expansion device, closed by a
//! cycle closer on the back edge.

use crate::builder::{Topology, TopologyBuilder};
use crate::decl::{ComponentKind, Port};
use crate::error::TopologyResult;
use crate::variant::ExpansionDevice;

pub(crate) fn build(device: ExpansionDevice) -> TopologyResult<Topology> {
    let device_name = device.base_name();
    let mut b = TopologyBuilder::new();

    b.add_component("evaporator", ComponentKind::Evaporator)?;
    b.add_component("compressor", ComponentKind::Compressor)?;
    b.add_component("condenser", ComponentKind::HeatExchanger)?;
    b.add_component(device_name, device.component_kind())?;
    b.add_component("cycle_closer", ComponentKind::CycleCloser)?;

    b.connect("cycle_closer", Port::Out1, "evaporator", Port::In1)?;
    b.connect("evaporator", Port::Out1, "compressor", Port::In1)?;
    b.connect("compressor", Port::Out1, "condenser", Port::In1)?;
    b.connect("condenser", Port::Out1, device_name, Port::In1)?;
    b.connect(device_name, Port::Out1, "cycle_closer", Port::In1)?;

    b.build()
}
