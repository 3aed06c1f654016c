//! Boundary-condition state handed to the engine.
//!
//! A boundary assignment is partial by design: every `None` is a
//! solver-determined unknown. Entries exist for exactly the components and
//! connections of one topology, so a lookup against a name the topology
//! never declared is a hard name-resolution error instead of a silent skip.

use std::collections::BTreeMap;

use hps_core::units::{MassRate, Power, Pressure, Temperature};
use hps_fluids::Species;
use hps_topology::{ConnKey, Topology};

use crate::error::{EngineError, EngineResult};

/// Attribute assignment on a single connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionState {
    pub pressure: Option<Pressure>,
    pub temperature: Option<Temperature>,
    /// Vapor mass fraction (0 = saturated liquid, 1 = saturated vapor).
    pub quality: Option<f64>,
    /// A fixed mass-flow constraint.
    pub mass_flow: Option<MassRate>,
    /// A starting value only; steers the iteration, constrains nothing.
    pub mass_flow_guess: Option<MassRate>,
    /// Pure-fluid composition of the stream.
    pub fluid: Option<Species>,
}

/// Attribute assignment on a single component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentState {
    pub isentropic_efficiency: Option<f64>,
    /// Outlet/inlet pressure ratio of a single-stream device.
    pub pressure_ratio: Option<f64>,
    /// Hot-side pressure ratio of a two-stream exchanger (pr1).
    pub pressure_ratio_hot: Option<f64>,
    /// Cold-side pressure ratio of a two-stream exchanger (pr2).
    pub pressure_ratio_cold: Option<f64>,
    /// Heat duty; negative values remove heat from the stream.
    pub heat_duty: Option<Power>,
}

/// The full (partial) boundary assignment for one topology.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryState {
    components: BTreeMap<String, ComponentState>,
    connections: BTreeMap<ConnKey, ConnectionState>,
}

impl BoundaryState {
    /// Pre-register an empty entry for every declared component and
    /// connection of the topology.
    pub fn for_topology(topology: &Topology) -> Self {
        let components = topology
            .components()
            .iter()
            .map(|c| (c.name.clone(), ComponentState::default()))
            .collect();
        let connections = topology
            .connection_keys()
            .map(|k| (k.clone(), ConnectionState::default()))
            .collect();
        Self {
            components,
            connections,
        }
    }

    pub fn component(&self, name: &str) -> EngineResult<&ComponentState> {
        self.components
            .get(name)
            .ok_or_else(|| EngineError::UnknownComponent {
                name: name.to_string(),
            })
    }

    pub fn component_mut(&mut self, name: &str) -> EngineResult<&mut ComponentState> {
        self.components
            .get_mut(name)
            .ok_or_else(|| EngineError::UnknownComponent {
                name: name.to_string(),
            })
    }

    pub fn connection(&self, key: &ConnKey) -> EngineResult<&ConnectionState> {
        self.connections
            .get(key)
            .ok_or_else(|| EngineError::UnknownConnection { key: key.clone() })
    }

    pub fn connection_mut(&mut self, key: &ConnKey) -> EngineResult<&mut ConnectionState> {
        self.connections
            .get_mut(key)
            .ok_or_else(|| EngineError::UnknownConnection { key: key.clone() })
    }

    pub fn components(&self) -> impl Iterator<Item = (&String, &ComponentState)> {
        self.components.iter()
    }

    pub fn connections(&self) -> impl Iterator<Item = (&ConnKey, &ConnectionState)> {
        self.connections.iter()
    }

    /// Connection keys matching a predicate, in deterministic order.
    pub fn connection_keys_where(&self, mut pred: impl FnMut(&ConnKey) -> bool) -> Vec<ConnKey> {
        self.connections
            .keys()
            .filter(|k| pred(k))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hps_core::units::bar;
    use hps_topology::{CycleVariant, ExpansionDevice, build_topology};

    fn regular_boundary() -> BoundaryState {
        let topo =
            build_topology(1, ExpansionDevice::ExpansionValve, &CycleVariant::Regular).unwrap();
        BoundaryState::for_topology(&topo)
    }

    #[test]
    fn entries_exist_for_every_declared_name() {
        let mut boundary = regular_boundary();
        boundary.component_mut("compressor").unwrap().isentropic_efficiency = Some(0.8);
        boundary
            .connection_mut(&ConnKey::new("evaporator", "compressor"))
            .unwrap()
            .pressure = Some(bar(8.36));

        assert_eq!(
            boundary.component("compressor").unwrap().isentropic_efficiency,
            Some(0.8)
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        let mut boundary = regular_boundary();
        let err = boundary.component_mut("compressor_2").unwrap_err();
        assert!(matches!(err, EngineError::UnknownComponent { .. }));

        let err = boundary
            .connection_mut(&ConnKey::new("condenser", "expander"))
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownConnection { .. }));
    }

    #[test]
    fn unset_attributes_default_to_unknowns() {
        let boundary = regular_boundary();
        let state = boundary
            .connection(&ConnKey::new("compressor", "condenser"))
            .unwrap();
        assert_eq!(*state, ConnectionState::default());
    }
}
