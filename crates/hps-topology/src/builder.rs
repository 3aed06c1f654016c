//! Incremental, validating topology builder.

use std::collections::BTreeMap;

use crate::decl::{ComponentDecl, ComponentKind, ConnKey, ConnectionDecl, Port};
use crate::error::{TopologyError, TopologyResult};
use crate::stages::ConnTuple;

/// An immutable, validated cycle topology.
///
/// Component order is the declaration order (deterministic for identical
/// inputs); connections are keyed by their ordered (source, target) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    components: Vec<ComponentDecl>,
    index: BTreeMap<String, usize>,
    connections: BTreeMap<ConnKey, ConnectionDecl>,
}

impl Topology {
    pub fn components(&self) -> &[ComponentDecl] {
        &self.components
    }

    pub fn component(&self, name: &str) -> Option<&ComponentDecl> {
        self.index.get(name).map(|&i| &self.components[i])
    }

    pub fn contains_component(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn connections(&self) -> impl Iterator<Item = &ConnectionDecl> {
        self.connections.values()
    }

    pub fn connection_keys(&self) -> impl Iterator<Item = &ConnKey> {
        self.connections.keys()
    }

    pub fn connection(&self, key: &ConnKey) -> Option<&ConnectionDecl> {
        self.connections.get(key)
    }

    pub fn contains_connection(&self, key: &ConnKey) -> bool {
        self.connections.contains_key(key)
    }

    /// The unique connection leaving `source` through `port`.
    pub fn outlet_of(&self, source: &str, port: Port) -> TopologyResult<ConnKey> {
        self.connections
            .values()
            .find(|c| c.source == source && c.source_port == port)
            .map(ConnectionDecl::key)
            .ok_or_else(|| TopologyError::MissingOutlet {
                name: source.to_string(),
                port,
            })
    }

    /// Names of all components of one kind, in declaration order.
    pub fn components_of_kind(&self, kind: ComponentKind) -> Vec<&str> {
        self.components
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Whether any connection attaches to the component's secondary stream.
    pub fn has_second_stream(&self, name: &str) -> bool {
        self.connections.values().any(|c| {
            (c.source == name && c.source_port == Port::Out2)
                || (c.target == name && c.target_port == Port::In2)
        })
    }
}

/// Builder for constructing a topology incrementally.
///
/// Components must be declared before connections reference them; every
/// `connect` call is validated eagerly so a misnamed endpoint fails at the
/// declaration site, not at solve time.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    components: Vec<ComponentDecl>,
    index: BTreeMap<String, usize>,
    connections: BTreeMap<ConnKey, ConnectionDecl>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a component. Duplicate names are rejected.
    pub fn add_component(
        &mut self,
        name: impl Into<String>,
        kind: ComponentKind,
    ) -> TopologyResult<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(TopologyError::DuplicateComponent { name });
        }
        self.index.insert(name.clone(), self.components.len());
        self.components.push(ComponentDecl::new(name, kind));
        Ok(())
    }

    /// Declare a batch of components in order.
    pub fn add_components(
        &mut self,
        decls: impl IntoIterator<Item = (String, ComponentKind)>,
    ) -> TopologyResult<()> {
        for (name, kind) in decls {
            self.add_component(name, kind)?;
        }
        Ok(())
    }

    /// Declare a connection between two already-declared component ports.
    ///
    /// At most one connection may exist per ordered (source, target) pair;
    /// a second declaration is a hard error rather than a silent overwrite.
    pub fn connect(
        &mut self,
        source: impl Into<String>,
        source_port: Port,
        target: impl Into<String>,
        target_port: Port,
    ) -> TopologyResult<()> {
        let decl = ConnectionDecl::new(source, source_port, target, target_port);

        if !self.index.contains_key(&decl.source) {
            return Err(TopologyError::UnknownComponent {
                name: decl.source.clone(),
            });
        }
        if !self.index.contains_key(&decl.target) {
            return Err(TopologyError::UnknownComponent {
                name: decl.target.clone(),
            });
        }
        if !decl.source_port.is_outlet() {
            return Err(TopologyError::InvalidPort {
                name: decl.source.clone(),
                port: decl.source_port,
                role: "source",
            });
        }
        if !decl.target_port.is_inlet() {
            return Err(TopologyError::InvalidPort {
                name: decl.target.clone(),
                port: decl.target_port,
                role: "target",
            });
        }

        let key = decl.key();
        if self.connections.contains_key(&key) {
            return Err(TopologyError::DuplicateConnection { key });
        }
        self.connections.insert(key, decl);
        Ok(())
    }

    /// Declare a batch of connections in order.
    pub fn connect_all(&mut self, tuples: impl IntoIterator<Item = ConnTuple>) -> TopologyResult<()> {
        for (source, source_port, target, target_port) in tuples {
            self.connect(source, source_port, target, target_port)?;
        }
        Ok(())
    }

    /// Validate and freeze into an immutable `Topology`.
    pub fn build(self) -> TopologyResult<Topology> {
        // Endpoint existence is enforced eagerly in `connect`; here we only
        // reject components that no connection ever references.
        for comp in &self.components {
            let referenced = self
                .connections
                .values()
                .any(|c| c.source == comp.name || c.target == comp.name);
            if !referenced {
                return Err(TopologyError::IsolatedComponent {
                    name: comp.name.clone(),
                });
            }
        }

        Ok(Topology {
            components: self.components,
            index: self.index,
            connections: self.connections,
        })
    }
}
