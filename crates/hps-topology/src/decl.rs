//! Component and connection declarations.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Kind of a declared cycle component.
///
/// Simple and two-stream heat exchangers share the `HeatExchanger` kind;
/// whether a second stream exists is a property of the wiring, not the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Evaporator,
    Compressor,
    HeatExchanger,
    Valve,
    Turbine,
    Splitter,
    Merge,
    Pump,
    CycleCloser,
    Source,
    Sink,
}

impl ComponentKind {
    /// Components whose shaft power counts as work input for COP.
    pub fn is_work_machine(self) -> bool {
        matches!(self, ComponentKind::Compressor | ComponentKind::Turbine)
    }
}

/// A component port. `In2`/`Out2` form the secondary stream of two-stream
/// exchangers, the injection inlet of merges and the bleed outlet of splitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Port {
    In1,
    In2,
    Out1,
    Out2,
}

impl Port {
    pub fn is_inlet(self) -> bool {
        matches!(self, Port::In1 | Port::In2)
    }

    pub fn is_outlet(self) -> bool {
        matches!(self, Port::Out1 | Port::Out2)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Port::In1 => "in1",
            Port::In2 => "in2",
            Port::Out1 => "out1",
            Port::Out2 => "out2",
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named component declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDecl {
    pub name: String,
    pub kind: ComponentKind,
}

impl ComponentDecl {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Typed key identifying a connection by its ordered (source, target) pair.
///
/// Replaces the stringly `"{source}-{target}"` convention; two connections
/// between the same ordered pair cannot coexist.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConnKey {
    pub source: String,
    pub target: String,
}

impl ConnKey {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Human-readable label matching the engine-side connection label.
    pub fn label(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }
}

impl fmt::Display for ConnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

/// A directed connection declaration between two component ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDecl {
    pub source: String,
    pub source_port: Port,
    pub target: String,
    pub target_port: Port,
}

impl ConnectionDecl {
    pub fn new(
        source: impl Into<String>,
        source_port: Port,
        target: impl Into<String>,
        target_port: Port,
    ) -> Self {
        Self {
            source: source.into(),
            source_port,
            target: target.into(),
            target_port,
        }
    }

    pub fn key(&self) -> ConnKey {
        ConnKey::new(self.source.clone(), self.target.clone())
    }
}
