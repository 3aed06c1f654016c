//! Stage-repetition helpers for multi-stage cycle variants.
//!
//! Repeated stages carry a 1-based index suffix (`compressor_3`); these
//! helpers generate the declaration tuples that the variant builders feed
//! through [`crate::interleave`] into build order.

use crate::decl::{ComponentKind, Port};

/// Name of stage `i` (1-based) of a repeated component.
pub fn stage_name(base: &str, i: usize) -> String {
    format!("{base}_{i}")
}

/// Declare `n` indexed stages of one component kind: `base_1 .. base_n`.
pub fn repeat_comp(base: &str, kind: ComponentKind, n: usize) -> Vec<(String, ComponentKind)> {
    (1..=n).map(|i| (stage_name(base, i), kind)).collect()
}

/// Connection tuple as consumed by `TopologyBuilder::connect_all`.
pub type ConnTuple = (String, Port, String, Port);

/// Declare `n` indexed connections between two repeated components.
///
/// Stage indices start at `source_offset` / `target_offset`, so
/// `repeat_conn("merge", Out1, "compressor", In1, 1, 2, n)` wires
/// `merge_i -> compressor_{i+1}`.
pub fn repeat_conn(
    source_base: &str,
    source_port: Port,
    target_base: &str,
    target_port: Port,
    source_offset: usize,
    target_offset: usize,
    n: usize,
) -> Vec<ConnTuple> {
    (0..n)
        .map(|i| {
            (
                stage_name(source_base, i + source_offset),
                source_port,
                stage_name(target_base, i + target_offset),
                target_port,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_comp_names_are_one_based() {
        let comps = repeat_comp("compressor", ComponentKind::Compressor, 3);
        let names: Vec<&str> = comps.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["compressor_1", "compressor_2", "compressor_3"]);
    }

    #[test]
    fn repeat_conn_offsets() {
        let conns = repeat_conn("merge", Port::Out1, "compressor", Port::In1, 1, 2, 2);
        assert_eq!(
            conns,
            vec![
                (
                    "merge_1".to_string(),
                    Port::Out1,
                    "compressor_2".to_string(),
                    Port::In1
                ),
                (
                    "merge_2".to_string(),
                    Port::Out1,
                    "compressor_3".to_string(),
                    Port::In1
                ),
            ]
        );
    }

    #[test]
    fn zero_repeats_is_empty() {
        assert!(repeat_comp("splitter", ComponentKind::Splitter, 0).is_empty());
        assert!(repeat_conn("a", Port::Out1, "b", Port::In1, 1, 1, 0).is_empty());
    }
}
