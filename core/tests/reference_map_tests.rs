mod common;

use common::{sample_reference, table, table_with_headers};
use factura_diff::{ReconConfig, ReferenceMap};

fn build(reference: &factura_diff::Table) -> ReferenceMap {
    ReferenceMap::build(reference, &ReconConfig::default()).expect("reference map builds")
}

#[test]
fn exact_match_wins_over_longer_substring_keys() {
    let map = build(&sample_reference());
    // "consulta" is itself a key; the longer "consulta general" and
    // "consulta externa" keys must not shadow the exact hit.
    assert_eq!(map.map_concept("Consulta"), Some("C000"));
}

#[test]
fn longest_substring_key_is_most_specific() {
    let map = build(&sample_reference());
    assert_eq!(
        map.map_concept("consulta general pediatria"),
        Some("C010"),
        "longer key 'consulta general' beats 'consulta'"
    );
}

#[test]
fn equal_length_substring_ties_resolve_to_earliest_row() {
    let reference = table_with_headers(
        &["Conceptos", "Códigos"],
        &[&["abcd", "FIRST"], &["wxyz", "SECOND"]],
    );
    let map = build(&reference);
    // Both four-char keys are substrings; the earlier reference row wins.
    assert_eq!(map.map_concept("abcd wxyz consulta"), Some("FIRST"));
}

#[test]
fn unmapped_concept_yields_none() {
    let map = build(&sample_reference());
    assert_eq!(map.map_concept("radiografia de torax"), None);
    assert_eq!(map.map_or_empty("radiografia de torax"), "");
}

#[test]
fn suffix_is_stripped_before_lookup() {
    let map = build(&sample_reference());
    assert_eq!(
        map.map_concept("Consulta Externa - 32 - AB25 - 0005357"),
        Some("C001")
    );
}

#[test]
fn later_duplicate_rows_overwrite_earlier_codes() {
    let reference = table_with_headers(
        &["Conceptos", "Códigos"],
        &[&["consulta", "OLD"], &["Consulta", "NEW"]],
    );
    let map = build(&reference);
    assert_eq!(map.len(), 1);
    assert_eq!(map.map_concept("consulta"), Some("NEW"));
}

#[test]
fn overwritten_key_keeps_its_tie_break_position() {
    let reference = table_with_headers(
        &["Conceptos", "Códigos"],
        &[
            &["abcd", "FIRST"],
            &["wxyz", "SECOND"],
            &["abcd", "FIRST2"],
        ],
    );
    let map = build(&reference);
    assert_eq!(
        map.map_concept("abcd wxyz otro"),
        Some("FIRST2"),
        "abcd keeps row-0 priority and carries its latest code"
    );
}

#[test]
fn header_match_is_case_and_accent_insensitive() {
    let reference = table_with_headers(
        &["CÓDIGOS", "CONCEPTOS"],
        &[&["C001", "Consulta Externa"]],
    );
    let map = build(&reference);
    // Columns are swapped relative to the positional default; the header
    // names must win.
    assert_eq!(map.map_concept("consulta externa"), Some("C001"));
}

#[test]
fn unknown_headers_fall_back_to_first_two_columns() {
    let reference = table_with_headers(
        &["descripcion", "tarifa"],
        &[&["Consulta Externa", "C001"]],
    );
    let map = build(&reference);
    assert_eq!(map.map_concept("consulta externa"), Some("C001"));
}

#[test]
fn headerless_reference_uses_first_two_columns() {
    let reference = table(&[&["Consulta Externa", "C001"]]);
    let map = build(&reference);
    assert_eq!(map.map_concept("consulta externa"), Some("C001"));
}

#[test]
fn blank_rows_and_empty_concepts_are_skipped() {
    let reference = table_with_headers(
        &["Conceptos", "Códigos"],
        &[
            &["", ""],
            &["   ", "C900"],
            &["Consulta Externa", "C001"],
        ],
    );
    let map = build(&reference);
    assert_eq!(map.len(), 1);
    assert_eq!(map.map_concept("consulta externa"), Some("C001"));
}

#[test]
fn reference_codes_are_trimmed_but_not_normalized() {
    let reference = table_with_headers(&["Conceptos", "Códigos"], &[&["Consulta", "  c1  "]]);
    let map = build(&reference);
    // Trimming happens at build time; codigo normalization happens in the
    // transform step.
    assert_eq!(map.map_concept("consulta"), Some("c1"));
}
