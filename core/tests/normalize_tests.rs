use factura_diff::{
    Cell, ConceptRules, ReconConfig, normalize_codigo, normalize_concept, normalize_historia,
};

fn default_rules() -> ConceptRules {
    ConceptRules::from_config(&ReconConfig::default()).expect("default rules compile")
}

#[test]
fn concept_strips_diacritics_punctuation_and_case() {
    let rules = default_rules();
    assert_eq!(
        normalize_concept("  Análisis;de/Sangre..  ", &rules),
        "analisis de sangre"
    );
}

#[test]
fn concept_removes_invisible_spaces() {
    let rules = default_rules();
    assert_eq!(
        normalize_concept("consulta\u{a0}general\u{200b}", &rules),
        "consulta general"
    );
}

#[test]
fn concept_strips_hyphenated_batch_suffix() {
    let rules = default_rules();
    assert_eq!(
        normalize_concept("Consulta Externa - 32 - AB25 - 0005357", &rules),
        "consulta externa"
    );
    assert_eq!(
        normalize_concept("Ecografía abdominal-XY12-0001", &rules),
        "ecografia abdominal"
    );
}

#[test]
fn concept_keeps_suffix_when_rule_disabled() {
    let config = ReconConfig::builder()
        .strip_concept_suffix(false)
        .build()
        .expect("valid config");
    let rules = ConceptRules::from_config(&config).expect("rules compile");
    assert_eq!(
        normalize_concept("Consulta Externa -AB25", &rules),
        "consulta externa -ab25"
    );
}

#[test]
fn concept_single_char_groups_are_not_a_suffix() {
    let rules = default_rules();
    // Groups shorter than two characters do not trigger the heuristic.
    assert_eq!(normalize_concept("Vitamina-D", &rules), "vitamina-d");
}

#[test]
fn concept_normalization_is_idempotent() {
    let rules = default_rules();
    for raw in [
        "Consulta Externa - 32 - AB25 - 0005357",
        "PRUEBA:de_esfuerzo",
        "x-12.",
        "\u{a0}\u{200b}",
        "sin cambios",
    ] {
        let once = normalize_concept(raw, &rules);
        assert_eq!(normalize_concept(&once, &rules), once, "input {raw:?}");
    }
}

#[test]
fn historia_is_a_digit_string_not_a_number() {
    assert_eq!(normalize_historia("0012345"), "0012345");
    assert_eq!(normalize_historia("H-00123"), "00123");
    assert_eq!(normalize_historia(" 1 2\u{a0}3 "), "123");
    assert_eq!(normalize_historia(""), "");
    assert_eq!(normalize_historia("sin numero"), "");
}

#[test]
fn codigo_absorbs_spreadsheet_float_artifacts() {
    assert_eq!(normalize_codigo("123.0"), "123");
    assert_eq!(normalize_codigo("123"), "123");
    assert_eq!(normalize_codigo("123.5"), "123.5");
    assert_eq!(normalize_codigo("AB-12"), "AB-12");
    assert_eq!(normalize_codigo("c001"), "C001");
    assert_eq!(normalize_codigo(" \u{200b}9\u{a0} "), "9");
    assert_eq!(normalize_codigo(""), "");
}

#[test]
fn numeric_cells_render_without_fractional_part() {
    assert_eq!(Cell::Number(123.0).to_text(), "123");
    assert_eq!(Cell::Number(123.5).to_text(), "123.5");
    assert_eq!(Cell::Empty.to_text(), "");
}
