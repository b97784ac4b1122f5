use super::*;

fn opt(variant: &str, metal: &str, purity: &str, tone: &str) -> ConfigurationOption {
    ConfigurationOption::new(
        VariantId::new(variant),
        MetalId::new(metal),
        Some(PurityId::new(purity)),
        Some(ToneId::new(tone)),
    )
}

fn ring_catalogue() -> Vec<ConfigurationOption> {
    vec![
        opt("V1", "gold", "14k", "yellow").with_size("6"),
        opt("V2", "gold", "14k", "yellow").with_size("7"),
        opt("V3", "gold", "18k", "white").with_size("6"),
        opt("V4", "platinum", "950", "white").with_size("7"),
    ]
}

fn selection(metal: Option<&str>, purity: Option<&str>, tone: Option<&str>, size: Option<&str>) -> Selection {
    Selection {
        metal_id: metal.map(MetalId::new),
        purity_id: purity.map(PurityId::new),
        tone_id: tone.map(ToneId::new),
        size: size.map(String::from),
    }
}

#[test]
fn test_empty_selection_lists_everything() {
    let index = OptionIndex::build(&ring_catalogue(), "cm");
    let set = CandidateSet::compute(&index, &Selection::default());

    assert_eq!(set.values(Facet::Metal), vec!["gold", "platinum"]);
    assert_eq!(set.values(Facet::Purity), vec!["14k", "18k", "950"]);
    assert_eq!(set.values(Facet::Tone), vec!["yellow", "white"]);
    assert_eq!(set.values(Facet::Size), vec!["6", "7"]);
}

#[test]
fn test_metals_are_never_filtered() {
    let index = OptionIndex::build(&ring_catalogue(), "cm");
    let sel = selection(None, Some("950"), Some("white"), Some("7"));
    assert_eq!(metals(&index).len(), 2);
    assert_eq!(CandidateSet::compute(&index, &sel).metals.len(), 2);
}

#[test]
fn test_purities_filtered_by_metal_tone_and_size() {
    let index = OptionIndex::build(&ring_catalogue(), "cm");

    let sel = selection(Some("gold"), None, None, None);
    assert_eq!(purities(&index, &sel), vec![PurityId::new("14k"), PurityId::new("18k")]);

    let sel = selection(Some("gold"), None, Some("white"), None);
    assert_eq!(purities(&index, &sel), vec![PurityId::new("18k")]);

    let sel = selection(Some("gold"), None, None, Some("7"));
    assert_eq!(purities(&index, &sel), vec![PurityId::new("14k")]);
}

#[test]
fn test_purity_candidates_ignore_current_purity() {
    let index = OptionIndex::build(&ring_catalogue(), "cm");
    let sel = selection(Some("gold"), Some("14k"), None, None);
    assert_eq!(purities(&index, &sel).len(), 2);
}

#[test]
fn test_tones_filtered_by_metal_and_purity() {
    let index = OptionIndex::build(&ring_catalogue(), "cm");
    let sel = selection(None, Some("14k"), None, None);
    assert_eq!(tones(&index, &sel), vec![ToneId::new("yellow")]);

    let sel = selection(Some("platinum"), None, None, None);
    assert_eq!(tones(&index, &sel), vec![ToneId::new("white")]);
}

#[test]
fn test_sizes_filtered_by_metal_facets() {
    let index = OptionIndex::build(&ring_catalogue(), "cm");
    let sel = selection(Some("gold"), Some("18k"), None, None);
    assert_eq!(sizes(&index, &sel), Some(vec!["6".to_string()]));
}

#[test]
fn test_size_gating_without_sized_options() {
    let options = vec![opt("V1", "gold", "14k", "yellow"), opt("V2", "silver", "925", "white")];
    let index = OptionIndex::build(&options, "cm");
    assert!(!index.size_active());

    let sel = selection(Some("gold"), None, None, Some("7"));
    let set = CandidateSet::compute(&index, &sel);
    assert_eq!(set.sizes, None);
    assert!(set.values(Facet::Size).is_empty());
    // an inactive size never filters the other facets
    assert_eq!(set.purities, vec![PurityId::new("14k")]);
}

#[test]
fn test_unreachable_combination_yields_empty_lists() {
    let index = OptionIndex::build(&ring_catalogue(), "cm");
    let sel = selection(Some("platinum"), None, Some("yellow"), None);
    let set = CandidateSet::compute(&index, &sel);
    assert!(set.purities.is_empty());
    assert!(set.sizes.unwrap().is_empty());
}

#[test]
fn test_empty_catalogue() {
    let index = OptionIndex::build(&[], "cm");
    let set = CandidateSet::compute(&index, &Selection::default());
    assert_eq!(set, CandidateSet::default());
}

#[test]
fn test_options_without_purity_are_skipped_for_purity() {
    let options = vec![
        ConfigurationOption::new(VariantId::new("V1"), MetalId::new("silver"), None, None),
        opt("V2", "gold", "14k", "yellow"),
    ];
    let index = OptionIndex::build(&options, "cm");
    assert_eq!(purities(&index, &Selection::default()), vec![PurityId::new("14k")]);
    let sel = selection(Some("silver"), None, None, None);
    assert!(purities(&index, &sel).is_empty());
}

#[test]
fn test_metadata_sizes_use_default_unit() {
    let mut sized = opt("V1", "gold", "14k", "yellow");
    let mut meta = serde_json::Map::new();
    meta.insert("size_value".to_string(), serde_json::json!(2));
    sized.metadata = Some(meta);

    let index = OptionIndex::build(&[sized.clone()], "in");
    assert_eq!(sizes(&index, &Selection::default()), Some(vec!["2in".to_string()]));

    let index = OptionIndex::build(&[sized], "cm");
    assert_eq!(sizes(&index, &Selection::default()), Some(vec!["2cm".to_string()]));
}
