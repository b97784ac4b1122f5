use super::*;

fn opt(variant: &str, metal: &str, purity: &str, tone: &str) -> ConfigurationOption {
    ConfigurationOption::new(
        VariantId::new(variant),
        MetalId::new(metal),
        Some(PurityId::new(purity)),
        Some(ToneId::new(tone)),
    )
}

fn metal(v: &str) -> Action {
    Action::SetMetal(Some(MetalId::new(v)))
}

fn purity(v: &str) -> Action {
    Action::SetPurity(Some(PurityId::new(v)))
}

fn tone(v: &str) -> Action {
    Action::SetTone(Some(ToneId::new(v)))
}

fn size(v: &str) -> Action {
    Action::SetSize(Some(v.to_string()))
}

fn init(v: &str) -> Action {
    Action::Init {
        default_variant: Some(VariantId::new(v)),
    }
}

fn values(sel: &Selection) -> [Option<&str>; 4] {
    [
        sel.value(Facet::Metal),
        sel.value(Facet::Purity),
        sel.value(Facet::Tone),
        sel.value(Facet::Size),
    ]
}

#[test]
fn test_full_match_resolves_once_and_clears_all_errors() {
    let mut m = ConfigurationMatcher::from_options(vec![opt("V1", "1", "10", "100").with_size("2cm")]);

    let t = m.apply(metal("1"));
    assert!(t.resolved_variant.is_none());
    assert_eq!(m.candidates().purities, vec![PurityId::new("10")]);

    let t2 = m.apply(purity("10"));
    assert!(t2.resolved_variant.is_none());
    assert_eq!(m.candidates().tones, vec![ToneId::new("100")]);

    let t3 = m.apply(tone("100"));
    assert!(t3.resolved_variant.is_none());

    let t4 = m.apply(size("2cm"));
    assert_eq!(t4.resolved_variant, Some(VariantId::new("V1")));
    assert_eq!(t4.fields_to_clear, Facet::ALL.to_vec());

    let resolutions = [t, t2, t3, t4]
        .iter()
        .filter(|t| t.resolved_variant.is_some())
        .count();
    assert_eq!(resolutions, 1);
}

#[test]
fn test_invalidation_cascade() {
    let options = vec![opt("V1", "1", "10", "100"), opt("V2", "2", "20", "200")];
    let mut m = ConfigurationMatcher::from_options(options);
    m.apply(init("V1"));
    assert_eq!(values(m.selection()), [Some("1"), Some("10"), Some("100"), None]);

    let t = m.apply(metal("2"));
    assert!(t.changed);
    assert_eq!(values(m.selection()), [Some("2"), None, None, None]);
    assert!(t.resolved_variant.is_none());

    let c = m.candidates();
    assert_eq!(c.purities, vec![PurityId::new("20")]);
    assert_eq!(c.tones, vec![ToneId::new("200")]);
}

#[test]
fn test_retention_keeps_compatible_facets() {
    let options = vec![
        opt("V1", "gold", "18k", "yellow"),
        opt("V2", "gold", "14k", "yellow"),
        opt("V3", "gold", "14k", "rose"),
    ];
    let mut m = ConfigurationMatcher::from_options(options);
    m.apply(init("V1"));

    // 14k/yellow exists, so tone survives the purity change
    let t = m.apply(purity("14k"));
    assert_eq!(values(m.selection()), [Some("gold"), Some("14k"), Some("yellow"), None]);
    assert_eq!(t.resolved_variant, Some(VariantId::new("V2")));
}

#[test]
fn test_retention_is_conditioned_on_earlier_facets() {
    // metal survives the tone change, but purity 18k only exists with gold/yellow
    let options = vec![
        opt("V1", "gold", "18k", "yellow"),
        opt("V2", "gold", "14k", "rose"),
        opt("V3", "silver", "18k", "rose"),
    ];
    let mut m = ConfigurationMatcher::from_options(options);
    m.apply(init("V1"));

    m.apply(tone("rose"));
    assert_eq!(values(m.selection()), [Some("gold"), None, Some("rose"), None]);
}

#[test]
fn test_size_change_rechecks_metal_facets() {
    let options = vec![
        opt("V1", "gold", "18k", "yellow").with_size("6"),
        opt("V2", "gold", "14k", "yellow").with_size("7"),
    ];
    let mut m = ConfigurationMatcher::from_options(options);
    m.apply(init("V1"));
    assert_eq!(m.selection().size.as_deref(), Some("6"));

    let t = m.apply(size("7"));
    assert_eq!(values(m.selection()), [Some("gold"), None, Some("yellow"), Some("7")]);
    assert!(t.resolved_variant.is_none());
    assert_eq!(m.candidates().purities, vec![PurityId::new("14k")]);
}

#[test]
fn test_autofill_from_tone() {
    let options = vec![opt("V2", "gold", "14k", "rose"), opt("V1", "gold", "18k", "rose")];
    let mut m = ConfigurationMatcher::from_options(options);

    let t = m.apply(tone("rose"));
    // lowest variant id wins regardless of list order
    assert_eq!(values(m.selection()), [Some("gold"), Some("18k"), Some("rose"), None]);
    assert_eq!(t.resolved_variant, Some(VariantId::new("V1")));
    assert_eq!(t.fields_to_clear, vec![Facet::Metal, Facet::Purity, Facet::Tone]);
}

#[test]
fn test_autofill_compares_numeric_variant_ids_as_numbers() {
    let options = vec![opt("10", "1", "20", "100"), opt("9", "1", "10", "100")];
    let mut m = ConfigurationMatcher::from_options(options);

    let t = m.apply(metal("1"));
    assert_eq!(m.selection().purity_id, Some(PurityId::new("10")));
    assert_eq!(t.resolved_variant, Some(VariantId::new("9")));
}

#[test]
fn test_variant_order_mixes_numeric_and_text_ids() {
    let id = |s: &str| VariantId::new(s);
    assert_eq!(variant_order(&id("9"), &id("10")), Ordering::Less);
    assert_eq!(variant_order(&id("V10"), &id("V9")), Ordering::Less);
    assert_eq!(variant_order(&id("10"), &id("V1")), Ordering::Less);
    assert_eq!(variant_order(&id("007"), &id("7")), Ordering::Less);
}

#[test]
fn test_autofill_first_listed_policy() {
    let options = vec![opt("V2", "gold", "14k", "rose"), opt("V1", "gold", "18k", "rose")];
    let mut m = ConfigurationMatcher::with_policy(options, AutofillPolicy::FirstListed, "cm");

    m.apply(tone("rose"));
    assert_eq!(m.selection().purity_id, Some(PurityId::new("14k")));
}

#[test]
fn test_autofill_disabled_policy() {
    let options = vec![opt("V1", "gold", "14k", "rose")];
    let mut m = ConfigurationMatcher::with_policy(options, AutofillPolicy::Disabled, "cm");

    let t = m.apply(tone("rose"));
    assert_eq!(values(m.selection()), [None, None, Some("rose"), None]);
    assert_eq!(t.fields_to_clear, vec![Facet::Tone]);
    assert_eq!(m.candidates().metals.len(), 1);
}

#[test]
fn test_autofill_respects_chosen_size() {
    let options = vec![
        opt("V1", "gold", "14k", "yellow").with_size("6"),
        opt("V2", "gold", "18k", "white").with_size("7"),
    ];
    let mut m = ConfigurationMatcher::from_options(options);

    m.apply(size("7"));
    let t = m.apply(metal("gold"));
    assert_eq!(values(m.selection()), [Some("gold"), Some("18k"), Some("white"), Some("7")]);
    assert_eq!(t.resolved_variant, Some(VariantId::new("V2")));
}

#[test]
fn test_autofill_does_not_override_user_choice() {
    let options = vec![
        opt("V1", "gold", "14k", "yellow"),
        opt("V2", "gold", "18k", "yellow"),
        opt("V3", "platinum", "950", "white"),
    ];
    let mut m = ConfigurationMatcher::from_options(options);

    m.apply(purity("18k"));
    assert_eq!(values(m.selection()), [Some("gold"), Some("18k"), Some("yellow"), None]);

    assert!(!m.is_autofilled(Facet::Purity));
    assert!(m.is_autofilled(Facet::Tone));

    // the chosen purity stays cleared; the autofilled tone is re-derived
    m.apply(metal("platinum"));
    assert_eq!(values(m.selection()), [Some("platinum"), None, Some("white"), None]);
    assert!(m.is_autofilled(Facet::Tone));
    assert!(!m.chosen().contains(&Facet::Purity));
}

#[test]
fn test_consistent_autofilled_value_is_kept() {
    let options = vec![
        opt("V1", "gold", "14k", "yellow"),
        opt("V2", "gold", "18k", "yellow"),
        opt("V3", "gold", "18k", "rose"),
    ];
    let mut m = ConfigurationMatcher::from_options(options);

    m.apply(metal("gold"));
    assert_eq!(m.selection().tone_id, Some(ToneId::new("yellow")));

    // yellow still works with 18k, so the lower-ranked rose is not swapped in
    let t = m.apply(purity("18k"));
    assert_eq!(values(m.selection()), [Some("gold"), Some("18k"), Some("yellow"), None]);
    assert_eq!(t.resolved_variant, Some(VariantId::new("V2")));
}

#[test]
fn test_choosing_the_autofilled_value_pins_it() {
    let options = vec![opt("V1", "gold", "14k", "yellow"), opt("V2", "gold", "18k", "white")];
    let mut m = ConfigurationMatcher::from_options(options);

    m.apply(metal("gold"));
    assert!(m.is_autofilled(Facet::Purity));

    let t = m.apply(purity("14k"));
    assert!(!t.changed);
    assert!(!m.is_autofilled(Facet::Purity));
}

#[test]
fn test_idempotent_reapply() {
    let options = vec![opt("V1", "gold", "14k", "yellow"), opt("V2", "gold", "18k", "white")];
    let mut m = ConfigurationMatcher::from_options(options);

    let first = m.apply(metal("gold"));
    let selection = m.selection().clone();
    let candidates = m.candidates();

    let second = m.apply(metal("gold"));
    assert!(first.changed);
    assert!(!second.changed);
    assert!(second.resolved_variant.is_none());
    assert!(second.fields_to_clear.is_empty());
    assert_eq!(*m.selection(), selection);
    assert_eq!(m.candidates(), candidates);
}

#[test]
fn test_order_independence() {
    let options = vec![
        opt("V1", "gold", "14k", "yellow"),
        opt("V2", "gold", "18k", "white"),
        opt("V3", "platinum", "950", "white"),
        opt("V4", "gold", "14k", "rose"),
    ];

    let mut forward = ConfigurationMatcher::from_options(options.clone());
    forward.apply(metal("gold"));
    forward.apply(purity("14k"));
    forward.apply(tone("rose"));

    let mut backward = ConfigurationMatcher::from_options(options);
    backward.apply(tone("rose"));
    backward.apply(purity("14k"));
    backward.apply(metal("gold"));

    assert_eq!(forward.selection(), backward.selection());
    assert_eq!(
        forward.resolved_option().map(|o| o.variant_id.as_str()),
        Some("V4")
    );
}

#[test]
fn test_order_independence_when_autofill_disagrees() {
    // choosing tone first autofills from V1, which conflicts with the target V3
    let options = vec![
        opt("V1", "m1", "p1", "t1"),
        opt("V2", "m2", "p1", "t2"),
        opt("V3", "m2", "p2", "t1"),
    ];

    let mut a = ConfigurationMatcher::from_options(options.clone());
    a.apply(tone("t1"));
    a.apply(metal("m2"));
    a.apply(purity("p2"));

    let mut b = ConfigurationMatcher::from_options(options);
    b.apply(metal("m2"));
    b.apply(purity("p2"));
    b.apply(tone("t1"));

    assert_eq!(values(a.selection()), [Some("m2"), Some("p2"), Some("t1"), None]);
    assert_eq!(a.selection(), b.selection());
}

#[test]
fn test_clearing_a_facet_is_a_wildcard() {
    let options = vec![opt("V1", "gold", "14k", "yellow"), opt("V2", "gold", "18k", "white")];
    let mut m = ConfigurationMatcher::from_options(options);
    m.apply(init("V1"));

    let t = m.apply(Action::SetPurity(None));
    assert!(t.changed);
    assert!(t.fields_to_clear.is_empty());
    assert_eq!(values(m.selection()), [Some("gold"), None, Some("yellow"), None]);
    assert_eq!(m.candidates().purities, vec![PurityId::new("14k")]);
}

#[test]
fn test_init_runs_once() {
    let options = vec![opt("V1", "gold", "14k", "yellow"), opt("V2", "gold", "18k", "white")];
    let mut m = ConfigurationMatcher::from_options(options);
    assert_eq!(*m.state(), MatcherState::Uninitialized);

    let t = m.apply(init("V2"));
    assert!(t.changed);
    assert_eq!(t.resolved_variant, Some(VariantId::new("V2")));
    assert!(m.is_initialized());

    m.apply(Action::SetTone(None));
    let t = m.apply(init("V1"));
    assert!(!t.changed);
    assert_eq!(values(m.selection()), [Some("gold"), Some("18k"), None, None]);
}

#[test]
fn test_init_with_unknown_variant_stays_uninitialized() {
    let mut m = ConfigurationMatcher::from_options(vec![opt("V1", "gold", "14k", "yellow")]);
    let t = m.apply(init("missing"));
    assert!(!t.changed);
    assert!(!m.is_initialized());

    let t = m.apply(Action::Init {
        default_variant: None,
    });
    assert!(!t.changed);

    let t = m.apply(init("V1"));
    assert!(t.changed);
}

#[test]
fn test_user_edit_before_init_blocks_seeding() {
    let options = vec![opt("V1", "gold", "14k", "yellow"), opt("V2", "silver", "925", "white")];
    let mut m = ConfigurationMatcher::from_options(options);

    m.apply(metal("silver"));
    let t = m.apply(init("V1"));
    assert!(!t.changed);
    assert_eq!(m.selection().metal_id, Some(MetalId::new("silver")));
}

#[test]
fn test_init_seeds_size_only_when_active() {
    let mut sized = ConfigurationMatcher::from_options(vec![opt("V1", "1", "10", "100").with_size("2cm")]);
    let t = sized.apply(init("V1"));
    assert_eq!(t.snapshot.size.as_deref(), Some("2cm"));
    assert!(t.snapshot.has_size);
    assert_eq!(t.resolved_variant, Some(VariantId::new("V1")));

    let mut plain = ConfigurationMatcher::from_options(vec![opt("V1", "1", "10", "100")]);
    let t = plain.apply(init("V1"));
    assert_eq!(t.snapshot.size, None);
    assert!(!t.snapshot.has_size);
}

#[test]
fn test_size_gating_ignores_size_actions() {
    let mut m = ConfigurationMatcher::from_options(vec![opt("V1", "1", "10", "100")]);
    assert!(!m.has_size());

    let t = m.apply(size("2cm"));
    assert!(!t.changed);
    assert_eq!(t.snapshot.size, None);
    assert!(m.candidates().sizes.is_none());
    assert_eq!(m.selection().size, None);
}

#[test]
fn test_incomplete_selection_does_not_resolve() {
    let options = vec![
        opt("V1", "gold", "14k", "yellow").with_size("6"),
        opt("V2", "gold", "14k", "yellow").with_size("7"),
    ];
    let mut m = ConfigurationMatcher::from_options(options);
    let t = m.apply(metal("gold"));
    assert!(t.resolved_variant.is_none());
    assert!(m.resolved_option().is_none());

    let t = m.apply(size("7"));
    assert_eq!(t.resolved_variant, Some(VariantId::new("V2")));
    assert_eq!(m.resolved_option().unwrap().variant_id, "V2");
}

#[test]
fn test_unknown_value_yields_empty_candidates() {
    let mut m = ConfigurationMatcher::from_options(vec![opt("V1", "gold", "14k", "yellow")]);
    let t = m.apply(metal("unobtainium"));
    assert!(t.changed);
    assert!(t.resolved_variant.is_none());

    let c = m.candidates();
    assert_eq!(c.metals, vec![MetalId::new("gold")]);
    assert!(c.purities.is_empty());
    assert!(c.tones.is_empty());
}

#[test]
fn test_empty_catalogue_never_panics() {
    let mut m = ConfigurationMatcher::from_options(Vec::<ConfigurationOption>::new());
    let t = m.apply(metal("gold"));
    assert!(t.resolved_variant.is_none());
    assert_eq!(m.candidates().metals, Vec::<MetalId>::new());
}

#[test]
fn test_matcher_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigurationMatcher>();
}

#[test]
fn test_new_uses_config() {
    let mut config = Config::default_for("shop");
    config.autofill = AutofillPolicy::Disabled;
    let mut m = ConfigurationMatcher::new(vec![opt("V1", "gold", "14k", "yellow")], &config);
    m.apply(metal("gold"));
    assert_eq!(m.selection().purity_id, None);
}

#[test]
fn test_from_facet_value() {
    let action: Action = FacetValue::parse("size=7").unwrap().into();
    assert_eq!(action, Action::SetSize(Some("7".to_string())));
}
