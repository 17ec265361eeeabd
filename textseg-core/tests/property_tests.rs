//! Property tests for lookups, resolution and the pairing walk

use proptest::prelude::*;
use textseg_core::{
    class_of, width_of, BreakOpportunity, BreakPairMatrix, Config, CoreError, EastAsianWidth,
    LineBreakClass, PairAction, Resolver, RuleVariant, RunContext,
};

fn configs() -> impl Strategy<Value = Config> {
    (any::<bool>(), any::<bool>(), 0..3u8).prop_map(|(wide, legacy, variant)| {
        let variant = match variant {
            0 => RuleVariant::Loose,
            1 => RuleVariant::Normal,
            _ => RuleVariant::Strict,
        };
        Config::builder()
            .ambiguous_as_wide(wide)
            .legacy_narrow_signs(legacy)
            .rule_variant(variant)
            .build()
            .unwrap()
    })
}

proptest! {
    #[test]
    fn prop_lookups_are_total_on_scalars(c in any::<char>()) {
        let cp = u32::from(c);
        prop_assert_eq!(class_of(cp).unwrap(), LineBreakClass::of(c));
        prop_assert_eq!(width_of(cp).unwrap(), EastAsianWidth::of(c));
        prop_assert_eq!(class_of(cp).unwrap(), class_of(cp).unwrap());
    }

    #[test]
    fn prop_non_scalars_are_rejected(cp in prop_oneof![0xD800u32..=0xDFFF, 0x11_0000u32..=u32::MAX]) {
        let is_invalid = matches!(
            class_of(cp),
            Err(CoreError::InvalidCodePoint { value, offset: 0 }) if value == cp
        );
        prop_assert!(is_invalid);
        prop_assert!(width_of(cp).is_err());
    }

    #[test]
    fn prop_resolution_settles_ambiguity(c in any::<char>(), config in configs()) {
        let resolved = Resolver::new(&config).resolve_char(c);
        prop_assert_ne!(resolved.width, EastAsianWidth::Ambiguous);
        prop_assert!(!matches!(
            resolved.class,
            LineBreakClass::AI | LineBreakClass::CJ | LineBreakClass::SG | LineBreakClass::XX
        ));
    }

    #[test]
    fn prop_walk_never_reports_indirect(text in "\\PC{1,60}", config in configs()) {
        let resolver = Resolver::new(&config);
        let mut ctx = RunContext::new(&config);
        let ops: Vec<_> = text.chars().map(|c| ctx.step(&resolver.resolve_char(c))).collect();
        prop_assert_eq!(ops[0], BreakOpportunity::Prohibited);
        prop_assert!(ops.iter().all(|o| *o != BreakOpportunity::Indirect));
    }
}

#[test]
fn test_nothing_breaks_before_spaces_or_terminators() {
    let m = BreakPairMatrix::new();
    for left in LineBreakClass::ALL {
        for right in [
            LineBreakClass::SP,
            LineBreakClass::BK,
            LineBreakClass::CR,
            LineBreakClass::LF,
            LineBreakClass::NL,
            LineBreakClass::ZW,
        ] {
            assert_eq!(m.action(left, right), PairAction::Prohibited, "{left} {right}");
        }
    }
}

#[test]
fn test_terminators_force_a_break() {
    let m = BreakPairMatrix::new();
    for right in LineBreakClass::ALL {
        for left in [LineBreakClass::BK, LineBreakClass::LF, LineBreakClass::NL] {
            assert_eq!(m.base_rule(left, right), BreakOpportunity::Mandatory);
        }
    }
}

#[test]
fn test_width_columns() {
    let config = Config::east_asian();
    let resolver = Resolver::new(&config);
    let columns = |text: &str| -> usize {
        text.chars()
            .map(|c| resolver.resolve_char(c).width.columns(config.ambiguous_as_wide()))
            .sum()
    };
    assert_eq!(columns("abc"), 3);
    assert_eq!(columns("\u{65E5}\u{672C}"), 4);
    assert_eq!(columns("\u{0410}"), 2);
    assert_eq!(columns("a\u{0301}"), 1);
}
