#![allow(clippy::doc_markdown)]

use pomade::{ANSI_COLOR_NAMES, Attrs, AttrsOverride, Color, StyleSheet, parse_style_str};
use proptest::prelude::*;

fn arb_color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::default()),
        Just(Color::parse("default").unwrap()),
        "[0-9a-f]{6}".prop_map(|hex| Color::parse(&format!("#{hex}")).unwrap()),
        "[0-9a-f]{3}".prop_map(|hex| Color::parse(&format!("#{hex}")).unwrap()),
        prop::sample::select(ANSI_COLOR_NAMES.to_vec())
            .prop_map(|name| Color::parse(&format!("#{name}")).unwrap()),
    ]
}

fn arb_attrs() -> impl Strategy<Value = Attrs> {
    (
        arb_color(),
        arb_color(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(color, bgcolor, bold, underline, italic, blink, reverse)| Attrs {
                color,
                bgcolor,
                bold,
                underline,
                italic,
                blink,
                reverse,
            },
        )
}

fn arb_override() -> impl Strategy<Value = AttrsOverride> {
    (
        prop::option::of(arb_color()),
        prop::option::of(arb_color()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            |(color, bgcolor, bold, underline, italic, blink, reverse)| AttrsOverride {
                color,
                bgcolor,
                bold,
                underline,
                italic,
                blink,
                reverse,
            },
        )
}

// =============================================================================
// Parser robustness
// =============================================================================

proptest! {
    #[test]
    fn parse_never_panics(s in "\\PC{0,120}") {
        // Should never panic for any printable input, valid or not
        let _ = parse_style_str(&s, true);
        let _ = parse_style_str(&s, false);
    }

    #[test]
    fn parse_is_deterministic(s in "\\PC{0,120}") {
        prop_assert_eq!(parse_style_str(&s, true), parse_style_str(&s, true));
    }

    #[test]
    fn flag_last_token_wins(
        flags in prop::collection::vec(prop::sample::select(vec!["bold", "nobold"]), 1..8),
    ) {
        let joined = flags.join(" ");
        let (attrs, _) = parse_style_str(&joined, true).unwrap();
        prop_assert_eq!(attrs.bold, Some(*flags.last().unwrap() == "bold"));
    }

    #[test]
    fn six_char_color_tokens_always_parse(hex in "[0-9a-fA-F]{6}") {
        let (attrs, _) = parse_style_str(&format!("#{hex}"), true).unwrap();
        let color = attrs.color.unwrap();
        prop_assert_eq!(color.as_str(), hex.as_str());
    }

    #[test]
    fn three_char_colors_expand_by_doubling(hex in "[0-9a-f]{3}") {
        let color = Color::parse(&format!("#{hex}")).unwrap();
        let expected: String = hex.chars().flat_map(|c| [c, c]).collect();
        prop_assert_eq!(color.as_str(), expected.as_str());
        prop_assert!(color.as_rgb().is_some());
    }

    #[test]
    fn display_always_reparses(color in arb_color()) {
        let spelled = color.to_string();
        prop_assert_eq!(Color::parse(&spelled).unwrap(), color);
    }
}

// =============================================================================
// Merge laws
// =============================================================================

proptest! {
    #[test]
    fn empty_override_is_identity(base in arb_attrs()) {
        let mut merged = base.clone();
        AttrsOverride::default().apply_to(&mut merged);
        prop_assert_eq!(merged, base);
    }

    #[test]
    fn reset_override_erases_any_base(base in arb_attrs()) {
        let mut merged = base;
        AttrsOverride::reset().apply_to(&mut merged);
        prop_assert_eq!(merged, Attrs::default());
    }

    #[test]
    fn set_fields_win_and_unset_fields_survive(
        base in arb_attrs(),
        layer in arb_override(),
    ) {
        let mut merged = base.clone();
        layer.apply_to(&mut merged);
        prop_assert_eq!(merged.color, layer.color.unwrap_or_else(|| base.color.clone()));
        prop_assert_eq!(merged.bgcolor, layer.bgcolor.unwrap_or_else(|| base.bgcolor.clone()));
        prop_assert_eq!(merged.bold, layer.bold.unwrap_or(base.bold));
        prop_assert_eq!(merged.underline, layer.underline.unwrap_or(base.underline));
        prop_assert_eq!(merged.italic, layer.italic.unwrap_or(base.italic));
        prop_assert_eq!(merged.blink, layer.blink.unwrap_or(base.blink));
        prop_assert_eq!(merged.reverse, layer.reverse.unwrap_or(base.reverse));
    }

    #[test]
    fn layering_one_by_one_matches_shadowed_combination(
        base in arb_attrs(),
        first in arb_override(),
        second in arb_override(),
    ) {
        let mut one_by_one = base.clone();
        first.apply_to(&mut one_by_one);
        second.apply_to(&mut one_by_one);

        let combined = AttrsOverride {
            color: second.color.clone().or_else(|| first.color.clone()),
            bgcolor: second.bgcolor.clone().or_else(|| first.bgcolor.clone()),
            bold: second.bold.or(first.bold),
            underline: second.underline.or(first.underline),
            italic: second.italic.or(first.italic),
            blink: second.blink.or(first.blink),
            reverse: second.reverse.or(first.reverse),
        };
        let mut at_once = base;
        combined.apply_to(&mut at_once);
        prop_assert_eq!(one_by_one, at_once);
    }
}

// =============================================================================
// Cascade resolution
// =============================================================================

proptest! {
    #[test]
    fn matching_agrees_with_a_direct_subset_oracle(
        rules in prop::collection::vec(
            (
                prop::sample::subsequence(vec!["alpha", "beta", "delta", "gamma"], 0..=4),
                prop::sample::select(vec![
                    "bold",
                    "#ff0000",
                    "underline #00ff00",
                    "bg:#0000ff",
                    "noblink",
                    "reverse nobold",
                ]),
            ),
            0..8,
        ),
        query in prop::sample::subsequence(vec!["alpha", "beta", "delta", "gamma"], 0..=4),
    ) {
        let pairs: Vec<(String, &str)> = rules
            .iter()
            .map(|(key, style)| (key.join(" "), *style))
            .collect();
        let sheet = StyleSheet::new(pairs).unwrap();

        let query_str = if query.is_empty() {
            String::new()
        } else {
            format!("class:{}", query.join(","))
        };
        let resolved = sheet.resolve(&query_str, &Attrs::default()).unwrap();

        // Oracle: a rule applies exactly when all its classes were queried.
        let mut expected = Attrs::default();
        for (key, style) in &rules {
            if key.iter().all(|class| query.contains(class)) {
                let (layer, _) = parse_style_str(style, false).unwrap();
                layer.apply_to(&mut expected);
            }
        }
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn inline_string_has_the_final_say(
        rule_style in prop::sample::select(vec!["bold", "nobold"]),
        inline_bold in any::<bool>(),
    ) {
        let sheet = StyleSheet::new([("x", rule_style)]).unwrap();
        let inline = if inline_bold { "class:x bold" } else { "class:x nobold" };
        let attrs = sheet.resolve(inline, &Attrs::default()).unwrap();
        prop_assert_eq!(attrs.bold, inline_bold);
    }

    #[test]
    fn query_class_order_is_irrelevant(
        classes in prop::sample::subsequence(vec!["a", "b", "c", "d"], 1..=4),
        default in arb_attrs(),
    ) {
        let sheet = StyleSheet::new([
            ("a", "bold"),
            ("b c", "#ff0000"),
            ("a d", "underline bg:#00ff00"),
        ]).unwrap();

        let forward = format!("class:{}", classes.join(","));
        let reversed = format!(
            "class:{}",
            classes.iter().rev().copied().collect::<Vec<_>>().join(",")
        );
        prop_assert_eq!(
            sheet.resolve(&forward, &default).unwrap(),
            sheet.resolve(&reversed, &default).unwrap()
        );
    }

    #[test]
    fn resolution_is_pure(
        classes in prop::sample::subsequence(vec!["a", "b", "c"], 0..=3),
        default in arb_attrs(),
    ) {
        let sheet = StyleSheet::new([("a", "bold"), ("b", "#ff0000"), ("a c", "reverse")])
            .unwrap();
        let query = if classes.is_empty() {
            String::new()
        } else {
            format!("class:{}", classes.join(","))
        };
        let first = sheet.resolve(&query, &default).unwrap();
        let second = sheet.resolve(&query, &default).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(sheet.id(), sheet.id());
    }
}
