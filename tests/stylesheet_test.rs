//! Stylesheet building tests.
//!
//! End-to-end checks through the public API: typed values into rule
//! builders, rules into selectors, selectors into a serialized document.

use proptest::prelude::*;

use ussgen::diagnostics::MemoryDiagnostics;
use ussgen::sheet::{PseudoClass, Selector, SheetConfig, StyleSheet};
use ussgen::style::{
    Angle, Asset, Color, CursorIcon, DisplayStyle, Length, OriginAlign, Position, RuleBuilder,
    RuleKind, StyleRule, channel_from_unit,
};

// ============================================================================
// Rule Scenarios
// ============================================================================

#[test]
fn test_margin_two_lengths() {
    let sink = MemoryDiagnostics::new();
    let rules = RuleBuilder::new(&sink);

    let rule = rules.margin((Length::px(4.0), Length::px(8.0)));

    assert_eq!(rule.to_text(), "margin: 4px 8px;");
    assert!(rule.is_valid());
    assert!(sink.is_empty());
}

#[test]
fn test_padding_auto_is_flagged_but_serialized() {
    let sink = MemoryDiagnostics::new();
    let rules = RuleBuilder::new(&sink);

    let rule = rules.padding(Length::auto());

    assert!(!rule.is_valid());
    assert_eq!(rule.to_text(), "padding: auto;");
    assert_eq!(sink.len(), 1);
    assert!(sink.messages()[0].contains("padding"));
}

#[test]
fn test_diagnostic_points_at_caller() {
    let sink = MemoryDiagnostics::new();
    let rules = RuleBuilder::new(&sink);

    let _ = rules.padding_left(Length::auto());

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].location.file().ends_with("stylesheet_test.rs"));
}

#[test]
fn test_transform_origin_keywords() {
    let sink = MemoryDiagnostics::new();
    let rules = RuleBuilder::new(&sink);

    let ok = rules.transform_origin_keywords(OriginAlign::Left, OriginAlign::Top);
    assert!(ok.is_valid());
    assert_eq!(ok.to_text(), "transform-origin: left top;");

    let clash = rules.transform_origin_keywords(OriginAlign::Left, OriginAlign::Right);
    assert!(!clash.is_valid());
    assert_eq!(clash.to_text(), "transform-origin: left right;");
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_single_axis_transforms() {
    let rules = RuleBuilder::default();
    assert_eq!(rules.scale_x(2.0).to_text(), "scale: 2 1;");
    assert_eq!(rules.scale_y(0.5).to_text(), "scale: 1 0.5;");
    assert_eq!(rules.translate_x(Length::px(10.0)).to_text(), "translate: 10px 0px;");
    assert_eq!(rules.translate_y(Length::percent(50.0)).to_text(), "translate: 0px 50%;");
}

#[test]
fn test_mixed_value_rules() {
    let rules = RuleBuilder::default();
    assert_eq!(rules.rotate(Angle::deg(45.0)).to_text(), "rotate: 45deg;");
    assert_eq!(rules.rotate(Angle::none()).to_text(), "rotate: none;");
    assert_eq!(rules.position(Position::Absolute).to_text(), "position: absolute;");
    assert_eq!(rules.display(DisplayStyle::None).to_text(), "display: none;");
    assert_eq!(
        rules.background_image(&Asset::url("Assets/UI/bg.png")).to_text(),
        "background-image: url(\"Assets/UI/bg.png\");"
    );
    assert_eq!(
        rules.cursor_image(&Asset::resource("Cursors/hand"), 4, 2).to_text(),
        "cursor: resource(\"Cursors/hand\") 4 2;"
    );
    assert_eq!(
        rules.color(&Color::from_unit_rgb(1.0, 0.0, 2.0)).to_text(),
        "color: rgb(255, 0, 255);"
    );
}

#[test]
fn test_custom_property() {
    let sink = MemoryDiagnostics::new();
    let rules = RuleBuilder::new(&sink);

    let rule = rules.variable("accent", &Color::hex("FF8800"));
    assert_eq!(rule.kind(), RuleKind::Variable);
    assert_eq!(rule.to_text(), "--accent: #ff8800;");
    assert!(sink.is_empty());

    let unnamed = rules.variable("", &Color::named("red"));
    assert!(!unnamed.is_valid());
    assert_eq!(sink.len(), 1);
}

// ============================================================================
// Document Scenarios
// ============================================================================

fn card_sheet(rules: &RuleBuilder<'_>) -> StyleSheet {
    let mut button = Selector::new(".card Button")
        .with_rule(rules.cursor(CursorIcon::Link))
        .with_rule(rules.opacity(0.9));
    button
        .state(PseudoClass::Hover)
        .add_rule(rules.opacity(1.0));

    let mut sheet = StyleSheet::new("Card");
    sheet.add(
        Selector::new(".card")
            .with_rule(rules.margin((Length::px(4.0), Length::px(8.0))))
            .with_rule(rules.border_radius(Length::px(6.0))),
    );
    sheet.add(button);
    sheet
}

#[test]
fn test_document_serialization() {
    let rules = RuleBuilder::default();
    let sheet = card_sheet(&rules);

    let expected = "\
.card {
    margin: 4px 8px;
    border-radius: 6px;
}

.card Button {
    cursor: link;
    opacity: 0.9;
}
.card Button:hover {
    opacity: 1;
}";
    assert_eq!(sheet.to_text(), expected);
}

#[test]
fn test_document_config_changes_layout() {
    let rules = RuleBuilder::default();
    let sheet = card_sheet(&rules).with_config(SheetConfig::new().with_indent(0).with_blank_lines(false));
    let lines = sheet.serialize();
    assert_eq!(lines[1], "margin: 4px 8px;");
    assert!(lines.iter().all(|l| !l.is_empty()));
}

#[test]
fn test_duplicate_add_is_rejected() {
    let rules = RuleBuilder::default();
    let mut sheet = card_sheet(&rules);
    let first = sheet.selectors()[0].clone();

    assert!(!sheet.add(first));
    assert_eq!(sheet.len(), 2);
}

#[test]
fn test_serialize_twice_is_identical() {
    let rules = RuleBuilder::default();
    let sheet = card_sheet(&rules);
    assert_eq!(sheet.serialize(), sheet.serialize());
}

#[test]
fn test_removed_selector_is_not_serialized() {
    let rules = RuleBuilder::default();
    let mut sheet = card_sheet(&rules);
    let id = sheet.selectors()[1].id();

    let removed = sheet.remove(id).unwrap();
    assert_eq!(removed.text(), ".card Button");
    assert!(!sheet.to_text().contains("Button"));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_rule_text_matches_parts(value in "[a-z0-9 #%.()-]{0,24}", valid in any::<bool>()) {
        for kind in RuleKind::ALL {
            let rule = StyleRule::with_validity(*kind, value.clone(), valid);
            prop_assert_eq!(rule.to_text(), format!("{}: {};", kind.name(), value));
        }
    }

    #[test]
    fn prop_auto_splits_margin_and_padding(auto_at in 0usize..4, px in -500.0f32..500.0) {
        let sink = MemoryDiagnostics::new();
        let rules = RuleBuilder::new(&sink);
        let mut sides = [Length::px(px); 4];
        sides[auto_at] = Length::auto();
        let edges = (sides[0], sides[1], sides[2], sides[3]);

        prop_assert!(rules.margin(edges).is_valid());
        prop_assert!(!rules.padding(edges).is_valid());
        prop_assert_eq!(sink.len(), 1);
    }

    #[test]
    fn prop_channel_is_clamped(c in proptest::num::f32::ANY) {
        let byte = channel_from_unit(c);
        if c <= 0.0 {
            prop_assert_eq!(byte, 0);
        }
        if c >= 1.0 {
            prop_assert_eq!(byte, 255);
        }
    }
}
