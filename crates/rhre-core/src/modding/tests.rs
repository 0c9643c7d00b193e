//! Tests for metadata values and range rules.

use super::*;
use crate::entity::{Bounds, Entity};

fn wide(width: f32) -> Bounds {
    Bounds::with_width(width)
}

fn lookup(value: &RangeValue, width: f32) -> &str {
    value.value(Some(&wide(width)))
}

// ============================================================================
// Range Tests
// ============================================================================

mod range_tests {
    use super::*;

    #[test]
    fn test_point_matches_within_epsilon() {
        let range = ValueRange::point(5.0);
        assert!(range.is_point());
        assert!(range.matches(5.0));
        assert!(range.matches(5.00005));
        assert!(range.matches(4.99995));
        assert!(!range.matches(5.001));
        assert!(!range.matches(4.999));
    }

    #[test]
    fn test_span_is_inclusive() {
        let range = ValueRange::new(2.0, 4.0);
        assert!(!range.is_point());
        assert!(range.matches(2.0));
        assert!(range.matches(3.0));
        assert!(range.matches(4.0));
        assert!(!range.matches(4.0001));
        assert!(!range.matches(1.9999));
    }

    #[test]
    fn test_inverted_never_matches() {
        let range = ValueRange::new(5.0, 3.0);
        assert!(range.is_inverted());
        for measurement in [2.0, 3.0, 4.0, 5.0, 6.0] {
            assert!(!range.matches(measurement), "matched {}", measurement);
        }
    }

    #[test]
    fn test_can_match() {
        assert!(ValueRange::point(1.0).can_match());
        assert!(ValueRange::new(1.0, 2.0).can_match());
        assert!(!ValueRange::new(2.0, 1.0).can_match());
        assert!(!ValueRange::new(f32::NAN, 10.0).can_match());
        assert!(!ValueRange::point(f32::NAN).can_match());
        assert!(ValueRange::new(0.0, f32::NAN).has_nan());
        assert!(!ValueRange::new(0.0, f32::NAN).is_inverted());
    }

    #[test]
    fn test_nan_never_matches() {
        assert!(!ValueRange::new(0.0, 10.0).matches(f32::NAN));
        assert!(!ValueRange::point(1.0).matches(f32::NAN));
    }

    #[test]
    fn test_parse_span() {
        assert_eq!("1..2".parse::<ValueRange>(), Ok(ValueRange::new(1.0, 2.0)));
        assert_eq!(
            "  0.25 ..  1.75  ".parse::<ValueRange>(),
            Ok(ValueRange::new(0.25, 1.75))
        );
        assert_eq!("3..1".parse::<ValueRange>(), Ok(ValueRange::new(3.0, 1.0)));
    }

    #[test]
    fn test_parse_point() {
        assert_eq!("4".parse::<ValueRange>(), Ok(ValueRange::point(4.0)));
        assert_eq!(" 0.5 ".parse::<ValueRange>(), Ok(ValueRange::point(0.5)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in [
            "", "..", "1..", "..2", "1...2", "1 . . 2", "1-2", "-1..2", "1.", ".5", "1..2..3",
            "abc", "1e3", "+1",
        ] {
            let err = text.parse::<ValueRange>().unwrap_err();
            assert!(
                err.message.contains("expected a decimal number"),
                "unexpected message for {:?}: {}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_parse_error_display() {
        let err = "x..2".parse::<ValueRange>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Range parse error: Invalid bound 'x' in range 'x..2': expected a decimal number"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueRange::point(2.0).to_string(), "2");
        assert_eq!(ValueRange::new(1.5, 3.0).to_string(), "1.5..3");
        let reparsed: ValueRange = ValueRange::new(0.5, 8.0).to_string().parse().unwrap();
        assert_eq!(reparsed, ValueRange::new(0.5, 8.0));
    }
}

// ============================================================================
// Metadata Value Tests
// ============================================================================

mod value_tests {
    use super::*;

    #[test]
    fn test_empty_rules_resolve_to_else_value() {
        let value = RangeValue::width().with_else_value("fallback");
        assert!(value.is_empty());
        for width in [0.0, 1.0, 123.5] {
            assert_eq!(lookup(&value, width), "fallback");
        }
    }

    #[test]
    fn test_else_value_defaults_to_empty() {
        let value = RangeValue::width();
        assert_eq!(value.else_value(), "");
        assert_eq!(lookup(&value, 1.0), "");
    }

    #[test]
    fn test_absent_entity_skips_rules() {
        let value = RangeValue::width()
            .with_rule(ValueRange::new(0.0, f32::MAX), "anything")
            .with_else_value("none");
        assert_eq!(value.value(None), "none");
        assert_eq!(MetadataValue::from(value).value(None), "none");
    }

    #[test]
    fn test_point_rule() {
        let value = RangeValue::width()
            .with_rule(ValueRange::point(5.0), "A")
            .with_else_value("else");
        assert_eq!(lookup(&value, 5.00005), "A");
        assert_eq!(lookup(&value, 5.001), "else");
    }

    #[test]
    fn test_span_rule() {
        let value = RangeValue::width()
            .with_rule(ValueRange::new(2.0, 4.0), "B")
            .with_else_value("else");
        assert_eq!(lookup(&value, 3.0), "B");
        assert_eq!(lookup(&value, 4.0), "B");
        assert_eq!(lookup(&value, 4.0001), "else");
    }

    #[test]
    fn test_first_match_wins() {
        let value = RangeValue::width()
            .with_rule(ValueRange::new(1.0, 5.0), "X")
            .with_rule(ValueRange::new(2.0, 3.0), "Y");
        assert_eq!(lookup(&value, 2.5), "X");
    }

    #[test]
    fn test_later_rule_reached_when_earlier_misses() {
        let value = RangeValue::width()
            .with_rule(ValueRange::point(1.0), "one")
            .with_rule(ValueRange::new(0.0, 10.0), "some");
        assert_eq!(lookup(&value, 1.0), "one");
        assert_eq!(lookup(&value, 1.5), "some");
    }

    #[test]
    fn test_inverted_rule_unreachable() {
        let value = RangeValue::width()
            .with_rule(ValueRange::new(5.0, 3.0), "Z")
            .with_else_value("else");
        assert_eq!(value.len(), 1);
        for width in [2.0, 3.0, 4.0, 5.0, 6.0] {
            assert_eq!(lookup(&value, width), "else");
        }
    }

    #[test]
    fn test_insert_same_range_replaces_in_place() {
        let mut value = RangeValue::width();
        assert_eq!(value.insert(ValueRange::new(0.0, 2.0), "first"), None);
        assert_eq!(value.insert(ValueRange::new(1.0, 3.0), "second"), None);
        assert_eq!(
            value.insert(ValueRange::new(0.0, 2.0), "replaced"),
            Some("first".to_string())
        );

        let labels: Vec<&str> = value.rules().map(|rule| rule.label.as_str()).collect();
        assert_eq!(labels, vec!["replaced", "second"]);
        assert_eq!(lookup(&value, 1.5), "replaced");
    }

    #[test]
    fn test_insert_checked_rejects_inverted() {
        let mut value = RangeValue::width();
        let err = value
            .insert_checked(ValueRange::new(5.0, 3.0), "Z")
            .unwrap_err();
        assert!(matches!(err, crate::RhreError::InvalidRange(_)));
        assert_eq!(err.to_string(), "Invalid range: 5..3 starts after it ends");
        assert!(value.is_empty());

        assert_eq!(value.insert_checked(ValueRange::point(3.0), "ok").unwrap(), None);
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn test_insert_checked_rejects_nan() {
        let mut value = RangeValue::width().with_else_value("fallback");
        for range in [
            ValueRange::new(f32::NAN, 10.0),
            ValueRange::new(0.0, f32::NAN),
            ValueRange::point(f32::NAN),
        ] {
            let err = value.insert_checked(range, "never").unwrap_err();
            assert!(matches!(err, crate::RhreError::InvalidRange(_)));
            assert!(err.to_string().contains("NaN bound"), "{}", err);
        }
        assert!(value.is_empty());
        assert_eq!(lookup(&value, 5.0), "fallback");
    }

    #[test]
    fn test_set_else_value() {
        let mut value = RangeValue::width();
        value.set_else_value("later");
        assert_eq!(lookup(&value, 9.0), "later");
    }

    #[test]
    fn test_static_ignores_entity() {
        let value = MetadataValue::fixed("always");
        assert!(!value.needs_entity());
        assert_eq!(value.value(None), "always");
        assert_eq!(value.value(Some(&wide(4.0))), "always");
    }

    #[test]
    fn test_range_needs_entity() {
        assert!(MetadataValue::Range(RangeValue::width()).needs_entity());
    }

    #[test]
    fn test_named_fields() {
        let entity = Bounds::new(8.0, 2.0, 1.0, 3.0);
        let pick = |field: EntityField| {
            RangeValue::of_field(field)
                .with_rule(ValueRange::point(1.0), "w")
                .with_rule(ValueRange::point(2.0), "y")
                .with_rule(ValueRange::point(3.0), "h")
                .with_rule(ValueRange::point(8.0), "x")
                .value(Some(&entity))
                .to_string()
        };

        assert_eq!(pick(EntityField::Width), "w");
        assert_eq!(pick(EntityField::Height), "h");
        assert_eq!(pick(EntityField::X), "x");
        assert_eq!(pick(EntityField::Y), "y");
        assert_eq!(RangeValue::height().value(Some(&entity)), "");
    }

    #[test]
    fn test_custom_accessor() {
        struct Pattern {
            bounds: Bounds,
            repeats: u32,
        }

        impl Entity for Pattern {
            fn bounds(&self) -> &Bounds {
                &self.bounds
            }
        }

        fn total_length(entity: &dyn Entity) -> f32 {
            entity.bounds().width * 2.0
        }

        let pattern = Pattern {
            bounds: Bounds::with_width(2.0),
            repeats: 2,
        };
        assert_eq!(pattern.repeats, 2);

        let value = RangeValue::new(total_length).with_rule(ValueRange::point(4.0), "doubled");
        assert_eq!(value.value(Some(&pattern)), "doubled");
    }

    #[test]
    fn test_entity_field_parse_and_display() {
        for field in [
            EntityField::X,
            EntityField::Y,
            EntityField::Width,
            EntityField::Height,
        ] {
            assert_eq!(field.name().parse::<EntityField>(), Ok(field));
            assert_eq!(field.to_string(), field.name());
        }
        assert_eq!(EntityField::default(), EntityField::Width);
    }

    #[test]
    fn test_entity_field_parse_error() {
        let err = "depth".parse::<EntityField>().unwrap_err();
        assert_eq!(
            err,
            FieldParseError {
                message: "Unknown entity field 'depth': expected x, y, width or height"
                    .to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Field parse error: Unknown entity field 'depth': expected x, y, width or height"
        );
    }
}

// ============================================================================
// Metadata Set Tests
// ============================================================================

mod set_tests {
    use super::*;

    fn sample_set() -> MetadataSet {
        let mut set = MetadataSet::new();
        set.insert("game", MetadataValue::fixed("Lockstep"));
        set.insert(
            "length",
            RangeValue::width()
                .with_rule(ValueRange::point(1.0), "short")
                .with_rule(ValueRange::new(1.5, 4.0), "long")
                .with_else_value("custom")
                .into(),
        );
        set
    }

    #[test]
    fn test_lookup_by_name() {
        let set = sample_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("game"));
        assert!(!set.contains("tempo"));
        assert_eq!(set.value("length", Some(&wide(2.0))), Some("long"));
        assert_eq!(set.value("length", None), Some("custom"));
        assert_eq!(set.value("tempo", None), None);
    }

    #[test]
    fn test_resolve_all_in_order() {
        let set = sample_set();
        assert_eq!(
            set.resolve_all(Some(&wide(1.0))),
            vec![("game", "Lockstep"), ("length", "short")]
        );
        assert_eq!(
            set.names().collect::<Vec<_>>(),
            vec!["game", "length"]
        );
        assert!(set.needs_entity());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = sample_set();
        let previous = set.insert("game", MetadataValue::fixed("Karate Man"));
        assert!(matches!(previous, Some(MetadataValue::Static(ref v)) if v == "Lockstep"));
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["game", "length"]);
        assert_eq!(set.value("game", None), Some("Karate Man"));
    }

    #[test]
    fn test_static_only_set_needs_no_entity() {
        let mut set = MetadataSet::new();
        assert!(set.is_empty());
        set.insert("game", MetadataValue::fixed("Lockstep"));
        assert!(!set.needs_entity());
    }
}
