//! Tests for the ChoiceEnum derive macro
//!
//! These drive the expansion directly on parsed inputs. Behaviour of the
//! generated code is covered by the main crate's integration tests.

use syn::{parse_quote, DeriveInput};

use crate::choice_enum_impl::{
    expand_choice_enum, parse_choice_enum, GeneratedValue, SerdeRepr, ValuePolicy,
};

fn error_message(input: &DeriveInput) -> String {
    parse_choice_enum(input)
        .expect_err("expansion should fail")
        .to_string()
}

#[test]
fn test_names_are_values_by_default() {
    let input: DeriveInput = parse_quote! {
        enum Letter {
            FOO,
            BAR,
        }
    };

    let def = parse_choice_enum(&input).unwrap();
    assert_eq!(def.policy, ValuePolicy::Name);
    assert_eq!(def.serde, SerdeRepr::Name);

    let names: Vec<_> = def.constants.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["FOO", "BAR"]);

    let values: Vec<_> = def.constants.iter().map(|c| c.value.clone()).collect();
    assert_eq!(
        values,
        [
            GeneratedValue::Text("FOO".to_string()),
            GeneratedValue::Text("BAR".to_string()),
        ]
    );

    let positions: Vec<_> = def.constants.iter().map(|c| c.position).collect();
    assert_eq!(positions, [1, 2]);
}

#[test]
fn test_ordinals_follow_declaration_order() {
    let input: DeriveInput = parse_quote! {
        #[choice(values = "ordinal")]
        enum Priority {
            ZED,
            ALPHA,
            MIDDLE,
        }
    };

    let def = parse_choice_enum(&input).unwrap();
    let pairs: Vec<_> = def
        .constants
        .iter()
        .map(|c| (c.name.as_str(), c.value.clone()))
        .collect();

    assert_eq!(
        pairs,
        [
            ("ZED", GeneratedValue::Integer(1)),
            ("ALPHA", GeneratedValue::Integer(2)),
            ("MIDDLE", GeneratedValue::Integer(3)),
        ]
    );
}

#[test]
fn test_ordinal_start_and_overrides() {
    let input: DeriveInput = parse_quote! {
        #[choice(values = "ordinal", start = 0)]
        enum Level {
            Off,
            Low,
            #[choice(value = 10)]
            High,
            Broken = -1,
        }
    };

    let def = parse_choice_enum(&input).unwrap();
    let values: Vec<_> = def.constants.iter().map(|c| c.value.clone()).collect();

    assert_eq!(
        values,
        [
            GeneratedValue::Integer(0),
            GeneratedValue::Integer(1),
            GeneratedValue::Integer(10),
            GeneratedValue::Integer(-1),
        ]
    );
}

#[test]
fn test_rename_all_and_name_override() {
    let input: DeriveInput = parse_quote! {
        #[choice(rename_all = "SCREAMING_SNAKE_CASE")]
        enum Status {
            InReview,
            #[choice(name = "DONE")]
            Finished,
            #[choice(value = "legacy-archived")]
            Archived,
        }
    };

    let def = parse_choice_enum(&input).unwrap();
    let pairs: Vec<_> = def
        .constants
        .iter()
        .map(|c| (c.name.as_str(), c.value.clone()))
        .collect();

    assert_eq!(
        pairs,
        [
            ("IN_REVIEW", GeneratedValue::Text("IN_REVIEW".to_string())),
            ("DONE", GeneratedValue::Text("DONE".to_string())),
            ("ARCHIVED", GeneratedValue::Text("legacy-archived".to_string())),
        ]
    );
}

#[test]
fn test_description_precedence() {
    let input: DeriveInput = parse_quote! {
        enum Letter {
            /// Ignored because an explicit description wins
            #[choice(description = "A foo")]
            FOO,
            /// A bar
            /// spanning two lines
            BAR,
            BAZ,
        }
    };

    let def = parse_choice_enum(&input).unwrap();
    let descriptions: Vec<_> = def
        .constants
        .iter()
        .map(|c| c.description.as_str())
        .collect();

    assert_eq!(descriptions, ["A foo", "A bar spanning two lines", "BAZ"]);
}

#[test]
fn test_duplicate_generated_values_are_rejected() {
    let input: DeriveInput = parse_quote! {
        #[choice(values = "ordinal")]
        enum Priority {
            LOW,
            #[choice(value = 1)]
            HIGH,
        }
    };

    let message = error_message(&input);
    assert!(message.contains("duplicate generated value 1"), "{message}");
    assert!(message.contains("`LOW`"), "{message}");
}

#[test]
fn test_duplicate_names_are_rejected() {
    let input: DeriveInput = parse_quote! {
        enum Letter {
            FOO,
            #[choice(name = "FOO", value = "OTHER")]
            Other,
        }
    };

    let message = error_message(&input);
    assert!(message.contains("duplicate declared name `FOO`"), "{message}");
}

#[test]
fn test_start_requires_ordinal_policy() {
    let input: DeriveInput = parse_quote! {
        #[choice(start = 5)]
        enum Letter {
            FOO,
        }
    };

    let message = error_message(&input);
    assert!(message.contains("`start` requires"), "{message}");
}

#[test]
fn test_override_kind_must_match_policy() {
    let text_in_ordinal: DeriveInput = parse_quote! {
        #[choice(values = "ordinal")]
        enum Priority {
            #[choice(value = "one")]
            LOW,
        }
    };
    assert!(error_message(&text_in_ordinal).contains("expected an integer value"));

    let integer_in_name: DeriveInput = parse_quote! {
        enum Letter {
            #[choice(value = 3)]
            FOO,
        }
    };
    assert!(error_message(&integer_in_name).contains("expected a string value"));
}

#[test]
fn test_errors_are_accumulated() {
    let input: DeriveInput = parse_quote! {
        #[choice(values = "ordinal")]
        enum Priority {
            #[choice(value = "one")]
            LOW,
            #[choice(value = "two")]
            HIGH,
        }
    };

    let err = parse_choice_enum(&input).unwrap_err();
    assert_eq!(err.len(), 2);
}

#[test]
fn test_non_unit_variants_are_rejected() {
    let input: DeriveInput = parse_quote! {
        enum Shape {
            Point,
            Circle(f64),
        }
    };

    assert!(parse_choice_enum(&input).is_err());
}

#[test]
fn test_structs_are_rejected() {
    let input: DeriveInput = parse_quote! {
        struct NotAnEnum {
            field: u8,
        }
    };

    assert!(parse_choice_enum(&input).is_err());
}

#[test]
fn test_generic_enums_are_rejected() {
    let input: DeriveInput = parse_quote! {
        enum Tagged<T> {
            FOO,
        }
    };

    assert!(error_message(&input).contains("generic enums"));
}

#[test]
fn test_unknown_rename_rule_is_rejected() {
    let input: DeriveInput = parse_quote! {
        #[choice(rename_all = "kebab")]
        enum Letter {
            FOO,
        }
    };

    assert!(error_message(&input).contains("kebab"));
}

#[test]
fn test_serde_none_skips_serde_impls() {
    let input: DeriveInput = parse_quote! {
        #[choice(serde = "none")]
        enum Letter {
            FOO,
        }
    };

    let expanded = expand_choice_enum(&input).unwrap().to_string();
    assert!(expanded.contains("ChoiceEnum for Letter"));
    assert!(!expanded.contains("Serialize"));
}

#[test]
fn test_ordinal_expansion_uses_integer_impls() {
    let input: DeriveInput = parse_quote! {
        #[choice(values = "ordinal", serde = "value")]
        enum Priority {
            LOW,
            HIGH,
        }
    };

    let expanded = expand_choice_enum(&input).unwrap().to_string();
    assert!(expanded.contains("TryFrom < i64 >"));
    assert!(expanded.contains("by_value"));
    assert!(!expanded.contains("AsRef < str >"));
}

#[test]
fn test_empty_declared_name_is_rejected() {
    let input: DeriveInput = parse_quote! {
        enum Letter {
            #[choice(name = "")]
            FOO,
        }
    };

    assert!(error_message(&input).contains("declared name cannot be empty"));
}

#[test]
fn test_override_outside_i64_is_rejected() {
    let input: DeriveInput = parse_quote! {
        #[choice(values = "ordinal")]
        enum Priority {
            #[choice(value = 9223372036854775808)]
            LOW,
        }
    };

    let message = error_message(&input);
    assert!(message.contains("9223372036854775808 does not fit in i64"), "{message}");
}

#[test]
fn test_non_literal_discriminant_is_rejected() {
    let input: DeriveInput = parse_quote! {
        #[choice(values = "ordinal")]
        enum Priority {
            LOW = SOME_CONST,
        }
    };

    assert!(error_message(&input).contains("expected an integer literal"));
}

#[test]
fn test_ordinal_overflow_is_rejected() {
    let input: DeriveInput = parse_quote! {
        #[choice(values = "ordinal", start = 9223372036854775807)]
        enum Priority {
            LOW,
            HIGH,
        }
    };

    let message = error_message(&input);
    assert!(message.contains("ordinal does not fit in i64"), "{message}");
}

#[test]
fn test_most_negative_override_is_accepted() {
    let input: DeriveInput = parse_quote! {
        #[choice(values = "ordinal")]
        enum Priority {
            #[choice(value = -9223372036854775808)]
            LOW,
        }
    };

    let def = parse_choice_enum(&input).unwrap();
    assert_eq!(def.constants[0].value, GeneratedValue::Integer(i64::MIN));
}
