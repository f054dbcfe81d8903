use chrono::Utc;
use fieldcraft_core::{CharacterClass, EnumType, FieldDescriptor, ValueKind};
use fieldcraft_generate::errors::GenerationError;
use fieldcraft_generate::generators::{
    create_valid, generate_matching, random_decimal, random_negative_decimal,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;

#[test]
fn letters_descriptor_yields_exact_length_letters() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let descriptor = FieldDescriptor::text(5, CharacterClass::Letters);
    for _ in 0..100 {
        let value = create_valid(&mut rng, &descriptor).expect("generate");
        assert_eq!(value.chars().count(), 5);
        assert!(value.chars().all(|c| c.is_ascii_alphabetic()), "{value}");
    }
}

#[test]
fn unassigned_class_and_length_fall_back_to_defaults() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let descriptor = FieldDescriptor::of_kind(ValueKind::String);
    for _ in 0..50 {
        let value = create_valid(&mut rng, &descriptor).expect("generate");
        assert_eq!(value.chars().count(), 10);
        assert_eq!(value.trim(), value);
    }
}

#[test]
fn enum_descriptor_yields_members_only() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let sizes = EnumType::from_members("Size", ["Small", "Medium", "Large"]);
    let descriptor = FieldDescriptor::enumeration(sizes.clone());
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..200 {
        let value = create_valid(&mut rng, &descriptor).expect("generate");
        assert!(sizes.contains(&value), "{value}");
        seen.insert(value);
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn empty_enum_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(14);
    let descriptor = FieldDescriptor::enumeration(EnumType::from_members("Empty", Vec::<String>::new()));
    let result = create_valid(&mut rng, &descriptor);
    assert!(matches!(result, Err(GenerationError::InvalidArgument(_))));
}

#[test]
fn allowed_values_never_yield_the_last_value() {
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    let descriptor = FieldDescriptor::allowed_values(["A", "B", "C"]);
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..300 {
        seen.insert(create_valid(&mut rng, &descriptor).expect("generate"));
    }
    let expected: std::collections::BTreeSet<String> =
        ["A", "B"].iter().map(|v| v.to_string()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn single_allowed_value_is_returned() {
    let mut rng = ChaCha8Rng::seed_from_u64(16);
    let descriptor = FieldDescriptor::allowed_values(["only"]);
    assert_eq!(create_valid(&mut rng, &descriptor).expect("generate"), "only");
}

#[test]
fn empty_allowed_values_are_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let descriptor = FieldDescriptor::allowed_values(Vec::<String>::new());
    let result = create_valid(&mut rng, &descriptor);
    assert!(matches!(result, Err(GenerationError::InvalidArgument(_))));
}

#[test]
fn enum_takes_priority_over_allowed_values_and_pattern() {
    let mut rng = ChaCha8Rng::seed_from_u64(30);
    let descriptor = FieldDescriptor {
        enum_type: Some(EnumType::from_members("Size", ["Small", "Large"])),
        regex: Some("^[0-9]{3}$".to_string()),
        ..FieldDescriptor::allowed_values(["red", "green", "blue"])
    };
    for _ in 0..50 {
        let value = create_valid(&mut rng, &descriptor).expect("generate");
        assert!(value == "Small" || value == "Large", "{value}");
    }
}

#[test]
fn allowed_values_take_priority_over_pattern() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let descriptor = FieldDescriptor {
        regex: Some("^[0-9]{3}$".to_string()),
        ..FieldDescriptor::allowed_values(["red", "green", "blue"])
    };
    for _ in 0..50 {
        let value = create_valid(&mut rng, &descriptor).expect("generate");
        assert!(value == "red" || value == "green", "{value}");
    }
}

#[test]
fn pattern_descriptor_yields_matching_values() {
    let mut rng = ChaCha8Rng::seed_from_u64(18);
    let descriptor = FieldDescriptor::pattern(8, "^[A-Z]{3}-[0-9]{4}$");
    let regex = Regex::new("^[A-Z]{3}-[0-9]{4}$").expect("compile");
    for _ in 0..100 {
        let value = create_valid(&mut rng, &descriptor).expect("generate");
        assert!(regex.is_match(&value), "{value}");
    }
}

#[test]
fn bounded_wildcard_pattern_respects_length() {
    let mut rng = ChaCha8Rng::seed_from_u64(19);
    for _ in 0..100 {
        let value = generate_matching(&mut rng, "^.{1,30}$").expect("generate");
        let length = value.chars().count();
        assert!((1..=30).contains(&length), "{value:?}");
        assert!(!value.contains('\n'));
    }
}

#[test]
fn unparsable_pattern_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(20);
    let result = generate_matching(&mut rng, "([a-z");
    assert!(matches!(result, Err(GenerationError::InvalidPattern { .. })));
}

#[test]
fn int_kind_yields_parseable_integers() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let descriptor = FieldDescriptor::of_kind(ValueKind::Int);
    for _ in 0..100 {
        let value = create_valid(&mut rng, &descriptor).expect("generate");
        value.parse::<i64>().expect("integer text");
    }
}

#[test]
fn decimal_kind_rounds_to_requested_points() {
    let mut rng = ChaCha8Rng::seed_from_u64(22);
    let descriptor = FieldDescriptor::decimal(2);
    for _ in 0..200 {
        let value = create_valid(&mut rng, &descriptor).expect("generate");
        let parsed: f64 = value.parse().expect("decimal text");
        assert!((0.0..=100.0).contains(&parsed), "{value}");
        let decimals = value.split_once('.').map(|(_, d)| d.len()).unwrap_or(0);
        assert!(decimals <= 2, "{value}");
        assert!(!value.contains(','));
    }
}

#[test]
fn decimal_kind_defaults_to_fifteen_points() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let descriptor = FieldDescriptor::of_kind(ValueKind::Decimal);
    let value = create_valid(&mut rng, &descriptor).expect("generate");
    let parsed: f64 = value.parse().expect("decimal text");
    assert!((0.0..=100.0).contains(&parsed));
}

#[test]
fn decimal_points_above_fifteen_are_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(24);
    let descriptor = FieldDescriptor::decimal(16);
    let result = create_valid(&mut rng, &descriptor);
    assert!(matches!(result, Err(GenerationError::InvalidArgument(_))));
}

#[test]
fn bool_kind_always_yields_true() {
    let mut rng = ChaCha8Rng::seed_from_u64(25);
    let descriptor = FieldDescriptor::of_kind(ValueKind::Bool);
    for _ in 0..100 {
        assert_eq!(create_valid(&mut rng, &descriptor).expect("generate"), "true");
    }
}

#[test]
fn date_kind_is_stable_within_the_day() {
    let mut rng = ChaCha8Rng::seed_from_u64(26);
    let descriptor = FieldDescriptor::of_kind(ValueKind::Date);
    let before = Utc::now().format("%A, %d %B %Y").to_string();
    let first = create_valid(&mut rng, &descriptor).expect("generate");
    let second = create_valid(&mut rng, &descriptor).expect("generate");
    let after = Utc::now().format("%A, %d %B %Y").to_string();
    assert!(first == before || first == after, "{first}");
    if before == after {
        assert_eq!(first, second);
    }
}

#[test]
fn email_kind_yields_well_formed_addresses() {
    let mut rng = ChaCha8Rng::seed_from_u64(27);
    let descriptor = FieldDescriptor::of_kind(ValueKind::Email);
    let regex = Regex::new(r"^[A-Za-z0-9]{10}@[A-Za-z0-9]{10}\.(com|net|org)$").expect("compile");
    for _ in 0..100 {
        let value = create_valid(&mut rng, &descriptor).expect("generate");
        assert!(regex.is_match(&value), "{value}");
    }
}

#[test]
fn unknown_kind_is_unsupported() {
    let mut rng = ChaCha8Rng::seed_from_u64(28);
    let descriptor = FieldDescriptor::of_kind(ValueKind::from("uuid"));
    let result = create_valid(&mut rng, &descriptor);
    assert!(matches!(result, Err(GenerationError::UnsupportedKind(kind)) if kind == "uuid"));
}

#[test]
fn decimal_helpers_stay_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(29);
    for _ in 0..100 {
        let positive: f64 = random_decimal(&mut rng).parse().expect("decimal");
        assert!((0.0..100.0).contains(&positive));
        let negative: f64 = random_negative_decimal(&mut rng).parse().expect("decimal");
        assert!(negative <= 0.0 && negative > -100.0);
    }
}
