//! Tests for filter module

use super::*;
use crate::error::Error;
use crate::types::JsonValue;
use test_case::test_case;

// ============================================================================
// Qual Parsing Tests
// ============================================================================

#[test_case("id=abc", "id", Operator::Eq ; "equality")]
#[test_case("status != active", "status", Operator::NotEq ; "not equal with spaces")]
#[test_case("date>=2024-01-01T00:00:00Z", "date", Operator::GtEq ; "greater or equal")]
#[test_case("date<=1700000000000", "date", Operator::LtEq ; "less or equal")]
#[test_case("date>5", "date", Operator::Gt ; "greater")]
#[test_case("date<5", "date", Operator::Lt ; "less")]
fn test_qual_parse_operator(expr: &str, column: &str, operator: Operator) {
    let qual = Qual::parse(expr).unwrap();
    assert_eq!(qual.column, column);
    assert_eq!(qual.operator, operator);
}

#[test]
fn test_qual_parse_literals() {
    assert_eq!(Qual::parse("version=3").unwrap().value, JsonValue::from(3));
    assert_eq!(
        Qual::parse("archived=true").unwrap().value,
        JsonValue::Bool(true)
    );
    assert_eq!(
        Qual::parse("key='123'").unwrap().value,
        JsonValue::String("123".to_string())
    );
    assert_eq!(
        Qual::parse("filter=query:web,tags:beta").unwrap().value,
        JsonValue::String("query:web,tags:beta".to_string())
    );
    assert_eq!(
        Qual::parse("spec=proj/*:env/*").unwrap().value,
        JsonValue::String("proj/*:env/*".to_string())
    );
}

#[test_case("key=007", "007" ; "leading zeros")]
#[test_case("id=+42", "+42" ; "explicit sign")]
#[test_case("key=-0", "-0" ; "negative zero")]
#[test_case("version=42", "42" ; "canonical integer")]
fn test_qual_parse_keeps_key_text(expr: &str, expected: &str) {
    let quals = QualSet::parse_all([expr]).unwrap();
    let column = &quals.iter().next().unwrap().column;
    assert_eq!(quals.equals_string(column).as_deref(), Some(expected));
}

#[test]
fn test_qual_parse_leading_zero_is_string() {
    assert_eq!(
        Qual::parse("key=007").unwrap().value,
        JsonValue::String("007".to_string())
    );
}

#[test_case("" ; "empty")]
#[test_case("no operator" ; "no operator")]
#[test_case("date>=" ; "missing value")]
#[test_case("1date=x" ; "bad column")]
fn test_qual_parse_invalid(expr: &str) {
    let err = Qual::parse(expr).unwrap_err();
    assert!(matches!(err, Error::InvalidQual { .. }));
}

#[test]
fn test_qual_display() {
    assert_eq!(Qual::parse("date >= 5").unwrap().to_string(), "date>=5");
    assert_eq!(Qual::eq("key", "web").to_string(), "key=web");
}

// ============================================================================
// QualSet Tests
// ============================================================================

#[test]
fn test_qual_set_equals() {
    let quals = QualSet::new()
        .with(Qual::eq("project_key", "default"))
        .with(Qual::new("key", Operator::NotEq, "x"))
        .with(Qual::eq("version", 4));

    assert_eq!(quals.len(), 3);
    assert_eq!(quals.equals_string("project_key").as_deref(), Some("default"));
    assert_eq!(quals.equals_string("version").as_deref(), Some("4"));
    assert!(quals.equals("key").is_none());
    assert!(quals.equals("missing").is_none());
}

#[test]
fn test_qual_set_lookup_outlives_column_name() {
    let quals = QualSet::parse_all(["project_key=web", "date>5", "date<9"]).unwrap();

    let value = {
        let column = String::from("project_key");
        quals.equals(&column)
    };
    assert_eq!(value, Some(&JsonValue::from("web")));

    let dates: Vec<&Qual> = {
        let column = String::from("date");
        quals.for_column(&column).collect()
    };
    assert_eq!(dates.len(), 2);
}

#[test]
fn test_qual_set_has_equals_for() {
    let quals = QualSet::parse_all(["project_key=default", "key=prod"]).unwrap();
    assert!(quals.has_equals_for(&["project_key", "key"]));
    assert!(!quals.has_equals_for(&["project_key", "id"]));
    assert!(!quals.has_equals_for(&[]));
}

#[test]
fn test_qual_set_parse_all_error() {
    let result = QualSet::parse_all(["key=a", "broken"]);
    assert!(result.is_err());
}

// ============================================================================
// TimeRange Tests
// ============================================================================

fn range(exprs: &[&str]) -> TimeRange {
    TimeRange::from_quals(&QualSet::parse_all(exprs).unwrap(), "date").unwrap()
}

#[test]
fn test_time_range_equal_pins_both_bounds() {
    let r = range(&["date=1000"]);
    assert_eq!(r.after, Some(1000));
    assert_eq!(r.before, Some(1000));
}

#[test_case(">", 1001 ; "greater")]
#[test_case(">=", 1001 ; "greater or equal")]
fn test_time_range_lower_bound(op: &str, expected: i64) {
    let r = range(&[format!("date{op}1000").as_str()]);
    assert_eq!(r.after, Some(expected));
    assert_eq!(r.before, None);
}

#[test_case("<", 999 ; "less")]
#[test_case("<=", 999 ; "less or equal")]
fn test_time_range_upper_bound(op: &str, expected: i64) {
    let r = range(&[format!("date{op}1000").as_str()]);
    assert_eq!(r.before, Some(expected));
    assert_eq!(r.after, None);
}

#[test]
fn test_time_range_window() {
    let r = range(&["date>1000", "date<2000"]);
    assert_eq!(r, TimeRange { after: Some(1001), before: Some(1999) });
    assert_eq!(
        r.to_params(),
        vec![
            ("after".to_string(), "1001".to_string()),
            ("before".to_string(), "1999".to_string()),
        ]
    );
}

#[test]
fn test_time_range_tightest_bound_wins() {
    let r = range(&["date>1000", "date>=3000", "date<9000", "date<5000"]);
    assert_eq!(r.after, Some(3001));
    assert_eq!(r.before, Some(4999));
}

#[test]
fn test_time_range_rfc3339() {
    let r = range(&["date>=2024-01-01T00:00:00Z"]);
    assert_eq!(r.after, Some(1_704_067_200_001));
}

#[test]
fn test_time_range_ignores_other_columns() {
    let quals = QualSet::parse_all(["id=abc", "date!=5"]).unwrap();
    let r = TimeRange::from_quals(&quals, "date").unwrap();
    assert!(r.is_unbounded());
    assert!(r.to_params().is_empty());
}

#[test]
fn test_time_range_invalid_value() {
    let quals = QualSet::parse_all(["date>yesterday"]).unwrap();
    let err = TimeRange::from_quals(&quals, "date").unwrap_err();
    assert!(matches!(err, Error::InvalidQual { .. }));
}

#[test]
fn test_timestamp_millis() {
    assert_eq!(timestamp_millis(&JsonValue::from(42)).unwrap(), 42);
    assert_eq!(timestamp_millis(&JsonValue::from("42")).unwrap(), 42);
    assert_eq!(
        timestamp_millis(&JsonValue::from("1970-01-01T00:00:01.5Z")).unwrap(),
        1500
    );
    assert!(timestamp_millis(&JsonValue::Bool(true)).is_err());
}
