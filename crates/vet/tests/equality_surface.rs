mod common;

use std::collections::BTreeMap;

use common::{last_line, quiet, Release};
use vet::{
    eq, eq_cmp, eq_func, eq_json, equals, lesser, not_eq, not_eq_func, not_equals, VetError,
};

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: u32,
    owners: Vec<String>,
    limits: BTreeMap<String, f64>,
}

fn account(id: u32) -> Account {
    Account {
        id,
        owners: vec!["ana".into(), "bo".into()],
        limits: [("daily".to_string(), 100.0)].into_iter().collect(),
    }
}

#[test]
fn eq_is_reflexive() -> Result<(), VetError> {
    let mut rec = quiet();
    eq(&mut rec, &account(1), &account(1));
    eq(&mut rec, "text", "text");
    eq(&mut rec, &[1.5, 2.5][..], &[1.5, 2.5][..]);
    eq_cmp(&mut rec, &7u64, &7u64);
    rec.finish()
}

#[test]
fn eq_fails_on_nan() {
    let mut rec = quiet();
    eq(&mut rec, &f64::NAN, &f64::NAN);
    assert!(rec.failed());
    assert_eq!(last_line(&rec), ";; expected equality via structural comparison\n");
}

#[test]
fn eq_logs_diff_before_failing() {
    let mut rec = quiet();
    let mut other = account(1);
    other.owners[1] = "cy".into();
    eq(&mut rec, &account(1), &other);
    assert_eq!(rec.lines().len(), 2);
    assert!(rec.lines()[0].starts_with(vet::BANNER));
    assert!(rec.lines()[0].contains("+        \"cy\","), "{}", rec.lines()[0]);
}

#[test]
fn operator_equality_and_inequality() {
    let mut rec = quiet();
    eq_cmp(&mut rec, &1, &2);
    assert_eq!(last_line(&rec), ";; expected equality via ==\n");
    not_eq(&mut rec, &1, &2);
    assert_eq!(rec.failures(), 1);
    not_eq(&mut rec, "a", "a");
    assert_eq!(last_line(&rec), ";; expected inequality via !=\n");
}

#[test]
fn predicate_equality() {
    let same_id = |a: &Account, b: &Account| a.id == b.id;
    let mut rec = quiet();
    let mut renamed = account(4);
    renamed.owners.clear();
    eq_func(&mut rec, &account(4), &renamed, same_id);
    not_eq_func(&mut rec, &account(4), &account(5), same_id);
    assert!(!rec.failed());

    eq_func(&mut rec, &account(4), &account(5), same_id);
    assert_eq!(last_line(&rec), ";; expected equality via 'eq' function\n");
    not_eq_func(&mut rec, &account(4), &renamed, same_id);
    assert_eq!(last_line(&rec), ";; expected inequality via 'eq' function\n");
}

#[test]
fn json_numeric_equivalence() -> Result<(), VetError> {
    let mut rec = quiet();
    eq_json(&mut rec, r#"{"a":1}"#, r#"{"a":1.0}"#);
    eq_json(&mut rec, r#"{"x":[1,{"y":null}],"z":"s"}"#, r#"{"z":"s","x":[1,{"y":null}]}"#);
    rec.finish()
}

#[test]
fn json_parse_failure_is_distinct() {
    let mut rec = quiet();
    eq_json(&mut rec, "not json", "{}");
    assert_eq!(rec.lines().len(), 1);
    assert!(last_line(&rec).starts_with(";; expected first argument to be valid json"));

    eq_json(&mut rec, "{}", "{");
    assert!(last_line(&rec).starts_with(";; expected second argument to be valid json"));
    assert!(!rec.logged("equality via json"));
}

#[test]
fn json_mismatch_lists_paths() {
    let mut rec = quiet();
    eq_json(&mut rec, r#"{"b":2,"a":[1,2]}"#, r#"{"a":[1,3],"b":2}"#);
    assert!(rec.logged("$.a[1]: 2 != 3"));
    assert!(rec.logged(r#"a: {"a":[1,2],"b":2}"#));
    assert_eq!(last_line(&rec), ";; expected equality via json decoding\n");
}

#[test]
fn equals_capability() {
    let mut rec = quiet();
    equals(&mut rec, &Release::new(1, 2, "a"), &Release::new(1, 2, "b"));
    not_equals(&mut rec, &Release::new(1, 2, "a"), &Release::new(1, 3, "a"));
    lesser(&mut rec, &Release::new(1, 2, "a"), &Release::new(2, 0, "a"));
    assert!(!rec.failed());

    equals(&mut rec, &Release::new(1, 2, "a"), &Release::new(1, 3, "a"));
    assert_eq!(last_line(&rec), ";; expected equality via .equals method\n");
    not_equals(&mut rec, &Release::new(1, 2, "a"), &Release::new(1, 2, "z"));
    assert_eq!(last_line(&rec), ";; expected inequality via .equals method\n");
    lesser(&mut rec, &Release::new(2, 0, "a"), &Release::new(2, 0, "a"));
    assert_eq!(last_line(&rec), ";; expected to be less via .less method\n");
    assert_eq!(rec.failures(), 3);
}
