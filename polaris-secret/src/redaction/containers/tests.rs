//! Tests for standard container redaction behavior.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::{Arc, mpsc},
};

use crate::{Redact, SecretString, redaction::traits::Redactable};

#[derive(Clone, Debug, PartialEq, Redact)]
struct ApiKey {
    pub id: String,
    pub value: SecretString,
}

fn api_key(id: &str, value: &str) -> ApiKey {
    ApiKey {
        id: id.to_string(),
        value: value.into(),
    }
}

#[test]
fn passthrough_string_unchanged() {
    let s = "hello".to_string();
    let redacted = s.clone().redact();
    assert_eq!(redacted, s);
}

#[test]
fn passthrough_integers_unchanged() {
    assert_eq!(0i32.redact(), 0i32);
    assert_eq!(42u64.redact(), 42u64);
    assert_eq!((-1i8).redact(), -1i8);
}

#[test]
fn option_traversal_redacts_inner() {
    let value = Some(api_key("k1", "secret"));
    let redacted = value.redact().unwrap();
    assert_eq!(redacted.id, "k1");
    assert_eq!(redacted.value, "REDACTED");
}

#[test]
fn option_none_unchanged() {
    let o: Option<SecretString> = None;
    assert!(o.redact().is_none());
}

#[test]
fn result_traversal_redacts_ok_and_err() {
    let ok_value: Result<ApiKey, SecretString> = Ok(api_key("k1", "ok_secret"));
    assert_eq!(ok_value.redact().unwrap().value, "REDACTED");

    let err_value: Result<ApiKey, SecretString> = Err("err_secret".into());
    assert_eq!(err_value.redact().unwrap_err(), "REDACTED");
}

#[test]
fn vec_traversal_redacts_all_elements() {
    let values = vec![api_key("a", "first"), api_key("b", "second")];
    let redacted = values.redact();
    assert_eq!(redacted.len(), 2);
    assert!(redacted.iter().all(|key| key.value == "REDACTED"));
    assert_eq!(redacted[1].id, "b");
}

#[test]
fn vecdeque_traversal_keeps_order() {
    let values: VecDeque<SecretString> = ["x".into(), "y".into()].into();
    let redacted = values.redact();
    assert_eq!(redacted, ["REDACTED", "REDACTED"]);
}

#[test]
fn array_and_tuple_traversal() {
    let array = [SecretString::from("a"), SecretString::from("b")];
    assert_eq!(array.redact(), ["REDACTED", "REDACTED"]);

    let tuple = (SecretString::from("a"), 7u8, "plain".to_string());
    let (secret, number, text) = tuple.redact();
    assert_eq!(secret, "REDACTED");
    assert_eq!(number, 7);
    assert_eq!(text, "plain");
}

#[test]
fn box_traversal_redacts_inner() {
    let b = Box::new(api_key("k1", "secret"));
    assert_eq!(b.redact().value, "REDACTED");
}

#[test]
fn arc_traversal_allocates_fresh_pointer() {
    let original = Arc::new(api_key("k1", "secret"));
    let redacted = Arc::clone(&original).redact();
    assert_eq!(redacted.value, "REDACTED");
    assert!(!Arc::ptr_eq(&original, &redacted));
    assert_eq!(original.value, "secret");
}

#[test]
fn rc_traversal_allocates_fresh_pointer() {
    let original = Rc::new(api_key("k1", "secret"));
    let redacted = Rc::clone(&original).redact();
    assert_eq!(redacted.value, "REDACTED");
    assert!(!Rc::ptr_eq(&original, &redacted));
    assert_eq!(original.value, "secret");
}

#[test]
fn shared_pointers_redact_independently() {
    let shared = Rc::new(SecretString::from("secret"));
    let pair = (Rc::clone(&shared), Rc::clone(&shared));
    let (first, second) = pair.redact();
    assert_eq!(*first, "REDACTED");
    assert_eq!(*second, "REDACTED");
    assert!(!Rc::ptr_eq(&first, &shared));
    assert_eq!(*shared, "secret");
}

#[test]
fn map_traversal_redacts_values() {
    let mut map: HashMap<String, ApiKey> = HashMap::new();
    map.insert("key".to_string(), api_key("k1", "secret"));
    let redacted = map.redact();
    assert_eq!(redacted["key"].value, "REDACTED");
}

#[test]
fn map_plain_keys_are_kept() {
    let mut map: BTreeMap<String, SecretString> = BTreeMap::new();
    map.insert("password".to_string(), "hunter2".into());
    map.insert("token".to_string(), "abc".into());
    let redacted = map.redact();
    assert_eq!(redacted.len(), 2);
    assert_eq!(redacted["password"], "REDACTED");
    assert_eq!(redacted["token"], "REDACTED");
}

#[test]
fn map_secret_keys_collapse() {
    let mut map: HashMap<SecretString, u32> = HashMap::new();
    map.insert("first".into(), 1);
    map.insert("second".into(), 2);
    let redacted = map.redact();
    assert_eq!(redacted.len(), 1);
    assert!(redacted.contains_key("REDACTED"));
}

#[test]
fn btreemap_secret_key_collision_keeps_last_in_key_order() {
    let mut map: BTreeMap<SecretString, u32> = BTreeMap::new();
    map.insert("b".into(), 2);
    map.insert("a".into(), 1);
    map.insert("c".into(), 3);
    let redacted = map.redact();
    assert_eq!(redacted.len(), 1);
    assert_eq!(redacted["REDACTED"], 3);
}

#[test]
fn btreeset_plain_elements_kept() {
    let mut set: BTreeSet<String> = BTreeSet::new();
    set.insert("public".to_string());
    let redacted = set.redact();
    assert!(redacted.contains("public"));
}

#[test]
fn hashset_secret_elements_collapse() {
    let set: HashSet<SecretString> = ["a".into(), "b".into(), "c".into()].into();
    let redacted = set.redact();
    assert_eq!(redacted.len(), 1);
    assert!(redacted.contains("REDACTED"));
}

#[test]
fn nested_container_traversal_redacts_inner() {
    let values = vec![Some(api_key("k1", "secret"))];
    let redacted = values.redact();
    assert_eq!(redacted[0].as_ref().unwrap().value, "REDACTED");
}

#[test]
fn refcell_traversal_redacts_inner() {
    let r = RefCell::new(api_key("k1", "secret"));
    let redacted = r.redact();
    assert_eq!(redacted.borrow().value, "REDACTED");
}

#[test]
fn cell_passthrough_unchanged() {
    let c = Cell::new(42u32);
    assert_eq!(c.redact().get(), 42);
}

#[test]
fn channels_are_returned_untouched() {
    let (sender, receiver) = mpsc::channel::<SecretString>();
    let sender = sender.redact();
    sender.send("still usable".into()).unwrap();
    let receiver = receiver.redact();
    assert_eq!(receiver.recv().unwrap(), "still usable");
}

#[test]
fn function_pointers_are_returned_untouched() {
    fn double(value: u32) -> u32 {
        value * 2
    }
    let f: fn(u32) -> u32 = double;
    assert_eq!(f.redact()(4), 8);
}
