//! The registry is process-wide and tests run in parallel, so every test
//! registers under its own names.

use anyhow::{Result, bail};
use ironcollect::macros::{BUILTIN_NAMES, Operation};
use ironcollect::testing::*;
use ironcollect::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn uppercase(c: &Collection<Value>, _args: &[Value]) -> Result<Collection<Value>> {
    Ok(c.map(|v, _| json!(v.as_str().unwrap_or_default().to_uppercase())))
}

#[test]
fn registered_macro_is_callable_on_existing_collections() -> Result<()> {
    let created_before = Collection::of(json!(["a", "b", "c"]));
    register_macro("upper_before", uppercase)?;

    let upper = created_before.call("upper_before", &[])?;
    assert_eq!(upper.to_value()?, json!(["A", "B", "C"]));
    assert_eq!(created_before.to_value()?, json!(["a", "b", "c"]));
    assert!(has_macro("upper_before"));
    Ok(())
}

#[test]
fn macro_receives_call_arguments() -> Result<()> {
    register_macro("prefix_all", |c, args| {
        let Some(prefix) = args.first().and_then(Value::as_str) else {
            bail!("prefix_all needs a string prefix");
        };
        Ok(c.map(|v, _| json!(format!("{prefix}{}", v.as_str().unwrap_or_default()))))
    })?;

    let c = Collection::of(json!({ "x": "a", "y": "b" }));
    let prefixed = c.call("prefix_all", &[json!("xyz")])?;
    assert_eq!(prefixed.to_value()?, json!({ "x": "xyza", "y": "xyzb" }));
    Ok(())
}

#[test]
fn macro_errors_are_wrapped_with_the_macro_name() -> Result<()> {
    register_macro("needs_arg", |c, args| {
        if args.is_empty() {
            bail!("no arguments");
        }
        Ok(c.clone())
    })?;

    let err = Collection::of(json!([1])).call("needs_arg", &[]).unwrap_err();
    match err {
        CollectionError::Macro { name, source } => {
            assert_eq!(name, "needs_arg");
            assert_eq!(source.to_string(), "no arguments");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn reregistering_replaces_the_previous_body() -> Result<()> {
    let c = Collection::of(json!([1, 2]));

    register_macro("latest_wins", |_, _| Ok(Collection::of(json!(["first"]))))?;
    assert_eq!(c.call("latest_wins", &[])?.to_value()?, json!(["first"]));

    register_macro("latest_wins", |_, _| Ok(Collection::of(json!(["second"]))))?;
    assert_eq!(c.call("latest_wins", &[])?.to_value()?, json!(["second"]));
    Ok(())
}

#[test]
fn macro_overrides_builtin_in_dynamic_dispatch_only() -> Result<()> {
    let c = Collection::of(json!({ "a": 1, "b": 2 }));
    assert_eq!(c.call("keys", &[])?.to_value()?, json!(["a", "b"]));

    register_macro("keys", |_, _| Ok(Collection::of(json!(["overridden"]))))?;
    assert!(matches!(resolve("keys"), Some(Operation::Macro(_))));
    assert_eq!(c.call("keys", &[])?.to_value()?, json!(["overridden"]));

    // Static calls are untouched.
    assert_eq!(c.keys().to_vec(), vec!["a".to_string(), "b".to_string()]);
    Ok(())
}

#[test]
fn unknown_names_are_method_not_found() {
    let err = Collection::of(json!([1])).call("no_such_operation", &[]).unwrap_err();
    assert!(matches!(err, CollectionError::MethodNotFound(ref name) if name == "no_such_operation"));
    assert!(!has_macro("no_such_operation"));
}

#[test]
fn invalid_names_are_rejected() {
    let err = register_macro("not valid", uppercase).unwrap_err();
    assert!(matches!(err, CollectionError::InvalidMacro { ref name, .. } if name == "not valid"));
    assert!(!has_macro("not valid"));
}

#[test]
fn builtins_dispatch_by_name() -> Result<()> {
    let numbers = Collection::of(json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
    let split = numbers.call("split", &[json!(3)])?;
    assert_eq!(
        split.to_value()?,
        json!([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10]])
    );

    let products = Collection::of(sample_products());
    let kept = products.call("where_not_in", &[json!("price"), json!(["150", 200])])?;
    assert_eq!(kept.count(), 3);

    let joined = Collection::of(json!([1, 2])).call("cross_join", &[json!(["a", "b"])])?;
    assert_eq!(joined.to_value()?, json!([[1, "a"], [1, "b"], [2, "a"], [2, "b"]]));

    let sorted = Collection::of(json!([3, "b", 1, null, "a"])).call("sort", &[])?;
    assert_eq!(sorted.to_value()?, json!([null, 1, 3, "a", "b"]));
    Ok(())
}

#[test]
fn builtin_arguments_are_validated() {
    let c = Collection::of(json!([1, 2, 3]));
    for (name, args) in [
        ("split", vec![]),
        ("split", vec![json!(-1)]),
        ("split", vec![json!(0)]),
        ("chunk", vec![json!("two")]),
        ("where_in", vec![json!(1), json!([1])]),
    ] {
        let err = c.call(name, &args).unwrap_err();
        assert!(
            matches!(err, CollectionError::InvalidArgument { operation, .. } if operation == name),
            "{name} {args:?}: {err:?}"
        );
    }
}

#[test]
fn every_builtin_name_resolves() {
    for name in BUILTIN_NAMES {
        // `keys` may be overridden by another test in this binary.
        assert!(resolve(name).is_some(), "{name}");
    }
}

#[test]
fn macro_matches_the_typed_operation_it_wraps() -> Result<()> {
    register_macro("double_numbers", |c, _| {
        Ok(c.map(|v, _| json!(v.as_i64().unwrap_or_default() * 2)))
    })?;

    let c = Collection::of(json!({ "a": 1, "b": 2, "c": 3 }));
    let via_macro = c.call("double_numbers", &[])?;
    let direct = c.map(|v, _| json!(v.as_i64().unwrap_or_default() * 2));
    assert_eq!(via_macro, direct);
    assert_keys_in_order(&via_macro, &["a", "b", "c"]);
    Ok(())
}
