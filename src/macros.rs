//! Process-wide macro registry and name-based dispatch.
//!
//! Macros extend the dynamically typed collection, `Collection<Value>`, with
//! new named operations at runtime. The registry is shared by every
//! collection for the lifetime of the process: a registration is visible to
//! collections created before and after it, and registering an existing name
//! replaces the previous implementation.
//!
//! [`Collection::call`] resolves a name in this order:
//! 1. a registered macro (so a macro named like a built-in overrides it),
//! 2. the built-in dispatch table ([`BUILTIN_NAMES`]),
//! 3. otherwise [`CollectionError::MethodNotFound`].
//!
//! Typed method calls such as `collection.reverse()` are resolved by the
//! compiler and never consult the registry.
//!
//! ```
//! use ironcollect::{Collection, register_macro};
//! use serde_json::{json, Value};
//!
//! register_macro("uppercase", |c: &Collection<Value>, _args: &[Value]| {
//!     Ok(c.map(|v, _| json!(v.as_str().unwrap_or_default().to_uppercase())))
//! })?;
//!
//! let letters = Collection::of(json!(["a", "b", "c"]));
//! let upper = letters.call("uppercase", &[])?;
//! assert_eq!(upper.to_value()?, json!(["A", "B", "C"]));
//! assert_eq!(letters.to_value()?, json!(["a", "b", "c"]));
//! # Ok::<(), ironcollect::CollectionError>(())
//! ```

use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::items::Normalize;
use crate::value::compare_values;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// A registered macro body. It receives the calling collection and the call's
/// arguments.
pub type MacroFn =
    Arc<dyn Fn(&Collection<Value>, &[Value]) -> anyhow::Result<Collection<Value>> + Send + Sync>;

/// A built-in operation reachable through dynamic dispatch.
pub type BuiltinFn = fn(&Collection<Value>, &[Value]) -> Result<Collection<Value>>;

static MACROS: LazyLock<RwLock<HashMap<String, MacroFn>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

static MACRO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid macro name regex"));

/// Register `body` under `name` for every `Collection<Value>`.
///
/// # Errors
/// [`CollectionError::InvalidMacro`] when `name` is not an identifier
/// (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn register_macro<F>(name: &str, body: F) -> Result<()>
where
    F: Fn(&Collection<Value>, &[Value]) -> anyhow::Result<Collection<Value>> + Send + Sync + 'static,
{
    if !MACRO_NAME.is_match(name) {
        return Err(CollectionError::InvalidMacro {
            name: name.to_owned(),
            reason: "macro names must be identifiers".to_owned(),
        });
    }
    let mut macros = MACROS.write().unwrap_or_else(PoisonError::into_inner);
    let replaced = macros.insert(name.to_owned(), Arc::new(body)).is_some();
    tracing::debug!(
        macro_name = name,
        replaced,
        overrides_builtin = is_builtin(name),
        "registered collection macro"
    );
    Ok(())
}

/// Whether a macro is currently registered under `name`.
#[must_use]
pub fn has_macro(name: &str) -> bool {
    MACROS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(name)
}

/// The implementation a dynamic call to `name` would run.
#[derive(Clone)]
pub enum Operation {
    Macro(MacroFn),
    Builtin { name: &'static str, run: BuiltinFn },
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Macro(_) => f.write_str("Macro(..)"),
            Operation::Builtin { name, .. } => f.debug_tuple("Builtin").field(name).finish(),
        }
    }
}

/// Resolve `name` the way [`Collection::call`] does, without running it.
#[must_use]
pub fn resolve(name: &str) -> Option<Operation> {
    let registered = MACROS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned();
    registered.map(Operation::Macro).or_else(|| {
        BUILTINS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|&(name, run)| Operation::Builtin { name, run })
    })
}

impl Collection<Value> {
    /// Invoke an operation by name with JSON arguments.
    ///
    /// # Errors
    /// - [`CollectionError::MethodNotFound`] for an unknown name
    /// - [`CollectionError::InvalidArgument`] for malformed built-in arguments
    /// - [`CollectionError::Macro`] when a macro body fails
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Collection<Value>> {
        let op = resolve(name).ok_or_else(|| CollectionError::MethodNotFound(name.to_owned()))?;
        tracing::trace!(operation = name, ?op, args = args.len(), "dispatching collection call");
        match op {
            Operation::Macro(body) => body(self, args).map_err(|source| CollectionError::Macro {
                name: name.to_owned(),
                source,
            }),
            Operation::Builtin { run, .. } => run(self, args),
        }
    }
}

/// Names reachable through [`Collection::call`] without registering anything.
pub const BUILTIN_NAMES: [&str; 12] = [
    "all",
    "values",
    "keys",
    "reverse",
    "sort",
    "split",
    "chunk",
    "diff_assoc",
    "diff",
    "where_in",
    "where_not_in",
    "cross_join",
];

static BUILTINS: [(&str, BuiltinFn); 12] = [
    ("all", |c, _| Ok(c.clone())),
    ("values", |c, _| Ok(c.values())),
    ("keys", |c, _| Ok(c.keys().map(|k, _| Value::String(k.clone())))),
    ("reverse", |c, _| Ok(c.reverse())),
    ("sort", |c, _| Ok(c.sort_by(compare_values))),
    ("split", |c, args| {
        let groups = c.split(arg_usize("split", args, 0)?)?;
        Ok(nested(groups))
    }),
    ("chunk", |c, args| {
        let chunks = c.chunk(arg_usize("chunk", args, 0)?)?;
        Ok(nested(chunks))
    }),
    ("diff_assoc", |c, args| Ok(c.diff_assoc(arg("diff_assoc", args, 0)?))),
    ("diff", |c, args| Ok(c.diff(arg("diff", args, 0)?))),
    ("where_in", |c, args| {
        let values = arg_list("where_in", args, 1)?;
        c.where_in(arg_str("where_in", args, 0)?, values.as_slice())
    }),
    ("where_not_in", |c, args| {
        let values = arg_list("where_not_in", args, 1)?;
        c.where_not_in(arg_str("where_not_in", args, 0)?, values.as_slice())
    }),
    ("cross_join", |c, args| {
        let tuples = c.cross_join(args.iter());
        Ok(tuples.map(|tuple, _| Value::Array(tuple.clone())))
    }),
];

fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

fn nested(groups: Vec<Vec<Value>>) -> Collection<Value> {
    groups.into_iter().map(Value::Array).collect()
}

fn arg<'a>(operation: &'static str, args: &'a [Value], index: usize) -> Result<&'a Value> {
    args.get(index).ok_or_else(|| {
        CollectionError::invalid_argument(operation, format!("missing argument {index}"))
    })
}

fn arg_usize(operation: &'static str, args: &[Value], index: usize) -> Result<usize> {
    arg(operation, args, index)?
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            CollectionError::invalid_argument(
                operation,
                format!("argument {index} must be a non-negative integer"),
            )
        })
}

fn arg_str<'a>(operation: &'static str, args: &'a [Value], index: usize) -> Result<&'a str> {
    arg(operation, args, index)?.as_str().ok_or_else(|| {
        CollectionError::invalid_argument(operation, format!("argument {index} must be a string"))
    })
}

fn arg_list(operation: &'static str, args: &[Value], index: usize) -> Result<Vec<Value>> {
    Ok(arg(operation, args, index)?.normalize().into_values())
}
