//! Property storage and name resolution for a JavaScript-style runtime.
//!
//! The crate provides the data structure that backs every object's fields
//! and every scope's variables: an AA-tree keyed by property name, a
//! three-kind object model (ordinary objects, script functions, native
//! functions) and a chained-scope environment with distinct declare / read /
//! write resolution semantics. Evaluation, parsing and the standard library
//! live in the host engine; this crate is the storage core they build on.
//!
//! All heap structures live in a [`gc_arena`] arena. Hosts construct a
//! runtime with [`new_runtime`] and do all work inside `arena.mutate`:
//!
//! ```
//! use jsobject::*;
//!
//! let arena = new_runtime();
//! arena.mutate(|mc, root| {
//!     let prop = env_declare(mc, &root.global_env, "answer");
//!     prop.borrow_mut(mc).value = Value::Number(42.0);
//! });
//! assert_eq!(read_global(&arena, "answer").unwrap(), "42");
//! ```

pub(crate) mod core;
pub(crate) mod error;

pub use crate::core::{
    CodeId, Environment, EnvironmentPtr, Gc, JsArena, JsObject, JsObjectPtr, JsRoot, MutationContext, NativeFn, ObjectKind, Property,
    PropertyFlags, PropertyPtr, Value, dump_globals, dump_object, dump_value, env_assign, env_declare, env_lookup, first_in_order,
    format_number, insert_or_fetch, lookup, new_environment, new_gc_cell_ptr, new_native_function, new_object, new_runtime,
    new_script_function, object_first_property, object_get_property, object_next_property, object_put, object_set_property, read_global,
    successor,
};
pub use crate::error::CoreError;
