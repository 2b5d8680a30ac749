use crate::error::CoreError;
pub use gc_arena::Gc;
pub use gc_arena::Mutation as MutationContext;
pub(crate) use gc_arena::collect::Trace as GcTrace;
pub(crate) use gc_arena::lock::RefLock as GcCell;
pub(crate) use gc_arena::Collect;
pub type GcPtr<'gc, T> = Gc<'gc, GcCell<T>>;

#[inline]
pub fn new_gc_cell_ptr<'gc, T: 'gc + Collect<'gc>>(mc: &MutationContext<'gc>, value: T) -> GcPtr<'gc, T> {
    Gc::new(mc, GcCell::new(value))
}

mod value;
pub use value::*;

mod property;
pub use property::*;

mod object;
pub use object::*;

mod environment;
pub use environment::*;

mod dump;
pub use dump::*;

/// Arena root. The global object doubles as the variable bag of the root
/// environment, so bindings created by `env_assign` fallthrough land on it.
#[derive(Collect)]
#[collect(no_drop)]
pub struct JsRoot<'gc> {
    pub global: JsObjectPtr<'gc>,
    pub global_env: EnvironmentPtr<'gc>,
}

pub type JsArena = gc_arena::Arena<gc_arena::Rootable!['gc => JsRoot<'gc>]>;

/// Build a fresh runtime: one arena rooted at an empty global object and the
/// root environment wrapping it.
pub fn new_runtime() -> JsArena {
    JsArena::new(|mc| {
        let global = new_object(mc, ObjectKind::Ordinary);
        let global_env = new_environment(mc, None, global);
        JsRoot { global, global_env }
    })
}

/// Render the current value of a global binding.
///
/// This is a host diagnostic accessor, and the one place where absence is
/// reported as an error; the core resolution operations signal "no match"
/// through `Option` instead.
pub fn read_global(arena: &JsArena, name: &str) -> Result<String, CoreError> {
    arena.mutate(|_mc, root| {
        let prop = env_lookup(&root.global_env, name).ok_or_else(|| CoreError::VariableNotFound { name: name.to_string() })?;
        let mut out = Vec::new();
        dump_value(&mut out, &prop.borrow().value)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    })
}

/// Dump every global binding to the caller-supplied sink.
pub fn dump_globals<W: std::io::Write>(arena: &JsArena, w: &mut W) -> Result<(), CoreError> {
    arena.mutate(|_mc, root| {
        dump_object(w, &root.global)?;
        Ok(())
    })
}
