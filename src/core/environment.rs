use crate::core::{Collect, GcPtr, JsObjectPtr, MutationContext, PropertyPtr, new_gc_cell_ptr, object_get_property, object_set_property};

pub type EnvironmentPtr<'gc> = GcPtr<'gc, Environment<'gc>>;

/// One lexical scope: a link to the enclosing scope and an object used
/// purely as the variable bag. Scopes nest strictly, so the chain is
/// acyclic by construction and is never rewired after creation.
#[derive(Collect)]
#[collect(no_drop)]
pub struct Environment<'gc> {
    pub outer: Option<EnvironmentPtr<'gc>>,
    pub variables: JsObjectPtr<'gc>,
}

pub fn new_environment<'gc>(
    mc: &MutationContext<'gc>,
    outer: Option<EnvironmentPtr<'gc>>,
    variables: JsObjectPtr<'gc>,
) -> EnvironmentPtr<'gc> {
    new_gc_cell_ptr(mc, Environment { outer, variables })
}

/// Declare `name` in this scope, shadowing any outer binding of the same
/// name.
pub fn env_declare<'gc>(mc: &MutationContext<'gc>, env: &EnvironmentPtr<'gc>, name: &str) -> PropertyPtr<'gc> {
    let vars = env.borrow().variables;
    object_set_property(mc, &vars, name)
}

/// Resolve `name` for reading: the nearest scope that binds it, walking
/// outward, or `None` when the chain is exhausted. Never creates a binding.
pub fn env_lookup<'gc>(env: &EnvironmentPtr<'gc>, name: &str) -> Option<PropertyPtr<'gc>> {
    let mut current = Some(*env);
    while let Some(e) = current {
        let vars = e.borrow().variables;
        if let Some(prop) = object_get_property(&vars, name) {
            return Some(prop);
        }
        current = e.borrow().outer;
    }
    None
}

/// Resolve `name` for writing: the nearest scope that binds it, walking
/// outward. With no binding anywhere in the chain, the name is created in
/// the outermost scope reached, so assignment to an undeclared variable
/// makes a global. The fallback scope is observable program behavior and
/// must stay the outermost one.
pub fn env_assign<'gc>(mc: &MutationContext<'gc>, env: &EnvironmentPtr<'gc>, name: &str) -> PropertyPtr<'gc> {
    let mut current = *env;
    loop {
        let vars = current.borrow().variables;
        if let Some(prop) = object_get_property(&vars, name) {
            return prop;
        }
        let outer = current.borrow().outer;
        match outer {
            Some(o) => current = o,
            None => break,
        }
    }
    log::debug!("env_assign: creating implicit global '{name}'");
    let vars = current.borrow().variables;
    object_set_property(mc, &vars, name)
}
