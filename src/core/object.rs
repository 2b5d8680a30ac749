use crate::core::{
    Collect, EnvironmentPtr, GcPtr, GcTrace, MutationContext, PropertyPtr, Value, first_in_order, insert_or_fetch, lookup, new_gc_cell_ptr,
    successor,
};

/// Handle to a compiled function body. The evaluator owns the code table;
/// this core only carries the handle from definition site to call site and
/// never looks inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodeId(pub u32);

/// Callable handle for host-implemented functions.
pub type NativeFn = for<'gc> fn(&MutationContext<'gc>, &[Value<'gc>]) -> Value<'gc>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Collect)]
#[collect(require_static)]
pub enum ObjectKind {
    Ordinary,
    ScriptFunction,
    NativeFunction,
}

pub type JsObjectPtr<'gc> = GcPtr<'gc, JsObject<'gc>>;

pub struct JsObject<'gc> {
    pub kind: ObjectKind,
    /// Root of the property tree; `None` until the first property lands.
    pub properties: Option<PropertyPtr<'gc>>,
    /// Consulted only by callers that implement prototype-chain delegation;
    /// property access on this object never follows it.
    pub prototype: Option<JsObjectPtr<'gc>>,
    /// Scalar payload for boxed primitives.
    pub primitive: Value<'gc>,
    /// ScriptFunction: the environment captured when the closure was made.
    pub scope: Option<EnvironmentPtr<'gc>>,
    /// ScriptFunction: compiled body, owned by the evaluator.
    pub code: Option<CodeId>,
    /// NativeFunction: the host callback.
    pub native: Option<NativeFn>,
}

unsafe impl<'gc> Collect<'gc> for JsObject<'gc> {
    fn trace<T: GcTrace<'gc>>(&self, cc: &mut T) {
        if let Some(root) = &self.properties {
            root.trace(cc);
        }
        if let Some(proto) = &self.prototype {
            proto.trace(cc);
        }
        self.primitive.trace(cc);
        if let Some(scope) = &self.scope {
            scope.trace(cc);
        }
    }
}

pub fn new_object<'gc>(mc: &MutationContext<'gc>, kind: ObjectKind) -> JsObjectPtr<'gc> {
    new_gc_cell_ptr(
        mc,
        JsObject {
            kind,
            properties: None,
            prototype: None,
            primitive: Value::Undefined,
            scope: None,
            code: None,
            native: None,
        },
    )
}

/// A script-defined function: records the compiled body together with the
/// definition environment so later calls can close over it.
pub fn new_script_function<'gc>(mc: &MutationContext<'gc>, code: CodeId, scope: EnvironmentPtr<'gc>) -> JsObjectPtr<'gc> {
    let obj = new_object(mc, ObjectKind::ScriptFunction);
    obj.borrow_mut(mc).code = Some(code);
    obj.borrow_mut(mc).scope = Some(scope);
    obj
}

pub fn new_native_function<'gc>(mc: &MutationContext<'gc>, native: NativeFn) -> JsObjectPtr<'gc> {
    let obj = new_object(mc, ObjectKind::NativeFunction);
    obj.borrow_mut(mc).native = Some(native);
    obj
}

/// Look up an own property. The prototype is deliberately not consulted;
/// chained lookup is the caller re-invoking this on `prototype` itself.
pub fn object_get_property<'gc>(obj: &JsObjectPtr<'gc>, name: &str) -> Option<PropertyPtr<'gc>> {
    lookup(obj.borrow().properties, name)
}

/// Get-or-create the property slot for `name`, writing the possibly new
/// tree root back into the object. Always succeeds; callers distinguish
/// "declare" from "assign" only by whether they overwrite `value` after.
pub fn object_set_property<'gc>(mc: &MutationContext<'gc>, obj: &JsObjectPtr<'gc>, name: &str) -> PropertyPtr<'gc> {
    let root = obj.borrow().properties;
    let (root, prop) = insert_or_fetch(mc, root, name);
    obj.borrow_mut(mc).properties = Some(root);
    prop
}

/// Store `value` under `name`, creating the slot when needed.
pub fn object_put<'gc>(mc: &MutationContext<'gc>, obj: &JsObjectPtr<'gc>, name: &str, value: Value<'gc>) -> PropertyPtr<'gc> {
    let prop = object_set_property(mc, obj, name);
    prop.borrow_mut(mc).value = value;
    prop
}

pub fn object_first_property<'gc>(obj: &JsObjectPtr<'gc>) -> Option<PropertyPtr<'gc>> {
    first_in_order(obj.borrow().properties)
}

/// The property following `name` in ascending key order, or `None` when
/// `name` is the last key or absent. Enumeration is keyed by name, so a
/// caller holds only the current key string across mutations rather than a
/// node reference into the tree.
pub fn object_next_property<'gc>(obj: &JsObjectPtr<'gc>, name: &str) -> Option<PropertyPtr<'gc>> {
    successor(obj.borrow().properties, name)
}
