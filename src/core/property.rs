//! AA-tree property storage.
//!
//! Invariants held after every insertion:
//! - leaves sit at level 1; an empty subtree (`None`) counts as level 0;
//! - a left child is exactly one level below its parent, so left-horizontal
//!   links never occur;
//! - a right child is at its parent's level or one below, and a right
//!   grandchild is strictly below its grandparent, so right-horizontal
//!   links occur singly at most;
//! - every node above level 1 has both children.
//!
//! `skew` removes a left-horizontal link with a right rotation; `split`
//! removes a pair of right-horizontal links with a left rotation and a
//! level promotion. Applying both at each node on the way back up from an
//! insertion restores the invariants and keeps the height logarithmic.

use crate::core::{Collect, Gc, GcPtr, GcTrace, MutationContext, Value, new_gc_cell_ptr};
use std::cmp::Ordering;

bitflags::bitflags! {
    /// Property attribute bits. Stored on behalf of the host; nothing in
    /// this crate interprets them.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PropertyFlags: u8 {
        const READ_ONLY   = 1 << 0;
        const DONT_ENUM   = 1 << 1;
        const DONT_DELETE = 1 << 2;
    }
}

pub type PropertyPtr<'gc> = GcPtr<'gc, Property<'gc>>;

/// One property: a named slot in an object's AA-tree.
///
/// The name is fixed at creation; the balance bookkeeping (`level`,
/// `left`, `right`) belongs to the tree engine and is read-only outside it.
pub struct Property<'gc> {
    name: String,
    pub value: Value<'gc>,
    pub flags: PropertyFlags,
    level: u32,
    left: Option<PropertyPtr<'gc>>,
    right: Option<PropertyPtr<'gc>>,
}

impl<'gc> Property<'gc> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Balance rank. Exposed for invariant checks.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn left(&self) -> Option<PropertyPtr<'gc>> {
        self.left
    }

    pub fn right(&self) -> Option<PropertyPtr<'gc>> {
        self.right
    }
}

unsafe impl<'gc> Collect<'gc> for Property<'gc> {
    fn trace<T: GcTrace<'gc>>(&self, cc: &mut T) {
        self.value.trace(cc);
        if let Some(l) = &self.left {
            l.trace(cc);
        }
        if let Some(r) = &self.right {
            r.trace(cc);
        }
    }
}

fn level_of(node: &Option<PropertyPtr<'_>>) -> u32 {
    node.as_ref().map_or(0, |n| n.borrow().level)
}

fn new_property<'gc>(mc: &MutationContext<'gc>, name: &str) -> PropertyPtr<'gc> {
    new_gc_cell_ptr(
        mc,
        Property {
            name: name.to_string(),
            value: Value::Undefined,
            flags: PropertyFlags::empty(),
            level: 1,
            left: None,
            right: None,
        },
    )
}

/// Find the property named `name`, or `None` when the tree has no entry.
pub fn lookup<'gc>(root: Option<PropertyPtr<'gc>>, name: &str) -> Option<PropertyPtr<'gc>> {
    let mut node = root;
    while let Some(n) = node {
        let ord = name.cmp(n.borrow().name());
        node = match ord {
            Ordering::Equal => return Some(n),
            Ordering::Less => n.borrow().left,
            Ordering::Greater => n.borrow().right,
        };
    }
    None
}

/// Rotate a left-horizontal link away, then skew the right subtree.
fn skew<'gc>(mc: &MutationContext<'gc>, mut node: PropertyPtr<'gc>) -> PropertyPtr<'gc> {
    let left = node.borrow().left;
    if let Some(l) = left
        && l.borrow().level == node.borrow().level
    {
        node.borrow_mut(mc).left = l.borrow().right;
        l.borrow_mut(mc).right = Some(node);
        node = l;
    }
    let right = node.borrow().right;
    if let Some(r) = right {
        let fixed = skew(mc, r);
        node.borrow_mut(mc).right = Some(fixed);
    }
    node
}

/// Rotate a double right-horizontal link away, promoting the new subtree
/// root one level, then split the right subtree.
fn split<'gc>(mc: &MutationContext<'gc>, node: PropertyPtr<'gc>) -> PropertyPtr<'gc> {
    let right = node.borrow().right;
    if let Some(r) = right
        && level_of(&r.borrow().right) == node.borrow().level
    {
        node.borrow_mut(mc).right = r.borrow().left;
        r.borrow_mut(mc).left = Some(node);
        r.borrow_mut(mc).level += 1;
        let tail = r.borrow().right;
        if let Some(t) = tail {
            let fixed = split(mc, t);
            r.borrow_mut(mc).right = Some(fixed);
        }
        return r;
    }
    node
}

/// Insert-or-fetch: return the node for `name`, creating a level-1 node
/// holding `Undefined` when none exists and rebalancing every ancestor on
/// the way back up. Fetching an existing name touches nothing, so the call
/// is idempotent. There is no separate pure-insert primitive; declaring and
/// overwriting a property both go through here.
///
/// Returns the possibly rewritten subtree root together with the node.
pub fn insert_or_fetch<'gc>(
    mc: &MutationContext<'gc>,
    root: Option<PropertyPtr<'gc>>,
    name: &str,
) -> (PropertyPtr<'gc>, PropertyPtr<'gc>) {
    let Some(node) = root else {
        log::trace!("insert_or_fetch: new property node '{name}'");
        let fresh = new_property(mc, name);
        return (fresh, fresh);
    };
    let ord = name.cmp(node.borrow().name());
    let found = match ord {
        Ordering::Equal => return (node, node),
        Ordering::Less => {
            let left = node.borrow().left;
            let (subtree, found) = insert_or_fetch(mc, left, name);
            node.borrow_mut(mc).left = Some(subtree);
            found
        }
        Ordering::Greater => {
            let right = node.borrow().right;
            let (subtree, found) = insert_or_fetch(mc, right, name);
            node.borrow_mut(mc).right = Some(subtree);
            found
        }
    };
    let node = split(mc, skew(mc, node));
    (node, found)
}

/// Leftmost property of the tree, the smallest key in lexicographic order.
pub fn first_in_order<'gc>(root: Option<PropertyPtr<'gc>>) -> Option<PropertyPtr<'gc>> {
    let mut node = root?;
    loop {
        let left = node.borrow().left;
        match left {
            Some(l) => node = l,
            None => return Some(node),
        }
    }
}

/// In-order successor of `name`, found by re-walking the search path onto
/// an explicit stack: the minimum of the right subtree when one exists,
/// otherwise the nearest ancestor entered from the left. A `name` that is
/// not in the tree yields `None`.
///
/// The stack grows with the height of the tree, which the balance
/// invariants bound at O(log n).
pub fn successor<'gc>(root: Option<PropertyPtr<'gc>>, name: &str) -> Option<PropertyPtr<'gc>> {
    let mut stack: Vec<PropertyPtr<'gc>> = Vec::new();
    let mut node = root;
    let mut found = None;
    while let Some(n) = node {
        stack.push(n);
        let ord = name.cmp(n.borrow().name());
        node = match ord {
            Ordering::Equal => {
                found = Some(n);
                break;
            }
            Ordering::Less => n.borrow().left,
            Ordering::Greater => n.borrow().right,
        };
    }
    let found = found?;

    let right = found.borrow().right;
    if right.is_some() {
        return first_in_order(right);
    }

    stack.pop();
    let mut child = found;
    while let Some(parent) = stack.pop() {
        let from_right = parent.borrow().right.is_some_and(|r| Gc::ptr_eq(r, child));
        if !from_right {
            return Some(parent);
        }
        child = parent;
    }
    None
}
