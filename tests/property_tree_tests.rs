use jsobject::*;

// Initialize logger for this integration test binary so `RUST_LOG` is honored.
// Using `ctor` ensures initialization runs before tests start.
#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

#[cfg(test)]
mod property_tree_tests {
    use super::*;

    #[test]
    fn test_lookup_on_empty_object() {
        let arena = new_runtime();
        arena.mutate(|mc, _root| {
            let obj = new_object(mc, ObjectKind::Ordinary);
            assert!(object_get_property(&obj, "anything").is_none());
            assert!(object_first_property(&obj).is_none());
        });
    }

    #[test]
    fn test_set_then_get() {
        let arena = new_runtime();
        arena.mutate(|mc, _root| {
            let obj = new_object(mc, ObjectKind::Ordinary);
            object_put(mc, &obj, "answer", Value::Number(42.0));
            let prop = object_get_property(&obj, "answer").expect("property should exist");
            assert!(matches!(&prop.borrow().value, Value::Number(n) if *n == 42.0));
            assert_eq!(prop.borrow().name(), "answer");
            assert!(object_get_property(&obj, "question").is_none());
        });
    }

    #[test]
    fn test_new_property_defaults_to_undefined() {
        let arena = new_runtime();
        arena.mutate(|mc, _root| {
            let obj = new_object(mc, ObjectKind::Ordinary);
            let prop = object_set_property(mc, &obj, "fresh");
            assert!(matches!(&prop.borrow().value, Value::Undefined));
            assert_eq!(prop.borrow().flags, PropertyFlags::empty());
        });
    }

    #[test]
    fn test_insert_or_fetch_is_idempotent() {
        let arena = new_runtime();
        arena.mutate(|mc, _root| {
            let obj = new_object(mc, ObjectKind::Ordinary);
            let first = object_set_property(mc, &obj, "x");
            first.borrow_mut(mc).value = Value::Number(7.0);

            // Re-fetching must hand back the same node with the value intact.
            let second = object_set_property(mc, &obj, "x");
            assert!(Gc::ptr_eq(first, second));
            assert!(matches!(&second.borrow().value, Value::Number(n) if *n == 7.0));

            let third = object_set_property(mc, &obj, "x");
            assert!(Gc::ptr_eq(first, third));
        });
    }

    #[test]
    fn test_overwrite_keeps_single_slot() {
        let arena = new_runtime();
        arena.mutate(|mc, _root| {
            let obj = new_object(mc, ObjectKind::Ordinary);
            object_put(mc, &obj, "v", Value::from(1.0));
            object_put(mc, &obj, "v", Value::from("replaced"));
            let prop = object_get_property(&obj, "v").expect("property should exist");
            assert!(matches!(&prop.borrow().value, Value::String(s) if s == "replaced"));

            // Still exactly one property.
            let first = object_first_property(&obj).expect("one property");
            assert_eq!(first.borrow().name(), "v");
            assert!(object_next_property(&obj, "v").is_none());
        });
    }

    #[test]
    fn test_enumeration_is_sorted_regardless_of_insertion_order() {
        let arena = new_runtime();
        arena.mutate(|mc, _root| {
            let obj = new_object(mc, ObjectKind::Ordinary);
            let keys = ["delta", "alpha", "echo", "charlie", "bravo"];
            for k in keys {
                object_put(mc, &obj, k, Value::Boolean(true));
            }

            let mut seen = Vec::new();
            let mut cursor = object_first_property(&obj).map(|p| p.borrow().name().to_string());
            while let Some(name) = cursor {
                cursor = object_next_property(&obj, &name).map(|p| p.borrow().name().to_string());
                seen.push(name);
            }

            let mut expected: Vec<String> = keys.iter().map(|s| s.to_string()).collect();
            expected.sort();
            assert_eq!(seen, expected);
        });
    }

    #[test]
    fn test_enumeration_round_trip_matches_key_set() {
        // Two different insertion orders over the same key set must
        // enumerate identically.
        let keys: Vec<String> = (0..100).map(|i| format!("k{:03}", i)).collect();

        let enumerate = |insertion: &[String]| -> Vec<String> {
            let arena = new_runtime();
            let insertion = insertion.to_vec();
            arena.mutate(move |mc, _root| {
                let obj = new_object(mc, ObjectKind::Ordinary);
                for k in &insertion {
                    object_put(mc, &obj, k, Value::Null);
                }
                let mut seen = Vec::new();
                let mut cursor = object_first_property(&obj).map(|p| p.borrow().name().to_string());
                while let Some(name) = cursor {
                    cursor = object_next_property(&obj, &name).map(|p| p.borrow().name().to_string());
                    seen.push(name);
                }
                seen
            })
        };

        let forward = enumerate(&keys);
        let reversed: Vec<String> = keys.iter().rev().cloned().collect();
        let backward = enumerate(&reversed);

        let mut expected = keys.clone();
        expected.sort();
        assert_eq!(forward, expected);
        assert_eq!(backward, expected);
    }

    #[test]
    fn test_successor_of_absent_name_is_none() {
        let arena = new_runtime();
        arena.mutate(|mc, _root| {
            let obj = new_object(mc, ObjectKind::Ordinary);
            object_put(mc, &obj, "b", Value::Null);
            object_put(mc, &obj, "d", Value::Null);
            // "c" was never inserted; asking for its successor is absence,
            // not a fault.
            assert!(object_next_property(&obj, "c").is_none());
            assert!(object_next_property(&obj, "z").is_none());
        });
    }

    #[test]
    fn test_successor_crosses_subtrees() {
        let arena = new_runtime();
        arena.mutate(|mc, _root| {
            let obj = new_object(mc, ObjectKind::Ordinary);
            for k in ["m", "f", "t", "a", "h", "p", "z"] {
                object_put(mc, &obj, k, Value::Null);
            }
            let next = |name: &str| object_next_property(&obj, name).map(|p| p.borrow().name().to_string());
            assert_eq!(next("a").as_deref(), Some("f"));
            assert_eq!(next("f").as_deref(), Some("h"));
            assert_eq!(next("h").as_deref(), Some("m"));
            assert_eq!(next("m").as_deref(), Some("p"));
            assert_eq!(next("p").as_deref(), Some("t"));
            assert_eq!(next("t").as_deref(), Some("z"));
            assert_eq!(next("z"), None);
        });
    }

    #[test]
    fn test_flags_are_stored_but_never_interpreted() {
        let arena = new_runtime();
        arena.mutate(|mc, _root| {
            let obj = new_object(mc, ObjectKind::Ordinary);
            let prop = object_set_property(mc, &obj, "hidden");
            prop.borrow_mut(mc).flags = PropertyFlags::READ_ONLY | PropertyFlags::DONT_ENUM;
            prop.borrow_mut(mc).value = Value::from("still reachable");

            let fetched = object_get_property(&obj, "hidden").expect("property should exist");
            assert_eq!(fetched.borrow().flags, PropertyFlags::READ_ONLY | PropertyFlags::DONT_ENUM);

            // DONT_ENUM is not honored here; the property still enumerates.
            let first = object_first_property(&obj).expect("enumeration sees it");
            assert_eq!(first.borrow().name(), "hidden");

            // READ_ONLY is not honored either.
            object_put(mc, &obj, "hidden", Value::Number(1.0));
            assert!(matches!(&fetched.borrow().value, Value::Number(n) if *n == 1.0));
        });
    }

    #[test]
    fn test_prototype_is_not_consulted_by_get() {
        let arena = new_runtime();
        arena.mutate(|mc, _root| {
            let proto = new_object(mc, ObjectKind::Ordinary);
            object_put(mc, &proto, "inherited", Value::Number(1.0));

            let child = new_object(mc, ObjectKind::Ordinary);
            child.borrow_mut(mc).prototype = Some(proto);

            // Local lookup only; delegation is the caller's loop.
            assert!(object_get_property(&child, "inherited").is_none());
            let mut current = Some(child);
            let mut via_chain = None;
            while let Some(obj) = current {
                if let Some(prop) = object_get_property(&obj, "inherited") {
                    via_chain = Some(prop);
                    break;
                }
                current = obj.borrow().prototype;
            }
            assert!(via_chain.is_some());
        });
    }

    #[test]
    fn test_object_kind_constructors() {
        let arena = new_runtime();
        arena.mutate(|mc, root| {
            let plain = new_object(mc, ObjectKind::Ordinary);
            assert_eq!(plain.borrow().kind, ObjectKind::Ordinary);
            assert!(plain.borrow().properties.is_none());
            assert!(plain.borrow().prototype.is_none());
            assert!(plain.borrow().code.is_none());
            assert!(plain.borrow().native.is_none());

            let func = new_script_function(mc, CodeId(3), root.global_env);
            assert_eq!(func.borrow().kind, ObjectKind::ScriptFunction);
            assert_eq!(func.borrow().code, Some(CodeId(3)));
            assert!(func.borrow().scope.is_some());

            fn noop<'gc>(_mc: &MutationContext<'gc>, _args: &[Value<'gc>]) -> Value<'gc> {
                Value::Undefined
            }
            let native = new_native_function(mc, noop);
            assert_eq!(native.borrow().kind, ObjectKind::NativeFunction);
            assert!(native.borrow().native.is_some());

            // Function objects still carry a property tree of their own.
            object_put(mc, &func, "length", Value::Number(2.0));
            assert!(object_get_property(&func, "length").is_some());
        });
    }
}
