//! Library-level tests for resolution and construction.
//!
//! Test coverage areas:
//! - Method lookup by name and arity range, including failure messages
//! - Construction from text nodes across every supported kind
//! - Soft skip of unsupported constructors vs hard failure on malformed text
//! - Concurrent lookups against a shared registry

mod common;

use std::sync::Arc;
use std::thread;

use common::{nodes, widget_registry, Widget, WIDGET};
use te_invoke::catalog::{builtin_registry, Counter, Label, Tolerance, COUNTER, LABEL, TOLERANCE};
use te_invoke::{
    construct, find_operation, find_operation_exact, CoercedValue, CoercionFailure, Element,
    InvokeError, Node, ParamKind,
};

fn invoke_error(err: &anyhow::Error) -> &InvokeError {
    err.downcast_ref::<InvokeError>()
        .expect("error should be an InvokeError")
}

// =============================================================================
// Resolution
// =============================================================================

mod resolution_tests {
    use super::*;

    #[test]
    fn test_unique_exact_match() {
        let registry = widget_registry();
        let method = find_operation_exact(&registry, WIDGET, "kind_count", 0).unwrap();
        assert_eq!(method.name(), "kind_count");
        assert!(method.is_static());
    }

    #[test]
    fn test_overloads_by_arity() {
        let registry = widget_registry();
        let one = find_operation_exact(&registry, WIDGET, "scale", 1).unwrap();
        let two = find_operation_exact(&registry, WIDGET, "scale", 2).unwrap();
        assert_eq!(one.params(), &[ParamKind::I32]);
        assert_eq!(two.params(), &[ParamKind::I32, ParamKind::I32]);

        // Both qualify; the earlier registration wins.
        let either = find_operation(&registry, WIDGET, "scale", 1, 2).unwrap();
        assert_eq!(either.arity(), 1);
    }

    #[test]
    fn test_failure_messages() {
        let registry = widget_registry();
        let cases = [
            (1, 1, "missing", "Method missing with 1 argument was not found in type test.Widget"),
            (3, 3, "scale", "Method scale with 3 arguments was not found in type test.Widget"),
            (3, 7, "scale", "Method scale with 3 to 7 arguments was not found in type test.Widget"),
            (0, 0, "scale", "Method scale with 0 argument was not found in type test.Widget"),
        ];
        for (min, max, op, expected) in cases {
            let err = find_operation(&registry, WIDGET, op, min, max).unwrap_err();
            assert_eq!(err.to_string(), expected);
            assert!(invoke_error(&err).is_lookup_failure());
        }
    }

    #[test]
    fn test_constructors_are_not_operations() {
        let registry = widget_registry();
        assert!(find_operation(&registry, WIDGET, "<init>", 0, 10).is_err());
    }

    #[test]
    fn test_idempotent_lookup() {
        let registry = widget_registry();
        let a = find_operation(&registry, WIDGET, "scale", 0, 5).unwrap();
        let b = find_operation(&registry, WIDGET, "scale", 0, 5).unwrap();
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn test_resolve_then_invoke_with_nodes() {
        let registry = widget_registry();
        let mut widget = construct(&registry, WIDGET, &nodes(&["3", "false"]))
            .unwrap()
            .unwrap();
        let scale = find_operation_exact(&registry, WIDGET, "scale", 2).unwrap();
        let out = scale
            .invoke_with_nodes(Some(&mut widget), &nodes(&["4", "1"]))
            .unwrap();
        assert_eq!(out, Some(CoercedValue::I32(13)));
        assert_eq!(widget.downcast_ref::<Widget>(), Some(&Widget::Sized(13, false)));
    }

    #[test]
    fn test_invoke_with_malformed_node() {
        let registry = widget_registry();
        let mut widget = construct(&registry, WIDGET, &nodes(&["3", "true"]))
            .unwrap()
            .unwrap();
        let scale = find_operation_exact(&registry, WIDGET, "scale", 1).unwrap();
        let err = scale
            .invoke_with_nodes(Some(&mut widget), &nodes(&["twice"]))
            .unwrap_err();
        assert!(matches!(invoke_error(&err), InvokeError::Coercion { .. }));
    }
}

// =============================================================================
// Construction
// =============================================================================

mod construction_tests {
    use super::*;

    fn widget(texts: &[&str]) -> Widget {
        construct(&widget_registry(), WIDGET, &nodes(texts))
            .unwrap()
            .expect("a constructor should apply")
            .into_inner::<Widget>()
            .unwrap()
    }

    #[test]
    fn test_integer_and_boolean() {
        assert_eq!(widget(&["42", "true"]), Widget::Sized(42, true));
    }

    #[test]
    fn test_first_arity_match_wins() {
        // (i32, bool) precedes (i64, i64); "7" "8" coerces fine as i32 + bool.
        assert_eq!(widget(&["7", "8"]), Widget::Sized(7, false));
    }

    #[test]
    fn test_unsupported_constructor_skipped() {
        assert_eq!(widget(&["hello"]), Widget::Named("hello".into()));
    }

    #[test]
    fn test_every_kind() {
        let registry = widget_registry();
        let mut args = vec![Node::Element(
            Element::new("opts").with_attribute("mode", "strict"),
        )];
        args.extend(nodes(&[
            "label", "Q", "TRUE", "-5", "512", "70000", "-1", "1.5", "2.25",
        ]));
        let built = construct(&registry, WIDGET, &args)
            .unwrap()
            .unwrap()
            .into_inner::<Widget>()
            .unwrap();
        assert_eq!(
            built,
            Widget::Every {
                node: args[0].clone(),
                text: "label".into(),
                ch: 'Q',
                flag: true,
                small: -5,
                short: 512,
                int: 70000,
                long: -1,
                single: 1.5,
                double: 2.25,
            }
        );
    }

    #[test]
    fn test_malformed_integer_is_fatal() {
        let registry = widget_registry();
        let err = construct(&registry, WIDGET, &nodes(&["not-a-number", "true"])).unwrap_err();
        match invoke_error(&err) {
            InvokeError::Coercion {
                type_name,
                index,
                kind,
                failure,
            } => {
                assert_eq!(type_name, WIDGET);
                assert_eq!(*index, 0);
                assert_eq!(*kind, ParamKind::I32);
                assert!(matches!(failure, CoercionFailure::InvalidInteger { .. }));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_malformed_value_does_not_try_next_candidate() {
        // (i64, i64) would accept these, but (i32, bool) is chosen first and
        // "9999999999" overflows i32.
        let registry = widget_registry();
        let err = construct(&registry, WIDGET, &nodes(&["9999999999", "1"])).unwrap_err();
        assert!(matches!(invoke_error(&err), InvokeError::Coercion { .. }));
    }

    #[test]
    fn test_no_matching_arity_is_none() {
        let registry = widget_registry();
        assert!(construct(&registry, WIDGET, &nodes(&["a", "b", "c"]))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_unknown_type_is_error() {
        let registry = widget_registry();
        let err = construct(&registry, "test.Nothing", &[]).unwrap_err();
        assert!(matches!(invoke_error(&err), InvokeError::TypeNotFound { .. }));
    }
}

// =============================================================================
// Built-in catalog
// =============================================================================

mod catalog_tests {
    use super::*;

    #[test]
    fn test_counter_round_trip() {
        let registry = builtin_registry().unwrap();
        let mut counter = construct(&registry, COUNTER, &nodes(&["10", "5"]))
            .unwrap()
            .unwrap();
        let increment = find_operation_exact(&registry, COUNTER, "increment", 0).unwrap();
        increment.invoke(Some(&mut counter), &[]).unwrap();
        assert_eq!(
            counter.downcast_ref::<Counter>(),
            Some(&Counter { value: 15, step: 5 })
        );
    }

    #[test]
    fn test_tolerance_flag() {
        let registry = builtin_registry().unwrap();
        let tolerance = construct(&registry, TOLERANCE, &nodes(&["0.5", "no"]))
            .unwrap()
            .unwrap()
            .into_inner::<Tolerance>()
            .unwrap();
        assert!(!tolerance.inclusive);
        assert_eq!(tolerance.epsilon, 0.5);
    }

    #[test]
    fn test_label_text_and_char() {
        let registry = builtin_registry().unwrap();
        let label = construct(&registry, LABEL, &nodes(&["Done", "*"]))
            .unwrap()
            .unwrap()
            .into_inner::<Label>()
            .unwrap();
        assert_eq!(label.render(), "* Done");
    }

    #[test]
    fn test_static_concat() {
        let registry = builtin_registry().unwrap();
        let concat = find_operation_exact(&registry, LABEL, "concat", 2).unwrap();
        let out = concat
            .invoke_with_nodes(None, &nodes(&["te-", "invoke"]))
            .unwrap();
        assert_eq!(out, Some(CoercedValue::Text("te-invoke".into())));
    }
}

// =============================================================================
// Concurrency
// =============================================================================

mod concurrency_tests {
    use super::*;

    #[test]
    fn test_concurrent_lookups() {
        let registry = Arc::new(widget_registry());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let size = i.to_string();
                    for _ in 0..50 {
                        find_operation_exact(&registry, WIDGET, "scale", 1).unwrap();
                        let built = construct(&registry, WIDGET, &nodes(&[size.as_str(), "true"]))
                            .unwrap()
                            .unwrap();
                        assert_eq!(
                            built.downcast_ref::<Widget>(),
                            Some(&Widget::Sized(i, true))
                        );
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_register_while_resolving() {
        let registry = Arc::new(widget_registry());
        let writer = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                te_invoke::catalog::register_builtins(&registry).unwrap();
            })
        };
        for _ in 0..100 {
            find_operation_exact(registry.as_ref(), WIDGET, "kind_count", 0).unwrap();
        }
        writer.join().unwrap();
        assert!(registry.contains(COUNTER));
    }
}
