use chrono::NaiveDate;
use fq_parser::*;
use proptest::prelude::*;

#[test]
fn test_url_filter_and_order_together() {
    let predicate =
        compile_filter("(price-ge-10-or-discounted-eq-true)-and-released-lt-'20240101'").unwrap();
    let order = compile_order(Some("Dprice-Aname")).unwrap();

    assert_eq!(
        predicate,
        Predicate::and(
            Predicate::or(
                Predicate::compare("price", CompareOp::Ge, 10_i64),
                Predicate::compare("discounted", CompareOp::Eq, true),
            ),
            Predicate::compare(
                "released",
                CompareOp::Lt,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ),
        )
    );
    assert_eq!(order, vec![OrderBy::desc("price"), OrderBy::asc("name")]);
}

#[test]
fn test_order_examples() {
    assert!(compile_order(None).unwrap().is_empty());
    assert_eq!(
        compile_order(Some("Dtitle-AcolumnCount")).unwrap(),
        vec![
            OrderBy {
                property: "title".to_string(),
                direction: OrderDirection::Desc,
            },
            OrderBy {
                property: "columnCount".to_string(),
                direction: OrderDirection::Asc,
            },
        ]
    );
    assert!(compile_order(Some("Xtitle")).unwrap_err().is_order());
    assert!(compile_order(Some("D")).unwrap_err().is_order());
}

#[test]
fn test_dash_inside_string_literal() {
    let predicate = compile_filter("sku-eq-'AB--12'").unwrap();
    assert_eq!(predicate, Predicate::compare("sku", CompareOp::Eq, "AB-12"));
}

#[test]
fn test_error_kinds_are_disjoint() {
    let lexical = compile_filter("a-eq-'abc").unwrap_err();
    let syntax = compile_filter("a-foo-1").unwrap_err();
    let order = compile_order(Some("Qx")).unwrap_err();

    assert!(lexical.is_lexical() && !lexical.is_syntax() && !lexical.is_order());
    assert!(syntax.is_syntax() && !syntax.is_lexical() && !syntax.is_order());
    assert!(order.is_order() && !order.is_lexical() && !order.is_syntax());
}

#[test]
fn test_parsers_are_independent_across_threads() {
    let inputs = ["a-eq-1", "b-isNull-or-c-isEmpty", "not-d-ltP-e", "f-like-'x'"];
    let expected: Vec<Predicate> = inputs.iter().map(|i| compile_filter(i).unwrap()).collect();

    let handles: Vec<_> = inputs
        .iter()
        .map(|input| {
            let input = input.to_string();
            std::thread::spawn(move || {
                (0..100)
                    .map(|_| compile_filter(&input).unwrap())
                    .last()
                    .unwrap()
            })
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

/// Run `f` on a thread with a small stack, as a host server might
fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}

#[test]
fn test_long_flat_chain_is_rejected() {
    let result = on_small_stack(|| {
        let input = vec!["a-isNull"; 100_000].join("-and-");
        compile_filter(&input).map(|predicate| predicate.to_string())
    });
    let err = result.unwrap_err();
    assert!(err.is_syntax());
    assert!(err.to_string().contains(&format!(
        "a predicate at most {} levels tall",
        DEFAULT_MAX_HEIGHT
    )));
}

#[test]
fn test_tallest_accepted_chain_can_be_walked() {
    let (rendered, properties) = on_small_stack(|| {
        let input = vec!["a-isNull"; DEFAULT_MAX_HEIGHT].join("-or-");
        let predicate = compile_filter(&input).unwrap();
        let rendered = predicate.to_string();
        let properties = predicate.properties().len();
        drop(predicate);
        (rendered, properties)
    });
    assert_eq!(properties, DEFAULT_MAX_HEIGHT);
    assert!(rendered.ends_with(") or a isNull"));

    let one_more = vec!["a-isNull"; DEFAULT_MAX_HEIGHT + 1].join("-or-");
    assert!(compile_filter(&one_more).unwrap_err().is_syntax());
}

fn property_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,6}".prop_filter("keywords are reserved", |name| {
        TokenKind::keyword(name).is_none()
    })
}

fn leaf() -> impl Strategy<Value = Predicate> {
    prop_oneof![
        (property_name(), 0_i64..1000).prop_map(|(p, v)| Predicate::compare(p, CompareOp::Gt, v)),
        (property_name(), property_name())
            .prop_map(|(p, o)| Predicate::property_compare(p, CompareOp::Le, o)),
        (property_name(), 0_i64..10).prop_map(|(p, s)| Predicate::size_compare(p, CompareOp::Ne, s)),
        (property_name(), "[a-z' \\\\-]{0,8}").prop_map(|(p, s)| Predicate::like(p, s, true)),
        property_name().prop_map(Predicate::IsNull),
        property_name().prop_map(Predicate::IsNotEmpty),
    ]
}

fn predicate() -> impl Strategy<Value = Predicate> {
    leaf().prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Predicate::and(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Predicate::or(l, r)),
            inner.prop_map(Predicate::negate),
        ]
    })
}

proptest! {
    #[test]
    fn rendered_predicates_parse_back(tree in predicate()) {
        let parser = FilterParser::with_config(ParserConfig::canonical());
        let text = tree.to_string();
        prop_assert_eq!(parser.parse(&text).unwrap(), tree);
    }

    #[test]
    fn parsing_twice_gives_equal_trees(tree in predicate()) {
        let text = escape(&tree.to_string());
        prop_assert_eq!(compile_filter(&text), compile_filter(&text));
    }

    #[test]
    fn arbitrary_input_never_panics(s in "[a-zA-Z0-9 ()'.\\\\-]{0,40}") {
        let _ = compile_filter(&s);
        let _ = compile_order(Some(s.as_str()));
    }
}
