use ucss::{VarStore, create, style};
use unistyle::{NativeValue, ResolveContext, StyleItem, resolve_dom, resolve_native};

fn ctx(store: &VarStore) -> ResolveContext<'_> {
    ResolveContext::new(store)
}

#[test]
fn resolution_is_deterministic() {
    let store = VarStore::new();
    let styles = create(
        "m",
        vec![(
            "root".into(),
            style! {
                "color": { "default": "black", ":hover": "red" },
                "marginTop": "2rem",
            },
        )],
    )
    .unwrap();
    let list = vec![
        StyleItem::from(styles.get("root").unwrap()),
        style! { "opacity": 0.5 }.into(),
    ];

    let first = resolve_native(&list, &ctx(&store));
    let second = resolve_native(&list, &ctx(&store));
    assert_eq!(first, second);

    let dom_first = resolve_dom(&list, &ctx(&store));
    let dom_second = resolve_dom(&list, &ctx(&store));
    assert_eq!(dom_first, dom_second);
}

#[test]
fn falsy_entries_are_filtered() {
    let store = VarStore::new();
    let a: StyleItem = style! { "color": "red" }.into();
    let b: StyleItem = style! { "opacity": 0.5 }.into();
    let c: StyleItem = style! { "width": 10 }.into();

    let with_falsy = vec![
        a.clone(),
        StyleItem::None,
        b.clone(),
        StyleItem::from(None::<ucss::RawRule>),
        StyleItem::List(vec![]),
        c.clone(),
    ];
    let without = vec![a, b, c];

    assert_eq!(
        resolve_native(&with_falsy, &ctx(&store)),
        resolve_native(&without, &ctx(&store))
    );
}

#[test]
fn later_declarations_win_per_key() {
    let store = VarStore::new();
    let list = vec![
        StyleItem::from(style! { "backgroundColor": "red", "color": "white" }),
        StyleItem::from(style! { "backgroundColor": "blue" }),
    ];
    let resolved = resolve_native(&list, &ctx(&store));
    assert_eq!(
        resolved.get("backgroundColor"),
        Some(&NativeValue::Str("rgb(0,0,255)".into()))
    );
    // Keys the later style does not redeclare are preserved.
    assert_eq!(
        resolved.get("color"),
        Some(&NativeValue::Str("rgb(255,255,255)".into()))
    );
}

#[test]
fn last_wins_across_compiled_rule_boundaries() {
    let store = VarStore::new();
    let styles = create(
        "m",
        vec![
            ("a".into(), style! { "width": 10, "height": 20 }),
            ("b".into(), style! { "width": 30 }),
        ],
    )
    .unwrap();
    let list = vec![
        StyleItem::from(styles.get("a").unwrap()),
        StyleItem::from(styles.get("b").unwrap()),
    ];
    let resolved = resolve_native(&list, &ctx(&store));
    assert_eq!(resolved.num("width"), Some(30.0));
    assert_eq!(resolved.num("height"), Some(20.0));
}

#[test]
fn null_removes_the_property() {
    let store = VarStore::new();
    let list = vec![
        StyleItem::from(style! { "backgroundColor": "red" }),
        StyleItem::from(style! { "backgroundColor": null }),
    ];
    let resolved = resolve_native(&list, &ctx(&store));
    assert_eq!(resolved.get("backgroundColor"), None);

    let dom = resolve_dom(&list, &ctx(&store));
    assert_eq!(dom.style_value("background-color"), None);
    assert_eq!(dom.class_name, None);
}

#[test]
fn nested_lists_flatten_depth_first() {
    let store = VarStore::new();
    let list = vec![StyleItem::List(vec![
        StyleItem::from(style! { "width": 1 }),
        StyleItem::List(vec![StyleItem::from(style! { "width": 2 })]),
        StyleItem::from(style! { "height": 3 }),
    ])];
    let resolved = resolve_native(&list, &ctx(&store));
    assert_eq!(resolved.num("width"), Some(2.0));
    assert_eq!(resolved.num("height"), Some(3.0));
}
