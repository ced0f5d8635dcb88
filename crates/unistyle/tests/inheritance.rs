use ucss::{VarStore, style};
use unistyle::{
    InheritedStyle, NativeValue, ResolveContext, StyleItem, resolve_inherited, resolve_native,
};

#[test]
fn em_font_sizes_chain_top_down() {
    let store = VarStore::new();
    let ctx = ResolveContext::new(&store);

    // Root: 2em of the 16px base resolves to 32px.
    let root_list = vec![StyleItem::from(style! { "fontSize": "2em" })];
    let (root_style, root_snapshot) =
        resolve_inherited(&root_list, &InheritedStyle::root(1.0), &ctx);
    assert_eq!(root_style.num("fontSize"), Some(32.0));
    assert_eq!(root_snapshot.font_size(), 32.0);

    // Child declares no fontSize; its em lineHeight uses the parent's
    // resolved 32px, not the 16px base.
    let child_list = vec![StyleItem::from(style! { "lineHeight": "1.5em" })];
    let (child_style, _) = resolve_inherited(&child_list, &root_snapshot, &ctx);
    assert_eq!(child_style.num("lineHeight"), Some(48.0));
    // The inherited font size itself is part of the child's style.
    assert_eq!(child_style.num("fontSize"), Some(32.0));
}

#[test]
fn unitless_line_height_multiplies_the_own_font_size() {
    let store = VarStore::new();
    let ctx = ResolveContext::new(&store);

    let list = vec![StyleItem::from(style! { "fontSize": "20px", "lineHeight": 1.5 })];
    let (style, _) = resolve_inherited(&list, &InheritedStyle::root(1.0), &ctx);
    assert_eq!(style.num("lineHeight"), Some(30.0));
}

#[test]
fn inherit_keyword_forces_the_ancestor_value() {
    let store = VarStore::new();
    let ctx = ResolveContext::new(&store);

    let (_, parent_snapshot) = resolve_inherited(
        &[StyleItem::from(style! { "fontWeight": 400 })],
        &InheritedStyle::root(1.0),
        &ctx,
    );

    // A heading's built-in bold weight, overridden back by `inherit`.
    let heading_defaults: StyleItem = style! { "fontWeight": 700 }.into();
    let author_override: StyleItem = style! { "fontWeight": "inherit" }.into();
    let (style, _) = resolve_inherited(
        &[heading_defaults, author_override],
        &parent_snapshot,
        &ctx,
    );
    assert_eq!(style.num("fontWeight"), Some(400.0));
}

#[test]
fn inherited_values_flow_until_overridden() {
    let store = VarStore::new();
    let ctx = ResolveContext::new(&store);

    let (_, parent) = resolve_inherited(
        &[StyleItem::from(style! { "color": "red", "letterSpacing": 2 })],
        &InheritedStyle::root(1.0),
        &ctx,
    );

    // A child with no declarations inherits the allow-listed values.
    let (plain, _) = resolve_inherited(&[], &parent, &ctx);
    assert_eq!(plain.get("color"), Some(&NativeValue::Str("rgb(255,0,0)".into())));
    assert_eq!(plain.num("letterSpacing"), Some(2.0));

    // A sibling overriding color keeps the rest.
    let (overridden, _) = resolve_inherited(
        &[StyleItem::from(style! { "color": "blue" })],
        &parent,
        &ctx,
    );
    assert_eq!(
        overridden.get("color"),
        Some(&NativeValue::Str("rgb(0,0,255)".into()))
    );
    assert_eq!(overridden.num("letterSpacing"), Some(2.0));
}

#[test]
fn non_inheritable_properties_do_not_flow() {
    let store = VarStore::new();
    let ctx = ResolveContext::new(&store);

    let (_, parent) = resolve_inherited(
        &[StyleItem::from(style! { "backgroundColor": "red", "color": "blue" })],
        &InheritedStyle::root(1.0),
        &ctx,
    );
    let (child, _) = resolve_inherited(&[], &parent, &ctx);
    assert_eq!(child.get("backgroundColor"), None);
    assert!(child.get("color").is_some());
}

#[test]
fn content_box_fixup_adds_border_and_padding() {
    let store = VarStore::new();
    let ctx = ResolveContext::new(&store);
    let list = vec![StyleItem::from(style! {
        "boxSizing": "content-box",
        "borderWidth": 2,
        "padding": 10,
        "width": 100,
    })];
    let resolved = resolve_native(&list, &ctx);
    // 100 + 2*2 border + 10*2 padding.
    assert_eq!(resolved.num("width"), Some(124.0));
    // The sizing keyword is consumed, not forwarded to the native API.
    assert_eq!(resolved.get("boxSizing"), None);
}

#[test]
fn content_box_fixup_uses_per_side_values() {
    let store = VarStore::new();
    let ctx = ResolveContext::new(&store);
    let list = vec![StyleItem::from(style! {
        "boxSizing": "content-box",
        "borderLeftWidth": 1,
        "borderRightWidth": 3,
        "paddingLeft": 4,
        "height": 50,
        "paddingTop": 6,
        "width": 100,
    })];
    let resolved = resolve_native(&list, &ctx);
    assert_eq!(resolved.num("width"), Some(108.0));
    assert_eq!(resolved.num("height"), Some(56.0));
}

#[test]
fn content_box_skips_non_numeric_dimensions() {
    let store = VarStore::new();
    let ctx = ResolveContext::new(&store);
    let list = vec![StyleItem::from(style! {
        "boxSizing": "content-box",
        "padding": 10,
        "width": "auto",
        "height": "50%",
    })];
    let resolved = resolve_native(&list, &ctx);
    assert_eq!(resolved.get("width"), Some(&NativeValue::Str("auto".into())));
    assert_eq!(resolved.get("height"), Some(&NativeValue::Str("50%".into())));
}
