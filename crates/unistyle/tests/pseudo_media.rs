use ucss::{ColorScheme, VarStore, Viewport, style};
use unistyle::{Interaction, NativeValue, ResolveContext, StyleItem, resolve_native};

fn interactive_list() -> Vec<StyleItem> {
    vec![StyleItem::from(style! {
        "backgroundColor": {
            "default": "white",
            ":hover": "blue",
            ":focus": "green",
            ":active": "red",
        },
    })]
}

fn background(store: &VarStore, interaction: Interaction) -> String {
    let ctx = ResolveContext::new(store).with_interaction(interaction);
    match resolve_native(&interactive_list(), &ctx).get("backgroundColor") {
        Some(NativeValue::Str(s)) => s.clone(),
        other => panic!("expected a color string, got {other:?}"),
    }
}

#[test]
fn pseudo_priority_is_active_focus_hover_default() {
    let store = VarStore::new();
    assert_eq!(
        background(&store, Interaction::HOVER | Interaction::FOCUS | Interaction::ACTIVE),
        "rgb(255,0,0)"
    );
    assert_eq!(
        background(&store, Interaction::HOVER | Interaction::FOCUS),
        "rgb(0,128,0)"
    );
    assert_eq!(background(&store, Interaction::HOVER), "rgb(0,0,255)");
    assert_eq!(background(&store, Interaction::empty()), "rgb(255,255,255)");
}

#[test]
fn priority_ignores_declaration_order() {
    let store = VarStore::new();
    // active declared first still beats hover.
    let list = vec![StyleItem::from(style! {
        "color": { "default": "black", ":active": "red", ":hover": "blue" },
    })];
    let ctx = ResolveContext::new(&store)
        .with_interaction(Interaction::HOVER | Interaction::ACTIVE);
    let resolved = resolve_native(&list, &ctx);
    assert_eq!(resolved.get("color"), Some(&NativeValue::Str("rgb(255,0,0)".into())));
}

#[test]
fn media_branches_select_against_the_viewport() {
    let store = VarStore::new();
    let list = vec![StyleItem::from(style! {
        "paddingTop": { "default": 8, "@media (min-width: 600px)": 16 },
    })];

    let narrow = ResolveContext::new(&store).with_viewport(Viewport::new(320.0, 640.0));
    assert_eq!(resolve_native(&list, &narrow).num("paddingTop"), Some(8.0));

    let wide = ResolveContext::new(&store).with_viewport(Viewport::new(1024.0, 768.0));
    assert_eq!(resolve_native(&list, &wide).num("paddingTop"), Some(16.0));
}

#[test]
fn color_scheme_branches() {
    let store = VarStore::new();
    let list = vec![StyleItem::from(style! {
        "color": { "default": "black", "@media (prefers-color-scheme: dark)": "white" },
    })];

    let light = ResolveContext::new(&store);
    assert_eq!(
        resolve_native(&list, &light).get("color"),
        Some(&NativeValue::Str("rgb(0,0,0)".into()))
    );
    let dark = ResolveContext::new(&store).with_color_scheme(ColorScheme::Dark);
    assert_eq!(
        resolve_native(&list, &dark).get("color"),
        Some(&NativeValue::Str("rgb(255,255,255)".into()))
    );
}

#[test]
fn viewport_units_convert_per_axis() {
    let store = VarStore::new();
    let ctx = ResolveContext::new(&store).with_viewport(Viewport::new(1024.0, 768.0));
    let list = vec![StyleItem::from(style! {
        "width": "10vw",
        "height": "10vh",
        "minWidth": "10vmin",
        "maxWidth": "10vmax",
    })];
    let resolved = resolve_native(&list, &ctx);
    assert_eq!(resolved.num("width"), Some(102.4));
    assert_eq!(resolved.num("height"), Some(76.8));
    assert_eq!(resolved.num("minWidth"), Some(76.8));
    assert_eq!(resolved.num("maxWidth"), Some(102.4));
}

#[test]
fn rem_scales_with_the_device_font_scale() {
    let store = VarStore::new();
    let list = vec![StyleItem::from(style! { "marginTop": "2rem" })];

    let normal = ResolveContext::new(&store);
    assert_eq!(resolve_native(&list, &normal).num("marginTop"), Some(32.0));

    let scaled = ResolveContext::new(&store).with_font_scale(1.5);
    assert_eq!(resolve_native(&list, &scaled).num("marginTop"), Some(48.0));
}

#[test]
fn percentages_pass_through_as_strings() {
    let store = VarStore::new();
    let list = vec![StyleItem::from(style! { "width": "50%" })];
    let resolved = resolve_native(&list, &ResolveContext::new(&store));
    assert_eq!(resolved.get("width"), Some(&NativeValue::Str("50%".into())));
}

#[test]
fn malformed_shorthand_is_omitted_not_fatal() {
    let store = VarStore::new();
    let list = vec![StyleItem::from(style! {
        "margin": "0 auto",
        "color": "red",
    })];
    let resolved = resolve_native(&list, &ResolveContext::new(&store));
    assert_eq!(resolved.get("margin"), None);
    // The rest of the rule still resolves.
    assert_eq!(resolved.get("color"), Some(&NativeValue::Str("rgb(255,0,0)".into())));
}
