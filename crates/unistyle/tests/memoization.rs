use ucss::{VarStore, Viewport, create, style};
use unistyle::{ResolveCache, ResolveContext, StyleItem, resolve_native};

#[test]
fn cached_results_match_uncached_resolution() {
    let store = VarStore::new();
    let styles = create(
        "m",
        vec![(
            "root".into(),
            style! { "width": "10vw", "color": { "default": "black", ":hover": "red" } },
        )],
    )
    .unwrap();
    let list = vec![StyleItem::from(styles.get("root").unwrap())];
    let ctx = ResolveContext::new(&store).with_viewport(Viewport::new(1000.0, 500.0));

    let mut cache = ResolveCache::new();
    let cached = cache.resolve_native(&list, &ctx);
    let direct = resolve_native(&list, &ctx);
    assert_eq!(*cached, direct);

    // A second call hits the same entry.
    let again = cache.resolve_native(&list, &ctx);
    assert_eq!(cache.len(), 1);
    assert_eq!(*again, direct);
}

#[test]
fn viewport_changes_do_not_key_lists_without_media_or_viewport_units() {
    let store = VarStore::new();
    let list = vec![StyleItem::from(style! { "width": 100, "color": "red" })];

    let mut cache = ResolveCache::new();
    let narrow = ResolveContext::new(&store).with_viewport(Viewport::new(320.0, 640.0));
    let wide = ResolveContext::new(&store).with_viewport(Viewport::new(1920.0, 1080.0));
    let a = cache.resolve_native(&list, &narrow);
    let b = cache.resolve_native(&list, &wide);

    assert_eq!(cache.len(), 1, "viewport must not be part of the key");
    assert_eq!(a, b);
}

#[test]
fn viewport_changes_key_lists_that_consult_it() {
    let store = VarStore::new();
    let list = vec![StyleItem::from(style! { "width": "50vw" })];

    let mut cache = ResolveCache::new();
    let narrow = ResolveContext::new(&store).with_viewport(Viewport::new(320.0, 640.0));
    let wide = ResolveContext::new(&store).with_viewport(Viewport::new(1920.0, 1080.0));
    let a = cache.resolve_native(&list, &narrow);
    let b = cache.resolve_native(&list, &wide);

    assert_eq!(cache.len(), 2);
    assert_eq!(a.num("width"), Some(160.0));
    assert_eq!(b.num("width"), Some(960.0));
}

#[test]
fn interaction_state_keys_only_pseudo_carrying_lists() {
    let store = VarStore::new();
    let plain = vec![StyleItem::from(style! { "width": 100 })];
    let interactive = vec![StyleItem::from(style! {
        "color": { "default": "black", ":hover": "red" },
    })];

    let mut cache = ResolveCache::new();
    let idle = ResolveContext::new(&store);
    let hovered =
        ResolveContext::new(&store).with_interaction(unistyle::Interaction::HOVER);

    cache.resolve_native(&plain, &idle);
    cache.resolve_native(&plain, &hovered);
    assert_eq!(cache.len(), 1);

    cache.resolve_native(&interactive, &idle);
    cache.resolve_native(&interactive, &hovered);
    assert_eq!(cache.len(), 3);
}
