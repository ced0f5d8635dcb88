use ucss::{RawValue, UcssError, VarStore, VarValue, create_theme, define_vars};

#[test]
fn tokens_render_var_references() {
    let group = define_vars(vec![
        ("primary".into(), RawValue::from("#336699")),
        ("gutterWidth".into(), RawValue::from(12)),
    ])
    .unwrap();

    let primary = group.get("primary").unwrap();
    assert!(primary.name().starts_with("--primary-"));
    assert_eq!(primary.reference(), format!("var({})", primary.name()));

    // camelCase keys become kebab-case custom property names.
    let gutter = group.get("gutterWidth").unwrap();
    assert!(gutter.name().starts_with("--gutter-width-"));
}

#[test]
fn themes_override_only_declared_tokens() {
    let group = define_vars(vec![
        ("primary".into(), RawValue::from("red")),
        ("secondary".into(), RawValue::from("blue")),
    ])
    .unwrap();

    let theme = create_theme(&group, vec![("primary".into(), RawValue::from("green"))]).unwrap();
    assert_eq!(theme.group_id(), group.id());

    let primary_name = group.get("primary").unwrap().name().to_string();
    let secondary_name = group.get("secondary").unwrap().name().to_string();
    assert!(theme.override_of(&primary_name).is_some());
    assert!(theme.override_of(&secondary_name).is_none());

    let bad = create_theme(&group, vec![("tertiary".into(), RawValue::from("x"))]);
    assert!(matches!(bad, Err(UcssError::UnknownToken(_))));
}

#[test]
fn store_registration_round_trips_defaults() {
    let group = define_vars(vec![("accent".into(), RawValue::from("hotpink"))]).unwrap();
    let mut store = VarStore::new();
    store.register(&group).unwrap();

    let name = group.get("accent").unwrap().name().to_string();
    assert_eq!(store.default_of(&name), Some(&VarValue::Static("hotpink".into())));
    assert_eq!(store.default_of("--nope"), None);
}

#[test]
fn distinct_themes_have_distinct_identities() {
    let group = define_vars(vec![("primary".into(), RawValue::from("red"))]).unwrap();
    let a = create_theme(&group, vec![("primary".into(), RawValue::from("green"))]).unwrap();
    let b = create_theme(&group, vec![("primary".into(), RawValue::from("blue"))]).unwrap();
    let a_again = create_theme(&group, vec![("primary".into(), RawValue::from("green"))]).unwrap();

    assert_ne!(a.key(), b.key());
    assert_eq!(a.key(), a_again.key());
}
