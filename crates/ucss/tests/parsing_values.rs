use ucss::parser::{parse_length, parse_shadows, parse_transforms, parse_value};
use ucss::{Color, Length, LengthUnit, PropValue, RawValue, TransformOp};

#[test]
fn lengths_cover_the_unit_set() {
    let cases = [
        ("10px", Length::new(10.0, LengthUnit::Px)),
        ("1.5em", Length::new(1.5, LengthUnit::Em)),
        ("2rem", Length::new(2.0, LengthUnit::Rem)),
        ("10vw", Length::new(10.0, LengthUnit::Vw)),
        ("10vh", Length::new(10.0, LengthUnit::Vh)),
        ("5vmin", Length::new(5.0, LengthUnit::Vmin)),
        ("5vmax", Length::new(5.0, LengthUnit::Vmax)),
        ("50%", Length::new(50.0, LengthUnit::Percent)),
        ("-3px", Length::new(-3.0, LengthUnit::Px)),
    ];
    for (input, expected) in cases {
        let (rest, parsed) = parse_length(input).expect(input);
        assert!(rest.is_empty(), "{input} left `{rest}`");
        assert_eq!(parsed, expected, "{input}");
    }
}

#[test]
fn color_properties_parse_all_supported_formats() {
    for input in ["red", "#ff0000", "rgb(255,0,0)", "hsl(0, 100%, 50%)"] {
        assert_eq!(
            parse_value("color", &RawValue::Str(input.into())),
            PropValue::Color(Color::rgb(255, 0, 0)),
            "{input}"
        );
    }
    assert_eq!(
        parse_value("backgroundColor", &RawValue::Str("transparent".into())),
        PropValue::Color(Color::transparent())
    );
    // currentcolor stays a keyword for the inheritance layer.
    assert_eq!(
        parse_value("borderColor", &RawValue::Str("currentcolor".into())),
        PropValue::Keyword("currentcolor".into())
    );
}

#[test]
fn bare_numbers_take_the_property_unit() {
    assert_eq!(
        parse_value("width", &RawValue::Num(100.0)),
        PropValue::Length(Length::px(100.0))
    );
    assert_eq!(parse_value("opacity", &RawValue::Num(0.5)), PropValue::Number(0.5));
    assert_eq!(parse_value("zIndex", &RawValue::Num(-1.0)), PropValue::Number(-1.0));
}

#[test]
fn transform_strings_parse_in_order() {
    let (ops, _) = parse_transforms("translateX(10px) rotate(45deg) scale(2)");
    assert_eq!(ops.len(), 3);
    assert!(matches!(ops[0], TransformOp::TranslateX(_)));
    assert!(matches!(ops[1], TransformOp::Rotate(_)));
    assert!(matches!(ops[2], TransformOp::Scale(s) if s == 2.0));
}

#[test]
fn empty_or_invalid_transform_is_the_identity_list() {
    let value = parse_value("transform", &RawValue::Str("garbage in".into()));
    assert_eq!(value, PropValue::Transforms(vec![]));
}

#[test]
fn shadow_lists_round_trip_to_css() {
    let shadows = parse_shadows("0 2px 4px rgba(0,0,0,0.25), inset 0 0 1px red").unwrap();
    assert_eq!(shadows.len(), 2);
    let css = ucss::types::shadows_to_css(&shadows);
    assert!(css.contains("inset"));
    assert!(css.contains("2px"));
}

#[test]
fn inherit_and_unset_pass_through_every_kind() {
    for prop in ["color", "fontSize", "fontWeight", "display"] {
        assert_eq!(
            parse_value(prop, &RawValue::Str("inherit".into())),
            PropValue::Keyword("inherit".into()),
            "{prop}"
        );
        assert_eq!(
            parse_value(prop, &RawValue::Str("unset".into())),
            PropValue::Keyword("unset".into()),
            "{prop}"
        );
    }
}
