use crate::types::length::{Length, LengthUnit};
use crate::types::transform::Angle;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Parse a floating point or integer number.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse the unit suffix (e.g., px, em, vmin, %).
fn parse_unit_suffix(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        map(tag("vmin"), |_| LengthUnit::Vmin),
        map(tag("vmax"), |_| LengthUnit::Vmax),
        map(tag("vw"), |_| LengthUnit::Vw),
        map(tag("vh"), |_| LengthUnit::Vh),
        map(tag("rem"), |_| LengthUnit::Rem),
        map(tag("em"), |_| LengthUnit::Em),
        map(tag("px"), |_| LengthUnit::Px),
        map(tag("pt"), |_| LengthUnit::Pt),
        map(tag("pc"), |_| LengthUnit::Pc),
        map(tag("cm"), |_| LengthUnit::Cm),
        map(tag("mm"), |_| LengthUnit::Mm),
        map(tag("in"), |_| LengthUnit::In),
        map(char('%'), |_| LengthUnit::Percent),
    ))(input)
}

/// Parse a single length value (e.g., "10px", "50%", "-2em", "0").
///
/// A bare number carries the default unit (device pixels).
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let input = input.trim_start();
    let (input, value) = parse_number(input)?;
    let (input, unit) = opt(parse_unit_suffix)(input)?;

    Ok((
        input,
        Length {
            value,
            unit: unit.unwrap_or_default(),
        },
    ))
}

/// Parse an angle (`45deg`, `0.5rad`). Bare numbers default to degrees.
pub fn parse_angle(input: &str) -> IResult<&str, Angle> {
    let input = input.trim_start();
    let (input, value) = parse_number(input)?;
    let (input, unit) = opt(alt((tag("deg"), tag("rad"))))(input)?;
    let angle = match unit {
        Some("rad") => Angle::rad(value),
        _ => Angle::deg(value),
    };
    Ok((input, angle))
}
