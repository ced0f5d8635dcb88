//! Media query subset: parsing and evaluation.
//!
//! Branch keys in compiled styles may be `@media (...)` queries. Only a
//! fixed feature set is supported:
//!
//! - `min-width`, `max-width`, `min-height`, `max-height`
//! - `orientation: portrait | landscape`
//! - `prefers-color-scheme: light | dark`
//!
//! Conditions combine with `and`. Dimension features accept px/em/rem and
//! the absolute print units, converted to pixels with the standard fixed
//! factors (1in = 96px, 1pt = 96/72px, 1pc = 16px, 1cm = 96/2.54px); this is
//! the one place print units are honored.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, separated_pair, tuple},
};

/// The viewport a resolve call evaluates media queries against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The active color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// One parsed media condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCondition {
    MinWidth(f64),
    MaxWidth(f64),
    MinHeight(f64),
    MaxHeight(f64),
    Orientation(Orientation),
    ColorScheme(ColorScheme),
}

impl MediaCondition {
    fn matches(&self, viewport: Viewport, scheme: ColorScheme) -> bool {
        match *self {
            Self::MinWidth(px) => viewport.width >= px,
            Self::MaxWidth(px) => viewport.width <= px,
            Self::MinHeight(px) => viewport.height >= px,
            Self::MaxHeight(px) => viewport.height <= px,
            Self::Orientation(o) => {
                let actual = if viewport.height >= viewport.width {
                    Orientation::Portrait
                } else {
                    Orientation::Landscape
                };
                actual == o
            }
            Self::ColorScheme(s) => s == scheme,
        }
    }
}

/// A parsed `@media (...)` query.
///
/// Keeps the raw source text so the DOM target can emit the query verbatim
/// into generated CSS.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQuery {
    raw: String,
    conditions: Vec<MediaCondition>,
}

impl MediaQuery {
    /// Parses a `@media (...)` branch key. Returns `None` when the text is
    /// not a supported query.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        match parse_media_query(trimmed) {
            Ok((rest, conditions)) if rest.trim().is_empty() => Some(Self {
                raw: trimmed.to_string(),
                conditions,
            }),
            _ => None,
        }
    }

    /// True when every condition holds for the given viewport and scheme.
    pub fn matches(&self, viewport: Viewport, scheme: ColorScheme) -> bool {
        self.conditions
            .iter()
            .all(|c| c.matches(viewport, scheme))
    }

    /// The query text without the leading `@media`, e.g.
    /// `(min-width: 600px)`, for CSS emission.
    pub fn condition_text(&self) -> &str {
        self.raw.trim_start_matches("@media").trim_start()
    }

    /// The full raw query text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when the query consults the viewport (anything but a pure
    /// `prefers-color-scheme` query does).
    pub fn consults_viewport(&self) -> bool {
        self.conditions
            .iter()
            .any(|c| !matches!(c, MediaCondition::ColorScheme(_)))
    }

    /// True when the query consults the color scheme.
    pub fn consults_scheme(&self) -> bool {
        self.conditions
            .iter()
            .any(|c| matches!(c, MediaCondition::ColorScheme(_)))
    }
}

fn parse_number(input: &str) -> IResult<&str, f64> {
    let (input, text) = recognize(tuple((
        opt(char('-')),
        take_while1(|c: char| c.is_ascii_digit()),
        opt(pair(char('.'), take_while1(|c: char| c.is_ascii_digit()))),
    )))(input)?;
    match text.parse::<f64>() {
        Ok(v) => Ok((input, v)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Float,
        ))),
    }
}

/// Dimension value inside a media feature, converted to pixels.
fn parse_media_length(input: &str) -> IResult<&str, f64> {
    let (input, value) = parse_number(input)?;
    let (input, factor) = alt((
        map(tag("px"), |_| 1.0),
        map(tag("rem"), |_| 16.0),
        map(tag("em"), |_| 16.0),
        map(tag("cm"), |_| 96.0 / 2.54),
        map(tag("mm"), |_| 96.0 / 25.4),
        map(tag("in"), |_| 96.0),
        map(tag("pt"), |_| 96.0 / 72.0),
        map(tag("pc"), |_| 16.0),
    ))(input)?;
    Ok((input, value * factor))
}

fn parse_dimension_condition(input: &str) -> IResult<&str, MediaCondition> {
    let (input, (name, px)) = separated_pair(
        alt((
            tag("min-width"),
            tag("max-width"),
            tag("min-height"),
            tag("max-height"),
        )),
        tuple((multispace0, char(':'), multispace0)),
        parse_media_length,
    )(input)?;
    let cond = match name {
        "min-width" => MediaCondition::MinWidth(px),
        "max-width" => MediaCondition::MaxWidth(px),
        "min-height" => MediaCondition::MinHeight(px),
        _ => MediaCondition::MaxHeight(px),
    };
    Ok((input, cond))
}

fn parse_keyword_condition(input: &str) -> IResult<&str, MediaCondition> {
    alt((
        map(
            separated_pair(
                tag("orientation"),
                tuple((multispace0, char(':'), multispace0)),
                alt((tag("portrait"), tag("landscape"))),
            ),
            |(_, v)| {
                MediaCondition::Orientation(if v == "portrait" {
                    Orientation::Portrait
                } else {
                    Orientation::Landscape
                })
            },
        ),
        map(
            separated_pair(
                tag("prefers-color-scheme"),
                tuple((multispace0, char(':'), multispace0)),
                alt((tag("light"), tag("dark"))),
            ),
            |(_, v)| {
                MediaCondition::ColorScheme(if v == "light" {
                    ColorScheme::Light
                } else {
                    ColorScheme::Dark
                })
            },
        ),
    ))(input)
}

fn parse_condition(input: &str) -> IResult<&str, MediaCondition> {
    delimited(
        pair(char('('), multispace0),
        alt((parse_dimension_condition, parse_keyword_condition)),
        pair(multispace0, char(')')),
    )(input)
}

fn parse_media_query(input: &str) -> IResult<&str, Vec<MediaCondition>> {
    preceded(
        tuple((tag("@media"), multispace1)),
        separated_list1(
            tuple((multispace1, tag("and"), multispace1)),
            parse_condition,
        ),
    )(input)
}
