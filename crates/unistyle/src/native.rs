//! Native target assembly.
//!
//! The native renderer takes a flat object of primitive values: numbers for
//! resolved lengths, strings for colors and keywords, and ordered arrays
//! for transforms and shadows. All branch selection, `var()` substitution,
//! and unit conversion happens here, against the resolve context.

use crate::context::{Direction, ResolveContext};
use crate::list::StyleItem;
use crate::resolve::{MergedStyle, finalize_value, merge};
use crate::warn::warn_once;
use ucss::{Length, PropValue, Shadow, TransformOp};

/// A primitive value in the final native style object.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Num(f64),
    Str(String),
    /// Ordered list of single-operation transforms, lengths in pixels.
    Transforms(Vec<TransformOp>),
    Shadows(Vec<Shadow>),
}

/// The flat native style object for one node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeStyle {
    props: Vec<(String, NativeValue)>,
}

impl NativeStyle {
    pub fn get(&self, prop: &str) -> Option<&NativeValue> {
        self.props
            .iter()
            .find(|(name, _)| name == prop)
            .map(|(_, v)| v)
    }

    /// The numeric value of a property, when it resolved to a number.
    pub fn num(&self, prop: &str) -> Option<f64> {
        match self.get(prop) {
            Some(NativeValue::Num(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, NativeValue)> {
        self.props.iter()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub(crate) fn upsert(&mut self, prop: String, value: NativeValue) {
        match self.props.iter_mut().find(|(name, _)| *name == prop) {
            Some(slot) => slot.1 = value,
            None => self.props.push((prop, value)),
        }
    }

    pub(crate) fn remove(&mut self, prop: &str) {
        self.props.retain(|(name, _)| name != prop);
    }
}

/// Resolves a style list for the native target.
pub fn resolve_native(list: &[StyleItem], ctx: &ResolveContext<'_>) -> NativeStyle {
    assemble(&merge(list), ctx)
}

/// Assembles a merged list into the final native object.
pub(crate) fn assemble(merged: &MergedStyle, ctx: &ResolveContext<'_>) -> NativeStyle {
    // First pass: the node's own font size, resolved against the inherited
    // one. Every other em-valued property then resolves against the result.
    let mut font_px: Option<f64> = None;
    if let Some(slot) = merged.get("fontSize") {
        if let Some(value) = finalize_value("fontSize", &slot.value, ctx, &merged.themes) {
            font_px = match value {
                PropValue::Number(n) => Some(n),
                PropValue::Length(l) => length_to_px(&l, ctx, ctx.inherited_font_size),
                PropValue::Keyword(ref k) if k == "inherit" || k == "unset" => {
                    Some(ctx.inherited_font_size)
                }
                _ => None,
            };
        }
    }
    let own_font = font_px.unwrap_or(ctx.inherited_font_size);

    let mut out = NativeStyle::default();
    for (prop, slot) in merged.props() {
        if prop == "fontSize" {
            match font_px {
                Some(px) => out.upsert("fontSize".to_string(), NativeValue::Num(px)),
                // Percentages and other non-pixel sizes pass through like
                // any other length; em conversion uses the inherited size.
                None => {
                    if let Some(value) =
                        finalize_value("fontSize", &slot.value, ctx, &merged.themes)
                    {
                        if let Some(native) =
                            to_native("fontSize", value, ctx, ctx.inherited_font_size)
                        {
                            out.upsert("fontSize".to_string(), native);
                        }
                    }
                }
            }
            continue;
        }
        let Some(value) = finalize_value(prop, &slot.value, ctx, &merged.themes) else {
            continue;
        };
        let Some(native) = to_native(prop, value, ctx, own_font) else {
            continue;
        };
        out.upsert(physical_name(prop, ctx.direction), native);
    }

    apply_content_box(&mut out);
    out.remove("boxSizing");
    out
}

fn length_to_px(l: &Length, ctx: &ResolveContext<'_>, em_base: f64) -> Option<f64> {
    l.to_px(
        ctx.viewport.width,
        ctx.viewport.height,
        ctx.font_scale,
        em_base,
    )
}

fn to_native(
    prop: &str,
    value: PropValue,
    ctx: &ResolveContext<'_>,
    own_font: f64,
) -> Option<NativeValue> {
    match value {
        // Unitless lineHeight is a multiplier of the node's font size.
        PropValue::Number(n) if prop == "lineHeight" => Some(NativeValue::Num(n * own_font)),
        PropValue::Number(n) => Some(NativeValue::Num(n)),
        PropValue::Length(l) => {
            if l.is_percent() {
                return Some(NativeValue::Str(l.to_css()));
            }
            match length_to_px(&l, ctx, own_font) {
                Some(px) => Some(NativeValue::Num(px)),
                None => {
                    warn_once(format!("unsupported unit for `{prop}`: {}", l.to_css()));
                    None
                }
            }
        }
        PropValue::Color(c) => Some(NativeValue::Str(c.to_css())),
        PropValue::Keyword(k) if prop == "textAlign" => {
            // Logical alignment keywords map to physical ones.
            let mapped = match (k.as_str(), ctx.direction) {
                ("start", Direction::Ltr) | ("end", Direction::Rtl) => "left".to_string(),
                ("start", Direction::Rtl) | ("end", Direction::Ltr) => "right".to_string(),
                _ => k,
            };
            Some(NativeValue::Str(mapped))
        }
        PropValue::Keyword(k) => Some(NativeValue::Str(k)),
        PropValue::Str(s) => Some(NativeValue::Str(s)),
        PropValue::Transforms(ops) => Some(NativeValue::Transforms(
            ops.into_iter()
                .map(|op| convert_transform(op, ctx, own_font))
                .collect(),
        )),
        PropValue::Shadows(shadows) => Some(NativeValue::Shadows(
            shadows
                .into_iter()
                .map(|s| convert_shadow(s, ctx, own_font))
                .collect(),
        )),
        PropValue::Var(raw) => {
            warn_once(format!("unresolved custom property in `{prop}: {raw}`"));
            None
        }
        PropValue::Null | PropValue::Unsupported(_) | PropValue::Malformed(_) => None,
    }
}

/// Converts the lengths inside a transform to pixels where they have a
/// pixel value; percentages stay as declared for the layout engine.
fn convert_transform(op: TransformOp, ctx: &ResolveContext<'_>, own_font: f64) -> TransformOp {
    let convert = |l: Length| match length_to_px(&l, ctx, own_font) {
        Some(px) => Length::px(px),
        None => l,
    };
    match op {
        TransformOp::TranslateX(l) => TransformOp::TranslateX(convert(l)),
        TransformOp::TranslateY(l) => TransformOp::TranslateY(convert(l)),
        TransformOp::Perspective(l) => TransformOp::Perspective(convert(l)),
        other => other,
    }
}

fn convert_shadow(shadow: Shadow, ctx: &ResolveContext<'_>, own_font: f64) -> Shadow {
    let convert = |l: Length| match length_to_px(&l, ctx, own_font) {
        Some(px) => Length::px(px),
        None => l,
    };
    Shadow {
        offset_x: convert(shadow.offset_x),
        offset_y: convert(shadow.offset_y),
        blur: convert(shadow.blur),
        spread: convert(shadow.spread),
        ..shadow
    }
}

/// Maps logical property names to physical ones for the writing direction.
fn physical_name(prop: &str, direction: Direction) -> String {
    let (start, end) = match direction {
        Direction::Ltr => ("Left", "Right"),
        Direction::Rtl => ("Right", "Left"),
    };
    let mapped = match prop {
        "marginInlineStart" => format!("margin{start}"),
        "marginInlineEnd" => format!("margin{end}"),
        "paddingInlineStart" => format!("padding{start}"),
        "paddingInlineEnd" => format!("padding{end}"),
        "insetInlineStart" => return lowercase_side(start),
        "insetInlineEnd" => return lowercase_side(end),
        "borderInlineStartWidth" => format!("border{start}Width"),
        "borderInlineEndWidth" => format!("border{end}Width"),
        "borderInlineStartColor" => format!("border{start}Color"),
        "borderInlineEndColor" => format!("border{end}Color"),
        "marginBlockStart" => "marginTop".to_string(),
        "marginBlockEnd" => "marginBottom".to_string(),
        "paddingBlockStart" => "paddingTop".to_string(),
        "paddingBlockEnd" => "paddingBottom".to_string(),
        "insetBlockStart" => "top".to_string(),
        "insetBlockEnd" => "bottom".to_string(),
        _ => prop.to_string(),
    };
    mapped
}

fn lowercase_side(side: &str) -> String {
    side.to_ascii_lowercase()
}

/// `boxSizing: content-box` fixup: explicit numeric box dimensions grow by
/// the resolved border and padding on each applicable axis. Non-numeric
/// dimensions (auto, percentages) skip with a one-time warning.
fn apply_content_box(style: &mut NativeStyle) {
    if style.get("boxSizing") != Some(&NativeValue::Str("content-box".to_string())) {
        return;
    }

    let horizontal = edge_extent(style, "Left") + edge_extent(style, "Right");
    let vertical = edge_extent(style, "Top") + edge_extent(style, "Bottom");

    for (dim, extra) in [
        ("width", horizontal),
        ("minWidth", horizontal),
        ("maxWidth", horizontal),
        ("height", vertical),
        ("minHeight", vertical),
        ("maxHeight", vertical),
    ] {
        match style.get(dim).cloned() {
            Some(NativeValue::Num(n)) => {
                style.upsert(dim.to_string(), NativeValue::Num(n + extra));
            }
            Some(NativeValue::Str(s)) => {
                warn_once(format!(
                    "content-box cannot adjust non-numeric `{dim}: {s}`"
                ));
            }
            _ => {}
        }
    }
}

/// Border width plus padding on one side, counting only numeric values.
fn edge_extent(style: &NativeStyle, side: &str) -> f64 {
    let border = style
        .num(&format!("border{side}Width"))
        .or_else(|| style.num("borderWidth"))
        .unwrap_or(0.0);
    let padding = style
        .num(&format!("padding{side}"))
        .or_else(|| style.num("padding"))
        .unwrap_or(0.0);
    border + padding
}
