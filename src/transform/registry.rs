//! Explicit transform registry.
//!
//! Consumers (GUI shells, batch runners) look transforms up by name. Each
//! entry carries an explicit filter/tool tag; nothing is inferred from the
//! function itself, and nothing is loaded dynamically.

use alloc::collections::BTreeMap;

use enough::Stop;

use super::{FilterFn, Outcome, ToolFn, TransformArgs};
use crate::bitmap::BitmapBuffer;
use crate::error::BmpError;

/// Whether a transform needs a clicked coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformKind {
    /// Whole-image transform, no click required.
    Filter,
    /// Applied at a user-selected coordinate.
    Tool,
}

/// A registered transform, tagged by capability.
#[derive(Clone, Copy)]
pub enum Transform {
    Filter(FilterFn),
    Tool(ToolFn),
}

impl Transform {
    pub fn kind(&self) -> TransformKind {
        match self {
            Transform::Filter(_) => TransformKind::Filter,
            Transform::Tool(_) => TransformKind::Tool,
        }
    }
}

/// Name → transform mapping, populated by explicit registration.
#[derive(Default)]
pub struct Registry {
    entries: BTreeMap<&'static str, Transform>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the full built-in catalog.
    pub fn with_builtins() -> Self {
        use super::*;

        let mut reg = Self::new();

        // Tools
        reg.register("change_pixel", Transform::Tool(change_pixel));
        reg.register("draw_hline", Transform::Tool(draw_hline));
        reg.register("draw_vline", Transform::Tool(draw_vline));
        reg.register("draw_x", Transform::Tool(draw_x));

        // Drawing filters
        reg.register("mark_middle", Transform::Filter(mark_middle));
        reg.register("draw_centered_hline", Transform::Filter(draw_centered_hline));
        reg.register("draw_centered_vline", Transform::Filter(draw_centered_vline));
        reg.register(
            "draw_bisecting_diagonals",
            Transform::Filter(draw_bisecting_diagonals),
        );
        reg.register("fill", Transform::Filter(fill));

        // Recoloring
        reg.register("make_red", Transform::Filter(make_red));
        reg.register("remove_red", Transform::Filter(remove_red));
        reg.register("remove_green", Transform::Filter(remove_green));
        reg.register("remove_blue", Transform::Filter(remove_blue));
        reg.register("max_red", Transform::Filter(max_red));
        reg.register("max_green", Transform::Filter(max_green));
        reg.register("max_blue", Transform::Filter(max_blue));
        reg.register("only_red", Transform::Filter(only_red));
        reg.register("only_green", Transform::Filter(only_green));
        reg.register("only_blue", Transform::Filter(only_blue));
        reg.register("lighten", Transform::Filter(lighten));
        reg.register("darken", Transform::Filter(darken));
        reg.register("make_gray", Transform::Filter(make_gray));
        reg.register("grayify", Transform::Filter(grayify));
        reg.register("negate", Transform::Filter(negate));
        reg.register("negate_red", Transform::Filter(negate_red));
        reg.register("negate_green", Transform::Filter(negate_green));
        reg.register("negate_blue", Transform::Filter(negate_blue));
        reg.register("swap_gbr", Transform::Filter(swap_gbr));
        reg.register("swap_rgb", Transform::Filter(swap_rgb));
        reg.register("swap_brg", Transform::Filter(swap_brg));
        reg.register("swap_rbg", Transform::Filter(swap_rbg));
        reg.register("swap_grb", Transform::Filter(swap_grb));

        // Tone
        reg.register("redify", Transform::Filter(redify));
        reg.register("greenify", Transform::Filter(greenify));
        reg.register("blueify", Transform::Filter(blueify));
        reg.register("magentify", Transform::Filter(magentify));
        reg.register("make_two_tone", Transform::Filter(make_two_tone));
        reg.register("make_better_two_tone", Transform::Filter(make_better_two_tone));
        reg.register("make_four_tone", Transform::Filter(make_four_tone));
        reg.register("make_n_tone", Transform::Filter(make_n_tone));
        reg.register("saturate", Transform::Filter(saturate));
        reg.register("intensify", Transform::Filter(intensify));

        // Fades
        reg.register("fade_in_vertical", Transform::Filter(fade_in_vertical));
        reg.register("fade_out_vertical", Transform::Filter(fade_out_vertical));
        reg.register("fade_in_horizontal", Transform::Filter(fade_in_horizontal));
        reg.register("fade_out_horizontal", Transform::Filter(fade_out_horizontal));

        // Mirrors
        reg.register(
            "mirror_bottom_vertical",
            Transform::Filter(mirror_bottom_vertical),
        );
        reg.register("mirror_top_vertical", Transform::Filter(mirror_top_vertical));
        reg.register(
            "mirror_left_horizontal",
            Transform::Filter(mirror_left_horizontal),
        );
        reg.register(
            "mirror_right_horizontal",
            Transform::Filter(mirror_right_horizontal),
        );

        // Composition
        reg.register("blend_other", Transform::Filter(blend_other));
        reg.register("chroma_overlay", Transform::Filter(chroma_overlay));
        reg.register("make_line_drawing", Transform::Filter(make_line_drawing));

        // Resampling
        reg.register("shrink", Transform::Filter(shrink));
        reg.register("better_shrink", Transform::Filter(better_shrink));
        reg.register("enlarge", Transform::Filter(enlarge));
        reg.register("better_enlarge", Transform::Filter(better_enlarge));
        reg.register("resize", Transform::Filter(resize));

        reg
    }

    /// Register (or replace) a transform under `name`.
    pub fn register(&mut self, name: &'static str, transform: Transform) {
        self.entries.insert(name, transform);
    }

    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.entries.get(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up and invoke a transform. Tools require `clicked`; filters
    /// ignore it.
    pub fn run(
        &self,
        name: &str,
        image: &mut BitmapBuffer,
        clicked: Option<(i32, i32)>,
        args: &TransformArgs<'_>,
        stop: &dyn Stop,
    ) -> Result<Outcome, BmpError> {
        match self.get(name) {
            None => Err(BmpError::InvalidParameter(alloc::format!(
                "unknown transform: {name}"
            ))),
            Some(Transform::Filter(f)) => f(image, args, stop),
            Some(Transform::Tool(t)) => {
                let clicked = clicked.ok_or_else(|| {
                    BmpError::MissingParameter(alloc::format!(
                        "{name} is a tool and needs a clicked coordinate"
                    ))
                })?;
                t(image, clicked, args, stop)
            }
        }
    }
}
