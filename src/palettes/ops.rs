use std::collections::HashSet;

use crate::palettes::palette::{Color, Palette};

/// Mixes two colors by averaging their channels.
/// The result is named after both inputs, e.g. "red-blue".
/// Returns None if either input is absent or missing a channel.
pub fn mix_colors(color1: Option<&Color>, color2: Option<&Color>) -> Option<Color> {
	let c1 = color1?;
	let c2 = color2?;
	let (r1, g1, b1) = c1.channels()?;
	let (r2, g2, b2) = c2.channels()?;

	Some(Color {
		name: Some(format!("{}-{}", c1.label(), c2.label())),
		r: Some(mix_channel(r1, r2)),
		g: Some(mix_channel(g1, g2)),
		b: Some(mix_channel(b1, b2)),
	})
}

/// Scales all channels of a color by `factor`, keeping the name.
/// The continuous product is clamped to the byte range before rounding.
/// Returns None if the color is absent or missing a channel, or if `factor` is NaN.
pub fn adjust_brightness(color: Option<&Color>, factor: f64) -> Option<Color> {
	if factor.is_nan() {
		return None;
	}

	let color = color?;
	let (r, g, b) = color.channels()?;

	Some(Color {
		name: color.name.clone(),
		r: Some(scale_channel(r, factor)),
		g: Some(scale_channel(g, factor)),
		b: Some(scale_channel(b, factor)),
	})
}

/// Returns a new palette with `color` appended at the end.
/// An absent or incomplete color leaves the palette as-is (copied);
/// an absent palette yields a one-color palette.
pub fn add_to_palette(palette: Option<&Palette>, color: Option<&Color>) -> Palette {
	let Some(color) = color.filter(|c| c.is_complete()) else {
		return palette.cloned().unwrap_or_default();
	};

	let mut result = palette.cloned().unwrap_or_default();
	result.push_color(color.clone());
	result
}

/// Returns a new palette without any color named `color_name`.
/// Unnamed colors never match and are always kept.
pub fn remove_from_palette(palette: Option<&Palette>, color_name: &str) -> Palette {
	let Some(palette) = palette else {
		return Palette::default();
	};

	let colors = palette.colors.iter()
		.filter(|c| c.name.as_deref() != Some(color_name))
		.cloned()
		.collect::<Vec<Color>>();

	Palette { colors }
}

/// Merges two palettes into a new one. All of the first palette's colors
/// come first; colors from the second palette are appended unless a color
/// with the same name is already present. First occurrence wins.
pub fn merge_palettes(palette1: Option<&Palette>, palette2: Option<&Palette>) -> Palette {
	let first = palette1.map(|p| p.colors.as_slice()).unwrap_or_default();
	let second = palette2.map(|p| p.colors.as_slice()).unwrap_or_default();

	let mut colors = first.to_vec();
	let mut seen = first.iter().map(|c| c.name.as_deref()).collect::<HashSet<Option<&str>>>();

	for color in second {
		if seen.insert(color.name.as_deref()) {
			colors.push(color.clone());
		}
	}

	Palette { colors }
}

fn mix_channel(a: u8, b: u8) -> u8 {
	((a as f64 + b as f64) / 2.0).round() as u8
}

fn scale_channel(v: u8, factor: f64) -> u8 {
	(v as f64 * factor).clamp(0.0, 255.0).round() as u8
}
