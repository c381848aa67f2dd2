use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

// placeholder spliced into derived names when a color has no name of its own
const NAME_PLACEHOLDER: &str = "undefined";

/// A single color record. Records may arrive partially filled
/// (e.g. deserialized from untrusted JSON), so every field is optional.
/// A record counts as complete once all three channels are present;
/// the name is never required.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub r: Option<u8>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub g: Option<u8>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub b: Option<u8>,
}

impl Color {
	pub fn new<S: Into<String>>(name: S, r: u8, g: u8, b: u8) -> Self {
		Self {
			name: Some(name.into()),
			r: Some(r),
			g: Some(g),
			b: Some(b),
		}
	}

	pub fn unnamed(r: u8, g: u8, b: u8) -> Self {
		Self {
			name: None,
			r: Some(r),
			g: Some(g),
			b: Some(b),
		}
	}

	/// Returns all three channels, or None if any of them is missing.
	pub fn channels(&self) -> Option<(u8, u8, u8)> {
		match (self.r, self.g, self.b) {
			(Some(r), Some(g), Some(b)) => Some((r, g, b)),
			_ => None,
		}
	}

	pub fn is_complete(&self) -> bool {
		self.channels().is_some()
	}

	/// Hexadecimal representation, e.g. "#1E3D54".
	/// Returns None if any channel is missing.
	pub fn hex(&self) -> Option<String> {
		let (r, g, b) = self.channels()?;
		let mut rgb = r as u32;
		rgb = (rgb << 8) | g as u32;
		rgb = (rgb << 8) | b as u32;
		Some(format!("#{rgb:06X}"))
	}

	pub(crate) fn label(&self) -> &str {
		self.name.as_deref().unwrap_or(NAME_PLACEHOLDER)
	}
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self::unnamed(v[0], v[1], v[2])
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self::unnamed(
			((v >> 16) & 0xFF) as u8,
			((v >> 8) & 0xFF) as u8,
			(v & 0xFF) as u8,
		)
	}
}

/// An ordered sequence of color records.
/// Name uniqueness is a post-condition of merging, not a structural invariant.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Palette {
	pub colors: Vec<Color>,
}

impl Palette {
	pub fn push_color(&mut self, c: Color) {
		self.colors.push(c);
	}

	pub fn push_named_color(&mut self, c: Color, name: String) {
		self.colors.push(Color { name: Some(name), ..c });
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn load_from_string<S: Into<String>>(s: S, format: PaletteFormat) -> Result<Palette, PaletteError> {
		match format {
			PaletteFormat::Gpl => Self::from_gpl_string(s.into()),
			PaletteFormat::Hex => Self::from_hex_string(s.into()),
			PaletteFormat::Json => Self::from_json_string(s.into()),
		}
	}
}

impl From<Vec<u32>> for Palette {
	fn from(v: Vec<u32>) -> Self {
		let mut pal = Palette::default();
		for c in v {
			pal.push_color(Color::from(c));
		}
		pal
	}
}

impl From<Vec<Color>> for Palette {
	fn from(v: Vec<Color>) -> Self {
		Palette { colors: v }
	}
}

#[derive(Debug)]
pub enum PaletteError {
	TooManyColors,
	InvalidTextLine { line: usize, msg: String },
	InvalidJson { msg: String },
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::TooManyColors => write!(f, "The palette contains more than 256 colors"),
			PaletteError::InvalidTextLine { line, msg } => write!(f, "Invalid data in line {line}: {msg}"),
			PaletteError::InvalidJson { msg } => write!(f, "Invalid JSON palette: {msg}"),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaletteFormat {
	Gpl, // .gpl
	Hex, // .hex
	Json, // .json
}

impl Display for PaletteFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteFormat::Gpl => write!(f, "gpl"),
			PaletteFormat::Hex => write!(f, "hex"),
			PaletteFormat::Json => write!(f, "json"),
		}
	}
}
