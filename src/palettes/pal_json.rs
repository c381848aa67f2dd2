use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::palette::{Color, Palette, PaletteError};

impl Palette {
	/// Parses a palette from a JSON array of color records,
	/// e.g. `[{"name":"red","r":255,"g":0,"b":0}]`. Records may omit any field.
	pub fn from_json_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let colors: Vec<Color> = serde_json::from_str(&s)
			.map_err(|e| PaletteError::InvalidJson { msg: e.to_string() })?;

		if colors.len() > MAX_PALETTE_COLORS {
			return Err(PaletteError::TooManyColors);
		}

		Ok(Palette { colors })
	}

	/// Serializes the palette into the JSON record format.
	/// Absent fields are omitted from the output.
	pub fn to_json_string(&self) -> Result<String, PaletteError> {
		serde_json::to_string(&self.colors)
			.map_err(|e| PaletteError::InvalidJson { msg: e.to_string() })
	}
}
