use regex::{Captures, Regex};

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::palette::{Color, Palette, PaletteError};

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/gpl_file.cpp

const GIMP_MAGIC: &str = "GIMP Palette";

impl Palette {
	pub fn from_gpl_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let re = Regex::new(r"^\s*(?P<r>\d+)\s+(?P<g>\d+)\s+(?P<b>\d+)(?:\s+(?P<a>\d+))?\s+(?P<name>.*)?$").unwrap();

		let mut pal = Palette::default();
		let mut lines = s.lines().enumerate();

		match lines.next() {
			Some((_, magic)) if magic.trim() == GIMP_MAGIC => {}
			_ => {
				return Err(PaletteError::InvalidTextLine {
					line: 1,
					msg: "Invalid magic sequence".to_string(),
				});
			}
		}

		for (i, line) in lines {
			let trimmed_line = line.trim();
			if trimmed_line.starts_with("#") || trimmed_line.is_empty() ||
				trimmed_line.starts_with("Name: ") || trimmed_line.starts_with("Columns: ") {
				continue;
			}

			let groups: Captures = match re.captures(trimmed_line) {
				None => {
					return Err(PaletteError::InvalidTextLine {
						line: i + 1,
						msg: "Malformed line".to_string(),
					});
				}
				Some(captures) => captures
			};

			let mut col = Color::default();
			if let (Some(r), Some(g), Some(b)) = (groups.name("r"), groups.name("g"), groups.name("b")) {
				col.r = Some(r.as_str().parse::<u8>().map_err(|_| PaletteError::InvalidTextLine { line: i + 1, msg: "Invalid red value".to_string() })?);
				col.g = Some(g.as_str().parse::<u8>().map_err(|_| PaletteError::InvalidTextLine { line: i + 1, msg: "Invalid green value".to_string() })?);
				col.b = Some(b.as_str().parse::<u8>().map_err(|_| PaletteError::InvalidTextLine { line: i + 1, msg: "Invalid blue value".to_string() })?);
			} else {
				return Err(PaletteError::InvalidTextLine { line: i + 1, msg: "Malformed line".to_string() });
			}

			if let Some(name) = groups.name("name") {
				pal.push_named_color(col, name.as_str().to_string());
			} else {
				pal.push_color(col);
			}

			if pal.len() > MAX_PALETTE_COLORS {
				return Err(PaletteError::TooManyColors);
			}
		}

		Ok(pal)
	}
}
