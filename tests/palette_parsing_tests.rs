use colormix_rs::palettes::palette::{Color, Palette, PaletteFormat};

const TEXT_FORMATS: [PaletteFormat; 3] = [PaletteFormat::Gpl, PaletteFormat::Hex, PaletteFormat::Json];

const GPL_PALETTE: &str = "GIMP Palette
Name: test
Columns: 0
# a comment
 30  61  84\tfirst
226 237 245\tlast
";

const HEX_PALETTE: &str = "1E3D54
# a comment
0xE2EDF5
";

const JSON_PALETTE: &str = r#"[{"r":30,"g":61,"b":84},{"r":226,"g":237,"b":245}]"#;

fn sample_palette_string(format: PaletteFormat) -> &'static str {
	match format {
		PaletteFormat::Gpl => GPL_PALETTE,
		PaletteFormat::Hex => HEX_PALETTE,
		PaletteFormat::Json => JSON_PALETTE,
	}
}

#[test]
fn palette_parsing_from_string() {
	for palette_type in TEXT_FORMATS {
		println!("Testing {} from String…", palette_type.to_string().to_uppercase());

		let pal = Palette::load_from_string(sample_palette_string(palette_type), palette_type).unwrap();

		assert_eq!(pal.len(), 2);
		assert_eq!(pal.colors[0].hex().unwrap(), "#1E3D54");
		assert_eq!(pal.colors[1].hex().unwrap(), "#E2EDF5");

		if palette_type == PaletteFormat::Gpl {
			// only the .gpl format carries names
			let names = pal.colors.iter().cloned().map(|c| c.name).collect::<Vec<Option<String>>>();
			assert_eq!(names, vec![Some("first".to_string()), Some("last".to_string())]);
		}

		if palette_type == PaletteFormat::Hex {
			assert_eq!(pal, Palette::from(vec![0x1E3D54_u32, 0xE2EDF5]));
		}
	}
}

#[test]
fn palette_parsing_gpl_ignores_alpha() {
	let pal = Palette::from_gpl_string("GIMP Palette\n30 61 84 128 translucent\n").unwrap();

	assert_eq!(pal.len(), 1);
	assert_eq!(pal.colors[0], Color::new("translucent", 30, 61, 84));
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 1, msg: \"Invalid magic sequence\" }")]
fn palette_parsing_gpl_without_magic() {
	println!("Testing GPL without magic…");
	Palette::from_gpl_string("30 61 84 first\n").unwrap();
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 4, msg: \"Malformed line\" }")]
fn palette_parsing_broken_gpl() {
	println!("Testing broken GPL…");
	let broken = "GIMP Palette\nName: broken\nColumns: 0\n255 0 zero red\n";
	Palette::from_gpl_string(broken).unwrap();
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 2, msg: \"Invalid red value\" }")]
fn palette_parsing_gpl_channel_overflow() {
	println!("Testing GPL with out-of-range channel…");
	Palette::from_gpl_string("GIMP Palette\n999 0 0 red\n").unwrap();
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 1, msg: \"Not a hexadecimal color value\" }")]
fn palette_parsing_broken_hex() {
	println!("Testing broken HEX…");
	Palette::from_hex_string("not a color\n").unwrap();
}

#[test]
#[should_panic(expected = "InvalidJson")]
fn palette_parsing_broken_json() {
	println!("Testing broken JSON…");
	Palette::from_json_string(r#"["not a record"]"#).unwrap();
}

#[test]
#[should_panic(expected = "InvalidJson")]
fn palette_parsing_json_channel_overflow() {
	println!("Testing JSON with out-of-range channel…");
	Palette::from_json_string(r#"[{"r":300,"g":0,"b":0}]"#).unwrap();
}

#[test]
fn palette_parsing_json_accepts_partial_records() {
	let pal = Palette::from_json_string(r#"[{"name":"ghost"},{"r":1,"g":2,"b":3}]"#).unwrap();

	assert_eq!(pal.len(), 2);
	assert!(!pal.colors[0].is_complete());
	assert_eq!(pal.colors[0].name.as_deref(), Some("ghost"));
	assert_eq!(pal.colors[1], Color::unnamed(1, 2, 3));
}

#[test]
fn palette_json_round_trip() {
	let pal = Palette::from(vec![
		Color::new("red", 255, 0, 0),
		Color::unnamed(1, 2, 3),
		Color { name: Some("ghost".to_string()), r: None, g: None, b: None },
	]);

	let json = pal.to_json_string().unwrap();
	assert_eq!(json, r#"[{"name":"red","r":255,"g":0,"b":0},{"r":1,"g":2,"b":3},{"name":"ghost"}]"#);

	assert_eq!(Palette::from_json_string(json).unwrap(), pal);
}

#[test]
fn palette_parsing_enforces_the_color_cap() {
	let too_many = "0000FF\n".repeat(257);

	match Palette::from_hex_string(too_many) {
		Err(e) => assert_eq!(format!("{e}"), "The palette contains more than 256 colors"),
		Ok(_) => panic!("expected the color cap to trigger"),
	}
}
