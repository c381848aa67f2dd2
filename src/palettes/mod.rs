pub mod ops;
pub(crate) mod pal_gpl;
pub(crate) mod pal_hex;
pub(crate) mod pal_json;
pub mod palette;

const MAX_PALETTE_COLORS: usize = 256;
