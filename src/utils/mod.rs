mod parse_rle;

pub use parse_rle::parse_rle;
