pub mod filter;
pub mod parse;
pub mod row;
pub mod status;
