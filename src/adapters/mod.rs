pub mod emitters;
pub mod parsers;
