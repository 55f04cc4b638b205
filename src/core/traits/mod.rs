pub mod emitter;
pub mod parser;
