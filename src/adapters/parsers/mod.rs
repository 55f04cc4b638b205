pub mod properties_parser;
