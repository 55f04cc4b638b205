pub mod properties_file;
pub mod resource_binding;
