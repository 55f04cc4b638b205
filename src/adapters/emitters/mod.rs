pub mod json_emitter;
pub mod properties_emitter;
pub mod xml_emitter;

use crate::core::errors::{ResfillError, Result};
use crate::core::traits::emitter::ResourceEmitter;

/// Look up the emitter for a manifest or CLI format name.
pub fn emitter_for(name: &str) -> Result<Box<dyn ResourceEmitter>> {
    match name {
        "xml" => Ok(Box::new(xml_emitter::XmlEmitter)),
        "json" => Ok(Box::new(json_emitter::JsonEmitter)),
        "properties" => Ok(Box::new(properties_emitter::PropertiesEmitter)),
        other => Err(ResfillError::UnknownFormat {
            name: other.to_string(),
        }),
    }
}
