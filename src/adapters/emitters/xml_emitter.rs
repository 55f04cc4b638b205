use crate::core::errors::Result;
use crate::core::models::resource_binding::ResourceBinding;
use crate::core::traits::emitter::ResourceEmitter;

/// Emits an Android `res/values` resources file.
///
/// Each binding becomes a non-translatable `<string>` resource, the
/// same shape `resValue("string", name, value)` produces in a Gradle
/// build script.
pub struct XmlEmitter;

/// Escape the five predefined XML entities.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl ResourceEmitter for XmlEmitter {
    fn emit(&self, bindings: &[ResourceBinding]) -> Result<String> {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        out.push_str("<!-- Generated by resfill. Do not edit; do not commit. -->\n");
        out.push_str("<resources>\n");

        for binding in bindings {
            out.push_str(&format!(
                "    <string name=\"{}\" translatable=\"false\">{}</string>\n",
                escape_xml(&binding.name),
                escape_xml(&binding.value)
            ));
        }

        out.push_str("</resources>\n");
        Ok(out)
    }

    fn format_name(&self) -> &str {
        "xml"
    }

    fn default_file_name(&self) -> &str {
        "config_strings.xml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::resource_binding::BindingSource;

    fn binding(name: &str, value: &str) -> ResourceBinding {
        ResourceBinding {
            name: name.to_string(),
            value: value.to_string(),
            source: BindingSource::Key(name.to_string()),
            defaulted: false,
        }
    }

    #[test]
    fn emits_string_resource() {
        let out = XmlEmitter
            .emit(&[binding("GOOGLE_MAPS_API_KEY", "abc123")])
            .unwrap();

        assert!(out.contains(
            "<string name=\"GOOGLE_MAPS_API_KEY\" translatable=\"false\">abc123</string>"
        ));
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(out.ends_with("</resources>\n"));
    }

    #[test]
    fn escapes_xml_entities() {
        let out = XmlEmitter
            .emit(&[binding("KEY", "a<b>&\"c\"'d'")])
            .unwrap();

        assert!(out.contains(">a&lt;b&gt;&amp;&quot;c&quot;&apos;d&apos;<"));
    }

    #[test]
    fn empty_value_emits_empty_element() {
        let out = XmlEmitter.emit(&[binding("MISSING", "")]).unwrap();

        assert!(
            out.contains("<string name=\"MISSING\" translatable=\"false\"></string>")
        );
    }

    #[test]
    fn no_bindings_still_valid_document() {
        let out = XmlEmitter.emit(&[]).unwrap();

        assert!(out.contains("<resources>\n</resources>"));
    }
}
