use crate::config::Config;
use schemars::schema_for;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Renders the config as YAML with each field preceded by the doc comment
/// schemars extracted from the struct definition.
pub fn render_annotated(config: &Config) -> String {
    let yaml_string = serde_yaml::to_string(config).unwrap_or_default();
    let field_docs = collect_field_docs();

    let mut output = String::new();
    output.push_str("# scrim configuration file\n");
    output.push_str("# Defaults are restored for any field removed from this file\n\n");
    output.push_str(&add_comments_to_yaml(&yaml_string, &field_docs));
    output
}

pub fn serialize_config(config: &Config, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(render_annotated(config).as_bytes())?;
    Ok(())
}

fn collect_field_docs() -> HashMap<String, String> {
    let mut field_docs = HashMap::new();
    let schema = schema_for!(Config);

    if let Some(schema_obj) = schema.as_object() {
        if let Some(properties) = schema_obj.get("properties").and_then(|p| p.as_object()) {
            for (key, prop_value) in properties {
                if let Some(description) = prop_value
                    .as_object()
                    .and_then(|prop| prop.get("description"))
                    .and_then(|d| d.as_str())
                {
                    field_docs.insert(key.clone(), description.to_owned());
                }
            }
        }
    }

    field_docs
}

fn add_comments_to_yaml(yaml: &str, field_docs: &HashMap<String, String>) -> String {
    let mut result = Vec::new();

    for line in yaml.lines() {
        if let Some(colon_pos) = line.find(':') {
            let field_name = line[..colon_pos].trim();
            if let Some(doc) = field_docs.get(field_name) {
                if !result.is_empty() {
                    result.push(String::new());
                }
                result.push(format!("# {doc}"));
            }
        }
        result.push(line.to_owned());
    }

    result.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotated_output_carries_field_docs() {
        let rendered = render_annotated(&Config::default());
        assert!(rendered.contains("# Spinner diameter in pixels"));
        assert!(rendered.contains("spinner_size: 36"));
        assert!(rendered.contains("teardown_delay_ms: 300"));
    }

    #[test]
    fn test_annotated_output_parses_back() {
        let rendered = render_annotated(&Config::default());
        let parsed: Config = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(parsed.spinner_size, Config::default().spinner_size);
    }
}
