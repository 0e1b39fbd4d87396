//! Go struct tags for persisted fields

use crate::{
	config::GenerationConfig,
	identifier::{camel_case, strip_prefix},
};

/// Tag value telling the mapper to skip a field
pub const SKIP: &str = "-";

/// Renders the complete tag literal of one field, backquotes included
///
/// ```
/// # use sql_go_mapper_core::{GenerationConfig, tag::build_tag};
/// let config = GenerationConfig { enable_json_tag: true, json_tag_to_camel: true, ..Default::default() };
/// assert_eq!(build_tag("user_name", &config), r#"`orm:"user_name" json:"userName"`"#);
/// ```
pub fn build_tag(original_name: &str, config: &GenerationConfig) -> String {
	let (value, json_value) = tag_values(original_name, config);
	if config.enable_json_tag {
		format!("`{}:\"{}\" json:\"{}\"`", config.tag_key(), value, json_value)
	} else {
		format!("`{}:\"{}\"`", config.tag_key(), value)
	}
}

/// The persistence tag value and the json tag value for a column
///
/// A suppressed field still keeps its original name as the json value.
fn tag_values(original_name: &str, config: &GenerationConfig) -> (String, String) {
	if config.suppress_tag_if_uppercase && starts_uppercase(original_name, config) {
		return (SKIP.to_owned(), escape(original_name));
	}

	let value = if config.tag_to_lowercase {
		original_name.to_lowercase()
	} else {
		original_name.to_owned()
	};

	let json_value = if config.json_tag_to_camel {
		camel_case(
			strip_prefix(&value, config),
			config.uppercase_first_letter_only,
			false,
		)
	} else {
		value.clone()
	};

	(escape(&value), escape(&json_value))
}

/// Whether the letter that begins the field identifier is uppercase in the column name
fn starts_uppercase(original_name: &str, config: &GenerationConfig) -> bool {
	strip_prefix(original_name, config)
		.chars()
		.find(|&c| c != '_')
		.map_or(false, char::is_uppercase)
}

/// Keeps a tag value inside its quotes
fn escape(value: &str) -> String {
	value.replace('\\', "\\\\").replace('"', "\\\"").replace('`', "")
}
