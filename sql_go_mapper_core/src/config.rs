//! Options controlling a single generation run

use crate::error::{Error, Result};

pub const DEFAULT_TAG_KEY: &str = "orm";
pub const DEFAULT_PACKAGE_NAME: &str = "model";

/// Immutable settings for one run of [`generate`](crate::generate)
///
/// Every toggle defaults to `false` and every optional value to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationConfig {
	/// Run struct names through the identifier transformer instead of only uppercasing their first letter
	pub struct_name_to_camel: bool,
	/// Lowercase the column name before it is used as a tag value
	pub tag_to_lowercase: bool,
	/// Camel case the value of the `json` tag
	pub json_tag_to_camel: bool,
	/// Lowercase everything but the first letter of each identifier segment
	pub uppercase_first_letter_only: bool,
	/// Set the persistence tag to `-` when the letter starting the field name is already uppercase in the column name
	pub suppress_tag_if_uppercase: bool,
	/// Emit one unit of output per table
	pub one_struct_per_file: bool,
	/// Table name prefix stripped from struct names
	pub prefix: Option<String>,
	/// Key of the persistence tag, `orm` when unset
	pub tag_key: Option<String>,
	/// Go package of the generated code, `model` when unset
	pub package_name: Option<String>,
	/// Add a `json` tag next to the persistence tag
	pub enable_json_tag: bool,
	/// Map date and time columns to `string` rather than `time.Time`
	pub date_to_time_disabled: bool,
	/// Name of a method returning the table name, not generated when unset
	pub real_name_method: Option<String>,
}

impl GenerationConfig {
	pub fn tag_key(&self) -> &str {
		non_empty(&self.tag_key).unwrap_or(DEFAULT_TAG_KEY)
	}

	pub fn package_name(&self) -> &str {
		non_empty(&self.package_name).unwrap_or(DEFAULT_PACKAGE_NAME)
	}

	/// The configured prefix, an empty prefix counts as none
	pub fn prefix(&self) -> Option<&str> {
		non_empty(&self.prefix)
	}

	pub fn real_name_method(&self) -> Option<&str> {
		non_empty(&self.real_name_method)
	}

	/// Checks that every configured value can be placed in Go source as is
	pub fn validate(&self) -> Result<()> {
		let tag_key = self.tag_key();
		if tag_key
			.chars()
			.any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '`' | ':'))
		{
			return Err(Error::Configuration(format!(
				"tag key `{}` may not contain spaces, quotes, backticks or colons",
				tag_key
			)));
		}

		let package = self.package_name();
		if !is_go_identifier(package) {
			return Err(Error::Configuration(format!(
				"package name `{}` is not a valid Go identifier",
				package
			)));
		}

		if let Some(method) = self.real_name_method() {
			if !is_exported_identifier(method) {
				return Err(Error::Configuration(format!(
					"real name method `{}` must be an exported Go identifier",
					method
				)));
			}
		}

		Ok(())
	}
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|v| !v.is_empty())
}

const GO_KEYWORDS: &[&str] = &[
	"break",
	"case",
	"chan",
	"const",
	"continue",
	"default",
	"defer",
	"else",
	"fallthrough",
	"for",
	"func",
	"go",
	"goto",
	"if",
	"import",
	"interface",
	"map",
	"package",
	"range",
	"return",
	"select",
	"struct",
	"switch",
	"type",
	"var",
];

fn is_go_identifier(name: &str) -> bool {
	if GO_KEYWORDS.contains(&name) {
		return false;
	}
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_alphabetic() || first == '_' => {
			chars.all(|c| c.is_alphanumeric() || c == '_')
		},
		_ => false,
	}
}

/// Starts with an uppercase letter followed only by letters, digits and underscores
pub(crate) fn is_exported_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_uppercase() => chars.all(|c| c.is_alphanumeric() || c == '_'),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = GenerationConfig::default();
		assert_eq!(config.tag_key(), "orm");
		assert_eq!(config.package_name(), "model");
		assert_eq!(config.prefix(), None);
		assert_eq!(config.real_name_method(), None);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn empty_strings_fall_back_to_defaults() {
		let config = GenerationConfig {
			tag_key: Some(String::new()),
			package_name: Some(String::new()),
			prefix: Some(String::new()),
			..Default::default()
		};
		assert_eq!(config.tag_key(), "orm");
		assert_eq!(config.package_name(), "model");
		assert_eq!(config.prefix(), None);
	}

	#[test]
	fn rejects_unusable_values() {
		let bad_tag = GenerationConfig {
			tag_key: Some("db key".to_owned()),
			..Default::default()
		};
		assert!(matches!(bad_tag.validate(), Err(Error::Configuration(_))));

		let bad_package = GenerationConfig {
			package_name: Some("my-models".to_owned()),
			..Default::default()
		};
		assert!(matches!(bad_package.validate(), Err(Error::Configuration(_))));

		for keyword in &["type", "func", "package", "import", "range"] {
			let keyword_package = GenerationConfig {
				package_name: Some(keyword.to_string()),
				..Default::default()
			};
			assert!(
				matches!(keyword_package.validate(), Err(Error::Configuration(_))),
				"{}",
				keyword
			);
		}

		let bad_method = GenerationConfig {
			real_name_method: Some("tableName".to_owned()),
			..Default::default()
		};
		assert!(matches!(bad_method.validate(), Err(Error::Configuration(_))));

		let good = GenerationConfig {
			tag_key: Some("db".to_owned()),
			package_name: Some("types".to_owned()),
			real_name_method: Some("TableName".to_owned()),
			..Default::default()
		};
		assert!(good.validate().is_ok());
	}
}
