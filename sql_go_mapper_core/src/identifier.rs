//! Snake case database names to exported Go identifiers

use crate::{
	config::{is_exported_identifier, GenerationConfig},
	error::{Error, Result},
};

/// Converts a column or table name into an exported identifier
///
/// The configured prefix is removed when `name` starts with it, the rest is split on `_` and every
/// non empty segment gets an uppercase first letter. With `uppercase_first_letter_only` the other
/// letters of a segment are lowercased, otherwise they are kept.
///
/// ```
/// # use sql_go_mapper_core::{GenerationConfig, identifier::transform};
/// let config = GenerationConfig::default();
/// assert_eq!(transform("user_name", &config), "UserName");
/// assert_eq!(transform("a__b", &config), "AB");
/// ```
///
/// The result may be empty or start with something other than a letter, use [`exported`] where an
/// identifier is required.
pub fn transform(name: &str, config: &GenerationConfig) -> String {
	camel_case(strip_prefix(name, config), config.uppercase_first_letter_only, true)
}

/// [`transform`] that fails unless the result is an exported Go identifier
pub fn exported(name: &str, config: &GenerationConfig) -> Result<String> {
	let ident = transform(name, config);
	check_exported(name, &ident)?;
	Ok(ident)
}

pub(crate) fn check_exported(name: &str, ident: &str) -> Result<()> {
	if ident.is_empty() {
		Err(Error::invalid_identifier(name, "nothing is left after removing the prefix"))
	} else if !is_exported_identifier(ident) {
		Err(Error::invalid_identifier(
			name,
			"must start with a letter and contain only letters, digits and underscores",
		))
	} else {
		Ok(())
	}
}

/// Removes the configured prefix once, only when `name` starts with it
pub(crate) fn strip_prefix<'a>(name: &'a str, config: &GenerationConfig) -> &'a str {
	match config.prefix() {
		Some(prefix) => name.strip_prefix(prefix).unwrap_or(name),
		None => name,
	}
}

/// Joins the `_` separated segments of `name`, uppercasing the first letter of each
///
/// When `capitalize_first` is false the very first letter is left as it is.
pub(crate) fn camel_case(name: &str, uc_first_only: bool, capitalize_first: bool) -> String {
	let mut text = String::with_capacity(name.len());
	for (i, segment) in name.split('_').filter(|s| !s.is_empty()).enumerate() {
		let mut chars = segment.chars();
		let first = match chars.next() {
			Some(first) => first,
			None => continue,
		};
		if i == 0 && !capitalize_first {
			text.push(first);
		} else {
			text.extend(first.to_uppercase());
		}
		if uc_first_only {
			text.extend(chars.flat_map(char::to_lowercase));
		} else {
			text.push_str(chars.as_str());
		}
	}
	text
}

/// Uppercases only the first character of `name`
pub(crate) fn uppercase_first(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
