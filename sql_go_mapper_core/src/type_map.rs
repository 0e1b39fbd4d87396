//! MySQL column types and the Go types they are mapped to

use std::{collections::HashMap, fmt};

use crate::{
	config::GenerationConfig,
	error::{Error, Result},
};

/// The Go type a column is represented with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoType {
	Int64,
	Bool,
	String,
	Float64,
	Time,
}

impl GoType {
	pub fn as_str(self) -> &'static str {
		match self {
			GoType::Int64 => "int64",
			GoType::Bool => "bool",
			GoType::String => "string",
			GoType::Float64 => "float64",
			GoType::Time => TIME_TYPE,
		}
	}
}

impl fmt::Display for GoType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Go spelling of [`GoType::Time`], needs the `time` import
pub const TIME_TYPE: &str = "time.Time";

const MYSQL_TO_GO: &[(&str, GoType)] = &[
	("int", GoType::Int64),
	("integer", GoType::Int64),
	("tinyint", GoType::Int64),
	("smallint", GoType::Int64),
	("mediumint", GoType::Int64),
	("bigint", GoType::Int64),
	("int unsigned", GoType::Int64),
	("integer unsigned", GoType::Int64),
	("tinyint unsigned", GoType::Int64),
	("smallint unsigned", GoType::Int64),
	("mediumint unsigned", GoType::Int64),
	("bigint unsigned", GoType::Int64),
	("bit", GoType::Int64),
	("bool", GoType::Bool),
	("boolean", GoType::Bool),
	("enum", GoType::String),
	("set", GoType::String),
	("varchar", GoType::String),
	("char", GoType::String),
	("tinytext", GoType::String),
	("mediumtext", GoType::String),
	("text", GoType::String),
	("longtext", GoType::String),
	("json", GoType::String),
	("blob", GoType::String),
	("tinyblob", GoType::String),
	("mediumblob", GoType::String),
	("longblob", GoType::String),
	("binary", GoType::String),
	("varbinary", GoType::String),
	("date", GoType::Time),
	("datetime", GoType::Time),
	("timestamp", GoType::Time),
	("time", GoType::Time),
	("float", GoType::Float64),
	("double", GoType::Float64),
	("decimal", GoType::Float64),
];

/// Lookup table built for one run
///
/// The temporal override is applied when the map is created, so two runs with different settings
/// never observe each other's table.
#[derive(Debug, Clone)]
pub struct TypeMap {
	types: HashMap<&'static str, GoType>,
}

impl TypeMap {
	pub fn new(config: &GenerationConfig) -> Self {
		let types = MYSQL_TO_GO
			.iter()
			.map(|&(name, typ)| {
				if typ == GoType::Time && config.date_to_time_disabled {
					(name, GoType::String)
				} else {
					(name, typ)
				}
			})
			.collect();
		TypeMap { types }
	}

	/// Looks up a source type, ignoring case and surrounding whitespace
	pub fn get(&self, source_type: &str) -> Option<GoType> {
		let normalized = source_type.trim().to_ascii_lowercase();
		self.types.get(normalized.as_str()).copied()
	}
}

/// Maps a single source type, failing for types without a Go counterpart
pub fn map_type(source_type: &str, config: &GenerationConfig) -> Result<GoType> {
	TypeMap::new(config)
		.get(source_type)
		.ok_or_else(|| Error::UnsupportedColumnType {
			column: None,
			source_type: source_type.to_owned(),
		})
}
