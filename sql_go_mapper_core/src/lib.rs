#![forbid(unsafe_code)]
//! Turns the column metadata of a MySQL database into Go source code
//!
//! For every table the generator writes a tagged persistence object (`XPO`), a plain entity (`X`),
//! conversions between the two and a repository with get, list, create and update functions.
//!
//! ```
//! use sql_go_mapper_core::{generate, GenerationConfig, RawColumn};
//!
//! let rows = vec![
//! 	RawColumn::new("t_order", "id", "bigint"),
//! 	RawColumn::new("t_order", "user_name", "varchar"),
//! ];
//! let config = GenerationConfig {
//! 	prefix: Some("t_".to_owned()),
//! 	..Default::default()
//! };
//! let source = generate(&rows, &config).unwrap();
//! assert!(source.starts_with("package model\n"));
//! assert!(source.contains("type OrderPO struct {"));
//! ```
//!
//! Generation is a pure function of its input: reading the catalog, writing files and running
//! `gofmt` are left to the caller.

pub mod config;
pub mod db_model;
pub mod error;
pub mod go_repo;
pub mod go_types;
pub mod identifier;
pub mod model;
pub mod sql_tree;
pub mod tag;
pub mod type_map;

pub use config::GenerationConfig;
pub use db_model::ConvertToGo;
pub use error::{Error, Result};
pub use sql_tree::{Column, FullDb, RawColumn, TableSchema};
pub use type_map::GoType;

/// Name of the single unit produced when tables share one file
pub const SINGLE_FILE_NAME: &str = "model";

/// One unit of generated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
	/// Struct name of the table it holds, or [`SINGLE_FILE_NAME`]
	pub name: String,
	pub source: String,
}

/// Generates the Go source for every table in `rows`
///
/// `rows` must be ordered by table and then by ordinal position. Either the whole text is
/// returned or nothing is.
pub fn generate(rows: &[RawColumn], config: &GenerationConfig) -> Result<String> {
	config.validate()?;
	let full_db = model::build(rows, config)?;
	Ok(full_db.as_go_string(config))
}

/// Like [`generate`] but honours [`GenerationConfig::one_struct_per_file`]
///
/// Without it the result is a single [`GeneratedFile`] holding exactly what [`generate`] returns.
pub fn generate_files(rows: &[RawColumn], config: &GenerationConfig) -> Result<Vec<GeneratedFile>> {
	config.validate()?;
	let full_db = model::build(rows, config)?;
	if config.one_struct_per_file {
		Ok(full_db
			.iter()
			.map(|table| GeneratedFile {
				name: table.struct_name.clone(),
				source: table.as_go_string(config),
			})
			.collect())
	} else {
		Ok(vec![GeneratedFile {
			name: SINGLE_FILE_NAME.to_owned(),
			source: full_db.as_go_string(config),
		}])
	}
}
