//! A simple tree of a MySQL database's tables and columns

use indexmap::IndexMap;

use crate::type_map::GoType;

/// Name of the auto generated primary key column
pub const ID_COLUMN: &str = "id";

/// One row of `information_schema.COLUMNS`, exactly as the database reported it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumn {
	pub column_name: String,
	pub data_type: String,
	pub nullable: bool,
	pub table_name: String,
	pub comment: String,
}

impl RawColumn {
	pub fn new(table_name: &str, column_name: &str, data_type: &str) -> Self {
		RawColumn {
			column_name: column_name.to_owned(),
			data_type: data_type.to_owned(),
			nullable: false,
			table_name: table_name.to_owned(),
			comment: String::new(),
		}
	}

	pub fn nullable(mut self, nullable: bool) -> Self {
		self.nullable = nullable;
		self
	}

	pub fn comment(mut self, comment: &str) -> Self {
		self.comment = comment.to_owned();
		self
	}
}

/// The root of the tree, all tables in the order they were first seen
#[derive(Debug, Clone, Default)]
pub struct FullDb {
	pub tables: IndexMap<String, TableSchema>,
}

impl FullDb {
	pub fn get(&self, table_name: &str) -> Option<&TableSchema> {
		self.tables.get(table_name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &TableSchema> {
		self.tables.values()
	}

	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}
}

/// A table and its columns in ordinal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
	/// Name used in SQL statements
	pub name: String,
	/// Name with the configured prefix removed
	pub real_name: String,
	/// Base name of every generated Go type for this table
	pub struct_name: String,
	pub columns: Vec<Column>,
}

impl TableSchema {
	pub fn po_name(&self) -> String {
		format!("{}PO", self.struct_name)
	}

	pub fn repository_name(&self) -> String {
		format!("{}MySQLRepository", self.struct_name)
	}

	pub fn id_column(&self) -> Option<&Column> {
		self.columns.iter().find(|c| c.is_id())
	}

	/// Whether any field of the generated types is a `time.Time`
	pub fn uses_time(&self) -> bool {
		self.columns.iter().any(|c| c.go_type == GoType::Time)
	}

	/// Columns written by inserts and updates, every column but `id`
	pub fn assignment_columns(&self) -> impl Iterator<Item = &Column> {
		self.columns.iter().filter(|c| !c.is_id())
	}
}

/// A column with everything the generator derives from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
	pub original_name: String,
	pub table_name: String,
	pub source_type: String,
	/// Reported by the database, doesn't change the generated type
	pub nullable: bool,
	pub comment: String,
	pub identifier: String,
	pub go_type: GoType,
	pub tag: String,
}

impl Column {
	pub fn is_id(&self) -> bool {
		self.original_name == ID_COLUMN
	}
}
