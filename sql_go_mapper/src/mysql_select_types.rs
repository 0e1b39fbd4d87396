//! Select statements into information_schema and corresponding return types
use sql_go_mapper_core::RawColumn;

/// Every column of every table in the connected database
pub const GET_COLUMNS: &str = "SELECT COLUMN_NAME,
	DATA_TYPE,
	IS_NULLABLE,
	TABLE_NAME,
	COLUMN_COMMENT
FROM information_schema.COLUMNS
WHERE table_schema = DATABASE()
ORDER BY TABLE_NAME ASC, ORDINAL_POSITION ASC";

/// The columns of a single table, takes the full table name as its only parameter
pub const GET_TABLE_COLUMNS: &str = "SELECT COLUMN_NAME,
	DATA_TYPE,
	IS_NULLABLE,
	TABLE_NAME,
	COLUMN_COMMENT
FROM information_schema.COLUMNS
WHERE table_schema = DATABASE() AND TABLE_NAME = ?
ORDER BY TABLE_NAME ASC, ORDINAL_POSITION ASC";

/// A row of [`GET_COLUMNS`] or [`GET_TABLE_COLUMNS`], in select order
pub type GetColumns = (String, String, String, String, Option<String>);

pub fn to_raw_column(row: GetColumns) -> RawColumn {
	let (column_name, data_type, is_nullable, table_name, comment) = row;
	RawColumn {
		column_name,
		data_type,
		nullable: is_nullable.eq_ignore_ascii_case("YES"),
		table_name,
		comment: comment.unwrap_or_default(),
	}
}
