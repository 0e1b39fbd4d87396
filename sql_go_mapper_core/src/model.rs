//! Builds the [`FullDb`] tree from raw catalog rows

use indexmap::map::Entry;
use log::{debug, trace};

use crate::{
	config::GenerationConfig,
	error::{Error, Result},
	identifier::{camel_case, check_exported, transform, uppercase_first},
	sql_tree::*,
	tag::build_tag,
	type_map::TypeMap,
};

/// Groups `rows` by table and derives the name, type and tag of every column
///
/// Tables keep the order in which they first appear in `rows` and columns keep their row order,
/// so rows sorted by table and ordinal position give a deterministic tree.
pub fn build(rows: &[RawColumn], config: &GenerationConfig) -> Result<FullDb> {
	let type_map = TypeMap::new(config);
	let mut full_db = FullDb::default();

	for row in rows {
		let table = match full_db.tables.entry(row.table_name.clone()) {
			Entry::Occupied(entry) => entry.into_mut(),
			Entry::Vacant(entry) => {
				let table = table_schema(&row.table_name, config)?;
				debug!("table `{}` becomes `{}`", table.name, table.struct_name);
				entry.insert(table)
			},
		};
		let column = column(row, &type_map, config)?;
		check_unique(table, &column, config)?;
		table.columns.push(column);
	}

	debug!("built {} tables", full_db.len());
	Ok(full_db)
}

/// Fails when `column` would repeat a field name of `table`, or shadow the real name method
fn check_unique(table: &TableSchema, column: &Column, config: &GenerationConfig) -> Result<()> {
	let qualified = format!("{}.{}", column.table_name, column.original_name);
	if table.columns.iter().any(|c| c.identifier == column.identifier) {
		Err(Error::invalid_identifier(
			&qualified,
			"another column of the table has the same Go name",
		))
	} else if config.real_name_method() == Some(column.identifier.as_str()) {
		Err(Error::invalid_identifier(
			&qualified,
			"its Go name is taken by the real name method",
		))
	} else {
		Ok(())
	}
}

/// An empty table with its names worked out
///
/// The table name has to start with the configured prefix.
pub fn table_schema(name: &str, config: &GenerationConfig) -> Result<TableSchema> {
	let real_name = match config.prefix() {
		Some(prefix) => name.strip_prefix(prefix).ok_or_else(|| {
			Error::invalid_identifier(name, "table name doesn't start with the configured prefix")
		})?,
		None => name,
	};

	let struct_name = if config.struct_name_to_camel {
		camel_case(real_name, config.uppercase_first_letter_only, true)
	} else {
		uppercase_first(real_name)
	};
	check_exported(name, &struct_name)?;

	Ok(TableSchema {
		name: name.to_owned(),
		real_name: real_name.to_owned(),
		struct_name,
		columns: Vec::new(),
	})
}

fn column(row: &RawColumn, type_map: &TypeMap, config: &GenerationConfig) -> Result<Column> {
	let qualified = format!("{}.{}", row.table_name, row.column_name);

	let identifier = transform(&row.column_name, config);
	check_exported(&qualified, &identifier)?;

	let go_type = type_map
		.get(&row.data_type)
		.ok_or_else(|| Error::UnsupportedColumnType {
			column: Some(qualified.clone()),
			source_type: row.data_type.clone(),
		})?;

	let tag = build_tag(&row.column_name, config);
	trace!("column `{}`: {} {} {}", qualified, identifier, go_type, tag);

	Ok(Column {
		original_name: row.column_name.clone(),
		table_name: row.table_name.clone(),
		source_type: row.data_type.clone(),
		nullable: row.nullable,
		comment: row.comment.clone(),
		identifier,
		go_type,
		tag,
	})
}
