//! Functions for generating the Go types of a table

use crate::{config::GenerationConfig, sql_tree::*};

/// Renders every type and conversion generated for a table
///
/// ```ignore
/// // the persistence object, one tagged field per column in ordinal order
/// type OrderPO struct {
/// 	Id       int64  `orm:"id"`
/// 	UserName string `orm:"user_name"` // column comment
/// }
///
/// // the entity, same fields without tags
/// type Order struct {
/// 	Id       int64
/// 	UserName string
/// }
///
/// func ToOrder(po *OrderPO) *Order { /* nil in, nil out */ }
///
/// func (entity *Order) ToOrderPO() *OrderPO { /* field by field copy */ }
///
/// // only with a real name method configured
/// func (Order) TableName() string {
/// 	return "order"
/// }
/// ```
pub fn table_to_go_types(table: &TableSchema, config: &GenerationConfig) -> String {
	let mut ret = String::new();
	ret += &po_struct(table);
	ret += &entity_struct(table);
	ret += &po_to_entity(table);
	ret += &entity_to_po(table);
	if let Some(method) = config.real_name_method() {
		ret += &real_name_method(table, method);
	}
	ret
}

/// The tagged struct mirroring the table's columns
pub fn po_struct(table: &TableSchema) -> String {
	let body: String = table
		.columns
		.iter()
		.map(|c| {
			let comment = if c.comment.is_empty() {
				String::new()
			} else {
				format!(" // {}", single_line(&c.comment))
			};
			format!("\t{} {} {}{}\n", c.identifier, c.go_type, c.tag, comment)
		})
		.collect();
	format!("type {} struct {{\n{}}}\n\n", table.po_name(), body)
}

/// The plain struct used by business code
pub fn entity_struct(table: &TableSchema) -> String {
	let body: String = table
		.columns
		.iter()
		.map(|c| format!("\t{} {}\n", c.identifier, c.go_type))
		.collect();
	format!("type {} struct {{\n{}}}\n\n", table.struct_name, body)
}

/// `ToX(po *XPO) *X`, a nil persistence object gives a nil entity
pub fn po_to_entity(table: &TableSchema) -> String {
	format!(
		"func To{0}(po *{1}) *{0} {{\n\tif po == nil {{\n\t\treturn nil\n\t}}\n\n\treturn &{0}{{\n{2}\t}}\n}}\n\n",
		table.struct_name,
		table.po_name(),
		field_copies(table, "po"),
	)
}

/// `(entity *X) ToXPO() *XPO`
pub fn entity_to_po(table: &TableSchema) -> String {
	format!(
		"func (entity *{0}) To{1}() *{1} {{\n\treturn &{1}{{\n{2}\t}}\n}}\n\n",
		table.struct_name,
		table.po_name(),
		field_copies(table, "entity"),
	)
}

/// A method returning the table name without its prefix
pub fn real_name_method(table: &TableSchema, method: &str) -> String {
	format!(
		"func ({}) {}() string {{\n\treturn \"{}\"\n}}\n\n",
		table.struct_name,
		method,
		table.real_name.replace('\\', "\\\\").replace('"', "\\\""),
	)
}

fn field_copies(table: &TableSchema, from: &str) -> String {
	table
		.columns
		.iter()
		.map(|c| format!("\t\t{0}: {1}.{0},\n", c.identifier, from))
		.collect()
}

fn single_line(comment: &str) -> String {
	comment.split_whitespace().collect::<Vec<_>>().join(" ")
}
