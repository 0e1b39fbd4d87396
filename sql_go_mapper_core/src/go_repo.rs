//! Functions for generating the MySQL repository of a table
//!
//! Generated repositories embed `*common.BaseMySQLRepository`, which hands out `sqlx` handles through
//! `Slave(ctx)` for reads and `Master()` for writes.

use crate::{sql_tree::*, type_map::GoType};

/// Renders the repository type of a table with its constructor and data access functions
///
/// ```ignore
/// type OrderMySQLRepository struct {
/// 	*common.BaseMySQLRepository
/// }
///
/// func NewOrderMySQLRepository() *OrderMySQLRepository { /* ... */ }
///
/// // nil, nil when no row matches
/// func (repo *OrderMySQLRepository) GetOrder(ctx context.Context, id int64) (po *OrderPO, err error)
/// // an empty slice when no row matches
/// func (repo *OrderMySQLRepository) GetOrders(ctx context.Context, id int64) (pos []*OrderPO, err error)
/// // only generated when there is a column besides `id`
/// func (repo *OrderMySQLRepository) CreateOrder(ctx context.Context, po *OrderPO) error
/// func (repo *OrderMySQLRepository) UpdateOrder(ctx context.Context, po *OrderPO) (updateSuccess bool, err error)
/// ```
pub fn table_to_go_repo(table: &TableSchema) -> String {
	let mut ret = String::new();
	ret += &repo_struct(table);
	ret += &get_one(table);
	ret += &get_list(table);
	if let Some(assignments) = assignment_clause(table) {
		ret += &create(table, &assignments);
		ret += &update(table, &assignments);
	}
	ret
}

/// `` `col` = :col `` for every column but `id`, in ordinal order
///
/// `None` when there is nothing to assign.
pub fn assignment_clause(table: &TableSchema) -> Option<String> {
	let assignments: Vec<_> = table
		.assignment_columns()
		.map(|c| format!("`{0}` = :{0}", c.original_name))
		.collect();
	if assignments.is_empty() {
		None
	} else {
		Some(assignments.join(", "))
	}
}

fn repo_struct(table: &TableSchema) -> String {
	format!(
		"type {0} struct {{\n\t*common.BaseMySQLRepository\n}}\n\nfunc New{0}() *{0} {{\n\treturn &{0}{{\n\t\tcommon.NewBaseMySQLRepository(),\n\t}}\n}}\n\n",
		table.repository_name(),
	)
}

fn get_one(table: &TableSchema) -> String {
	format!(
		r#"func (repo *{repo}) Get{name}(ctx context.Context, id int64) (po *{po}, err error) {{
	po = new({po})
	query := "{query}"
	err = repo.Slave(ctx).GetContext(ctx, po, query, id)
	if err == sql.ErrNoRows {{
		return nil, nil
	}}
	if err != nil {{
		return nil, errors.WithStack(err)
	}}
	return
}}

"#,
		repo = table.repository_name(),
		name = table.struct_name,
		po = table.po_name(),
		query = select_by_id(table),
	)
}

fn get_list(table: &TableSchema) -> String {
	format!(
		r#"func (repo *{repo}) Get{name}s(ctx context.Context, id int64) (pos []*{po}, err error) {{
	pos = []*{po}{{}}
	query := "{query}"
	err = repo.Slave(ctx).SelectContext(ctx, &pos, query, id)
	if err == sql.ErrNoRows {{
		return pos, nil
	}}
	if err != nil {{
		return nil, errors.WithStack(err)
	}}
	return
}}

"#,
		repo = table.repository_name(),
		name = table.struct_name,
		po = table.po_name(),
		query = select_by_id(table),
	)
}

fn create(table: &TableSchema, assignments: &str) -> String {
	let query = format!("INSERT INTO `{}` SET {}", table.name, assignments);
	// LastInsertId is an int64, only an int64 id can take it
	let exec = match table.id_column() {
		Some(id) if id.go_type == GoType::Int64 => format!(
			r#"	ret, err := repo.Master().NamedExecContext(ctx, query, po)
	if err != nil {{
		return errors.WithStack(err)
	}}
	id, err := ret.LastInsertId()
	if err != nil {{
		return errors.WithStack(err)
	}}
	po.{} = id
"#,
			id.identifier
		),
		_ => String::from(
			r#"	if _, err := repo.Master().NamedExecContext(ctx, query, po); err != nil {
		return errors.WithStack(err)
	}
"#,
		),
	};
	format!(
		"func (repo *{repo}) Create{name}(ctx context.Context, po *{po}) error {{\n\tquery := \"{query}\"\n{exec}\treturn nil\n}}\n\n",
		repo = table.repository_name(),
		name = table.struct_name,
		po = table.po_name(),
		query = escape(&query),
		exec = exec,
	)
}

fn update(table: &TableSchema, assignments: &str) -> String {
	let query = format!(
		"UPDATE `{}` SET {} WHERE `{}` = :{}",
		table.name, assignments, ID_COLUMN, ID_COLUMN
	);
	format!(
		r#"func (repo *{repo}) Update{name}(ctx context.Context, po *{po}) (updateSuccess bool, err error) {{
	query := "{query}"
	ret, err := repo.Master().NamedExecContext(ctx, query, po)
	if err != nil {{
		return false, errors.WithStack(err)
	}}
	affectedCount, err := ret.RowsAffected()
	if err != nil {{
		return false, errors.Wrap(err, "get RowsAffected failed")
	}}
	return affectedCount > 0, nil
}}

"#,
		repo = table.repository_name(),
		name = table.struct_name,
		po = table.po_name(),
		query = escape(&query),
	)
}

fn select_by_id(table: &TableSchema) -> String {
	escape(&format!("SELECT * FROM `{}` WHERE `{}` = ?", table.name, ID_COLUMN))
}

/// Makes a query usable inside a Go interpreted string literal
fn escape(query: &str) -> String {
	query.replace('\\', "\\\\").replace('"', "\\\"")
}
