//! Composes rendered tables into complete Go source files

use log::debug;

use crate::{
	config::GenerationConfig,
	go_repo::table_to_go_repo,
	go_types::table_to_go_types,
	sql_tree::*,
};

/// Renders a node of the tree as a complete Go source file
pub trait ConvertToGo {
	fn as_go_string(&self, config: &GenerationConfig) -> String;
}

impl ConvertToGo for FullDb {
	/// All types of every table first, then every repository
	fn as_go_string(&self, config: &GenerationConfig) -> String {
		let types: String = self
			.iter()
			.map(|table| {
				debug!("rendering types of `{}`", table.name);
				table_to_go_types(table, config)
			})
			.collect();
		let repos: String = self
			.iter()
			.map(|table| {
				debug!("rendering repository of `{}`", table.name);
				table_to_go_repo(table)
			})
			.collect();
		let uses_time = self.iter().any(TableSchema::uses_time);
		compose(config.package_name(), uses_time, &types, &repos)
	}
}

impl ConvertToGo for TableSchema {
	/// A file holding only this table's types and repository
	fn as_go_string(&self, config: &GenerationConfig) -> String {
		debug!("rendering `{}` on its own", self.name);
		compose(
			config.package_name(),
			self.uses_time(),
			&table_to_go_types(self, config),
			&table_to_go_repo(self),
		)
	}
}

/// Package clause, `time` import when a field has that type, types, then repositories
pub fn compose(package_name: &str, uses_time: bool, types: &str, repos: &str) -> String {
	let import = if uses_time {
		"import \"time\"\n\n"
	} else {
		""
	};
	format!("package {}\n\n{}{}{}", package_name, import, types, repos)
}
