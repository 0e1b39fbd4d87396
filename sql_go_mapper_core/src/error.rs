//! Failure classification for a generation run

/// Everything that can abort a generation run
///
/// There is no partial output: the first error ends the run and nothing is returned
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A required input is missing or a configuration value can't be used in the output
	#[error("configuration error: {0}")]
	Configuration(String),
	/// The column's database type has no Go equivalent
	#[error("unsupported column type `{source_type}`{}", for_column(.column))]
	UnsupportedColumnType {
		column: Option<String>,
		source_type: String,
	},
	/// A table or column name doesn't turn into an exported Go identifier
	#[error("`{name}` can't be used as a Go identifier: {reason}")]
	InvalidIdentifier {
		name: String,
		reason: &'static str,
	},
	/// Reading column metadata from the database failed
	#[error("failed to read column metadata")]
	MetadataQuery(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
	pub(crate) fn invalid_identifier(name: &str, reason: &'static str) -> Self {
		Error::InvalidIdentifier {
			name: name.to_owned(),
			reason,
		}
	}

	/// Wraps an error raised while querying the metadata catalog
	pub fn metadata_query<E>(err: E) -> Self
	where
		E: Into<Box<dyn std::error::Error + Send + Sync>>,
	{
		Error::MetadataQuery(err.into())
	}
}

fn for_column(column: &Option<String>) -> String {
	match column {
		Some(column) => format!(" for column `{}`", column),
		None => String::new(),
	}
}

pub type Result<T> = std::result::Result<T, Error>;
