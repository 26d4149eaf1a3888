mod csv;
mod errors;
mod types;

pub use csv::{ACTIONS_COLUMN_KEY, export_file_name, render_csv, write_csv, write_csv_to};
pub use errors::ExportError;
pub use types::ColumnDescriptor;
