mod name_builder;
mod normalizer;
mod types;

pub use name_builder::{build_standard_name, format_id, slugify, title_of};
pub use normalizer::{normalize_folder, FolderError, RenameError};
pub use types::{FolderReport, RenameOperation};
