pub mod converter;
pub mod selection;

pub use converter::{convert_to_import_data, script_location};
pub use selection::{ImportSelection, import_selected};
