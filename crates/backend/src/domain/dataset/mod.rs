pub mod loader;
pub mod options;
pub mod table;

pub use loader::{load_table, LoadError};
pub use options::FilterOptions;
pub use table::{Row, Table};
