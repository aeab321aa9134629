pub mod table;
pub mod page;
pub mod errors;
pub mod format;

pub use table::{Align, Table};
pub use page::{paginate, PageState, PageView};
pub use errors::{extract_clean_error, DashboardError};
