pub mod result_table;
pub mod sql_viewer;
pub mod status_line;

pub use result_table::{ResultGrid, ResultTable};
pub use sql_viewer::SqlViewer;
pub use status_line::{StatusLine, StatusTone};
