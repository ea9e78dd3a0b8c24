pub mod api;
pub mod results_view;
pub mod state;
pub mod view;

pub use results_view::ResultsView;
pub use view::QueryPanel;
