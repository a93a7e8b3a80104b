pub mod api;
pub mod review;
pub mod size_grid;
pub mod state;
pub mod view;

pub use view::ConfigureOrderView;
