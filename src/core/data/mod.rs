pub mod complex;
pub mod iteration_budget;
pub mod screen_size;
pub mod viewport_bounds;
