pub mod data;
pub mod util;
pub mod viewport;
