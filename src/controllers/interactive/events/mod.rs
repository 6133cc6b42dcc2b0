pub mod input_event;

pub use input_event::{InputEvent, Key, MouseButton};
