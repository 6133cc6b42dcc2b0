pub mod frame_rate;
pub mod screen_to_plane_coords;
