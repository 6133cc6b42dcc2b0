use crate::core::data::complex::Complex;
use crate::core::data::screen_size::ScreenSize;
use crate::core::data::viewport_bounds::ViewportBounds;

/// Maps a cursor position (origin top-left, Y down) onto the plane (Y up).
///
/// Positions outside the window are extrapolated rather than rejected, since a
/// drag may leave the window while the button is still held.
#[must_use]
pub fn screen_to_plane_coords(
    cursor_x: f64,
    cursor_y: f64,
    screen: ScreenSize,
    bounds: ViewportBounds,
) -> Complex {
    let real = bounds.min_x() + cursor_x / f64::from(screen.width()) * bounds.width();
    let imag = bounds.max_y() - cursor_y / f64::from(screen.height()) * bounds.height();

    Complex { real, imag }
}
