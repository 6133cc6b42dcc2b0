use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controllers::interactive::{InputEvent, Key, MouseButton};

/// Pixels of touchpad travel treated as one wheel notch.
const PIXELS_PER_SCROLL_LINE: f64 = 50.0;

/// Maps a winit window event onto the controller's input vocabulary.
/// Key repeats are dropped so a held arrow key adjusts iterations once.
#[must_use]
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Resized(size) => Some(InputEvent::Resize {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMove {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::MouseButton {
            button: map_mouse_button(*button),
            pressed: *state == ElementState::Pressed,
        }),
        WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Scroll {
            delta: scroll_lines(*delta),
        }),
        WindowEvent::KeyboardInput { event, .. } if !event.repeat => match event.physical_key {
            PhysicalKey::Code(code) => Some(InputEvent::Key {
                key: map_key_code(code),
                pressed: event.state == ElementState::Pressed,
            }),
            PhysicalKey::Unidentified(_) => None,
        },
        _ => None,
    }
}

#[must_use]
pub fn map_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

#[must_use]
pub fn map_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyH => Key::H,
        _ => Key::Other,
    }
}

/// Vertical scroll in wheel lines, positive away from the user.
#[must_use]
pub fn scroll_lines(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_SCROLL_LINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    #[test]
    fn line_delta_uses_vertical_component() {
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(3.0, -2.0)), -2.0);
    }

    #[test]
    fn pixel_delta_is_scaled_to_lines() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 100.0));

        assert_eq!(scroll_lines(delta), 2.0);
    }

    #[test]
    fn only_primary_buttons_are_named() {
        assert_eq!(map_mouse_button(winit::event::MouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(winit::event::MouseButton::Right), MouseButton::Right);
        assert_eq!(map_mouse_button(winit::event::MouseButton::Middle), MouseButton::Middle);
        assert_eq!(map_mouse_button(winit::event::MouseButton::Back), MouseButton::Other);
    }

    #[test]
    fn control_keys_are_mapped() {
        assert_eq!(map_key_code(KeyCode::Escape), Key::Escape);
        assert_eq!(map_key_code(KeyCode::ArrowUp), Key::ArrowUp);
        assert_eq!(map_key_code(KeyCode::ArrowDown), Key::ArrowDown);
        assert_eq!(map_key_code(KeyCode::KeyR), Key::R);
        assert_eq!(map_key_code(KeyCode::KeyH), Key::H);
        assert_eq!(map_key_code(KeyCode::Space), Key::Other);
    }

    #[test]
    fn resize_carries_physical_size() {
        let event = WindowEvent::Resized(PhysicalSize::new(800, 600));

        assert_eq!(
            translate_window_event(&event),
            Some(InputEvent::Resize {
                width: 800,
                height: 600
            })
        );
    }

    #[test]
    fn unrelated_events_are_ignored() {
        assert_eq!(translate_window_event(&WindowEvent::Focused(true)), None);
        assert_eq!(translate_window_event(&WindowEvent::CloseRequested), None);
    }
}
