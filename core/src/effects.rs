//! Pointer tilt and hero parallax transforms.

/// Element bounds in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Card transform for a pointer at `(x, y)`.
///
/// The pointer's position relative to the card centre maps linearly onto
/// ±`max_degrees / 2` of rotation. A zero-sized card has no centre and gets
/// no transform.
pub fn tilt_transform(rect: Rect, x: f64, y: f64, max_degrees: f64) -> Option<String> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let rot_y = ((x - rect.left) / rect.width - 0.5) * max_degrees;
    let rot_x = ((y - rect.top) / rect.height - 0.5) * -max_degrees;
    Some(format!(
        "translateY(-6px) rotateX({rot_x}deg) rotateY({rot_y}deg) perspective(800px)"
    ))
}

/// Transition applied while a tilted card settles back
pub const TILT_RESET_TRANSITION: &str = ".4s ease";

pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}
