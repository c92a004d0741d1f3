use serde::{Deserialize, Serialize};

use super::Point;

/// Discrete hand gesture reported by the gesture classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureState {
    /// Index finger extended, drawing
    Draw,
    /// Hand visible but not drawing
    Idle,
    /// Open palm, used by the host UI for menus
    OpenPalm,
    /// Closed fist
    Fist,
    #[default]
    None,
}

impl GestureState {
    pub fn is_draw(&self) -> bool {
        matches!(self, GestureState::Draw)
    }
}

/// Everything the session needs from one camera frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Tracked index fingertip, `None` when tracking is lost
    #[serde(default)]
    pub fingertip: Option<Point>,
    #[serde(default)]
    pub gesture: GestureState,
}

impl Frame {
    pub fn new(fingertip: Option<Point>, gesture: GestureState) -> Self {
        Self { fingertip, gesture }
    }

    pub fn drawing(point: Point) -> Self {
        Self::new(Some(point), GestureState::Draw)
    }

    pub fn idle(point: Option<Point>) -> Self {
        Self::new(point, GestureState::Idle)
    }

    pub fn lost() -> Self {
        Self::new(None, GestureState::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_json() {
        let json = r#"[
            {"fingertip": {"x": 1.0, "y": 2.0}, "gesture": "draw"},
            {"fingertip": null, "gesture": "open_palm"},
            {}
        ]"#;
        let frames: Vec<Frame> = serde_json::from_str(json).unwrap();
        assert_eq!(frames[0], Frame::drawing(Point::new(1.0, 2.0)));
        assert_eq!(frames[1].gesture, GestureState::OpenPalm);
        assert_eq!(frames[2], Frame::lost());
    }
}
