pub mod gesture;
pub mod point;
pub mod score;

pub use gesture::{Frame, GestureState};
pub use point::Point;
pub use score::{AccuracyBand, ShapeKind, ShapeScore};
