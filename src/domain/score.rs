use serde::{Deserialize, Serialize};

/// Shape classification assigned to a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    #[serde(rename = "Oval/Ellipse")]
    OvalEllipse,
    Rectangle,
    Polygon,
    #[serde(rename = "Irregular Shape")]
    Irregular,
    Unknown,
}

impl ShapeKind {
    /// Display name shown to the player
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::OvalEllipse => "Oval/Ellipse",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Irregular => "Irregular Shape",
            ShapeKind::Unknown => "Unknown",
        }
    }

    /// Parse a display name back into a ShapeKind
    pub fn from_name(name: &str) -> Option<ShapeKind> {
        match name {
            "Circle" => Some(ShapeKind::Circle),
            "Square" => Some(ShapeKind::Square),
            "Triangle" => Some(ShapeKind::Triangle),
            "Oval/Ellipse" => Some(ShapeKind::OvalEllipse),
            "Rectangle" => Some(ShapeKind::Rectangle),
            "Polygon" => Some(ShapeKind::Polygon),
            "Irregular Shape" => Some(ShapeKind::Irregular),
            "Unknown" => Some(ShapeKind::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one analysis pass over a stroke.
///
/// Produced fresh on every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeScore {
    /// Combined roundness score, 0-100
    pub circularity: u8,
    pub is_circle: bool,
    #[serde(rename = "shapeName")]
    pub shape: ShapeKind,
    pub feedback: String,
}

impl ShapeScore {
    pub fn shape_name(&self) -> &'static str {
        self.shape.name()
    }

    pub fn band(&self) -> AccuracyBand {
        AccuracyBand::from_circularity(self.circularity)
    }
}

/// Color tier used to paint the in-progress stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyBand {
    High,
    Medium,
    Low,
    Poor,
}

impl AccuracyBand {
    pub fn from_circularity(circularity: u8) -> AccuracyBand {
        match circularity {
            80.. => AccuracyBand::High,
            60..=79 => AccuracyBand::Medium,
            40..=59 => AccuracyBand::Low,
            _ => AccuracyBand::Poor,
        }
    }

    /// Stroke color for this band as a CSS hex string
    pub fn color(&self) -> &'static str {
        match self {
            AccuracyBand::High => "#22c55e",
            AccuracyBand::Medium => "#eab308",
            AccuracyBand::Low => "#f97316",
            AccuracyBand::Poor => "#ef4444",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccuracyBand::High => "high",
            AccuracyBand::Medium => "medium",
            AccuracyBand::Low => "low",
            AccuracyBand::Poor => "poor",
        }
    }
}
