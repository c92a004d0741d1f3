pub mod bounds;
pub mod simplify;
pub mod synth;

pub use bounds::{Bounds, path_length};
pub use simplify::{export_epsilon, simplify_stroke};
