pub mod guard;
pub mod recorder;
pub mod traits;

pub use guard::{ColorGuard, RotateGuard, ScaleGuard, StrokeGuard, TranslateGuard};
pub use recorder::{DrawOp, RecordingGraphics};
pub use traits::{CapStyle, Graphics, JoinStyle, Stroke};
