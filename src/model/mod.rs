//! Data model types for window measurement.

mod eighths;
mod opening;
mod transom;
mod window;
mod window_type;

pub(crate) use eighths::reduce;
pub use eighths::Eighths;
pub use opening::{Corners, DimensionInput, FinalSize, OpeningReadings};
pub use transom::{Transom, TransomShape};
pub use window::{Job, JobStatus, MeasuredWindow, SpecFields, WindowRecord, WindowStatus};
pub use window_type::{MeasureShape, WindowType};
