//! Measurement entry form and its editing state machine.

mod measurement;

pub use measurement::{Field, FormState, MeasurementForm, Missing, SaveOutcome};
