pub mod decision;

pub use decision::{error_body, DecisionRequest, TraceStep, NETWORK_ERROR_CODE};
