//! Response bodies
//!
//! Every body has the shape `{"status", "message", ...}`. Successes carry the
//! payload under `details`; failures carry `error: {code, details?}`.

mod envelope;
mod error;

pub use envelope::{ApiResponse, Envelope};
pub use error::{ApiError, ApiResult, ErrorBody, ErrorDetail};
