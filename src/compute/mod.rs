//! Text-in, text-out boundary used by front ends.
//!
//! Front ends forward raw field text here without validating it. Every
//! failure comes back as a [`ComputeError`] whose `Display` is the line to
//! show the user.

mod arbitrary;
mod regular;
mod report;

pub use arbitrary::ComputeArbitrary;
pub use regular::ComputeRegular;
pub use report::Report;

use std::str::FromStr;

use tracing::debug;

use crate::error::{ComputeError, ParseFailure};

/// A single computation request.
#[derive(Debug, Clone, Copy)]
pub enum Request<'a> {
    Regular(ComputeRegular<'a>),
    Arbitrary(ComputeArbitrary<'a>),
}

/// Runs a request, returning either the report or the error to display.
///
/// # Errors
///
/// Returns the [`ComputeError`] of the underlying request.
pub fn compute(request: &Request<'_>) -> Result<Report, ComputeError> {
    let result = match request {
        Request::Regular(req) => req.execute(),
        Request::Arbitrary(req) => req.execute(),
    };
    if let Err(err) = &result {
        debug!(%err, "request rejected");
    }
    result
}

/// Trims and parses one input field.
fn parse_field<T: FromStr>(text: &str, failure: ParseFailure) -> Result<T, ComputeError> {
    text.trim()
        .parse()
        .map_err(|_| ComputeError::Parse(failure))
}
