pub mod compute;
pub mod error;
pub mod format;
pub mod math;
pub mod shape;
pub mod solid;

pub use compute::{compute, ComputeArbitrary, ComputeRegular, Report, Request};
pub use error::{ComputeError, GeometryError, ParseFailure, Result};
pub use shape::{ArbitraryPolygon, RegularPolygon, Shape};
pub use solid::Prism;
