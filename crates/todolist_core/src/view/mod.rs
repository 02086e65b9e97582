//! View layer: rendering contract plus input translation.
//!
//! The concrete display technology sits behind `PresentationSurface`; the
//! `View` turns raw input into bus requests.

pub mod input;
pub mod surface;
