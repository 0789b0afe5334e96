#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::slice::Iter;

mod analysis;
mod error;
mod exercise;
mod heatmap;
mod muscle;
mod service;
mod settings;
mod suggestion;
mod workout;

pub use analysis::*;
pub use error::*;
pub use exercise::*;
pub use heatmap::*;
pub use muscle::*;
pub use service::*;
pub use settings::*;
pub use suggestion::*;
pub use workout::*;

/// Closed set of values which can be enumerated and named.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
