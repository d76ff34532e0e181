#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod analysis;
mod error;
mod history;
mod insight;
mod service;
mod settings;
mod stagnation;
mod statistics;
mod template;
mod unit;
mod workout;

pub use analysis::*;
pub use error::*;
pub use history::*;
pub use insight::*;
pub use service::*;
pub use settings::*;
pub use stagnation::*;
pub use statistics::*;
pub use template::*;
pub use unit::*;
pub use workout::*;
