//! Calendar generation for the Career Compass speaker series.
//!
//! This crate turns a list of speaker records into:
//! - an "add to calendar" link on every speaker's session (`link`)
//! - one `.ics` file per speaker plus a series `.ics` file (`ics`)
//! - an augmented copy of the speaker list (`writer`)
//!
//! Construction (`datetime`, `link`, `ics`, `generate`) is pure; only
//! `loader` and `writer` touch the filesystem.

pub mod datetime;
pub mod error;
pub mod event;
pub mod generate;
pub mod ics;
pub mod link;
pub mod loader;
pub mod schedule;
pub mod speaker;
pub mod writer;

pub use error::{CompassError, CompassResult};
pub use generate::{Generated, SeriesOptions, generate};
pub use speaker::{Session, Speaker};
