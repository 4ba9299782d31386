#![allow(unused_imports)]
pub mod calendar_helpers;

pub use calendar_helpers::*;
