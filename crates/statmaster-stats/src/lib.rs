//! Classroom statistics for the Stat'Master exercises.
//!
//! This crate computes the indicators taught in middle school, using the
//! conventions of the French curriculum rather than textbook interpolation:
//!
//! - **Indicators**: mean, median, quartiles, range and interquartile range
//! - **Quartiles**: nearest-rank Q1/Q3 (`ceil(n/4)` and `ceil(3n/4)`)
//! - **Frequency tables**: counts per distinct value ("tableau d'effectifs")
//! - **Rounding**: rounding and locale-aware formatting of decimal answers
//! - **Sample parsing**: turning learner input such as `"12,5 ; 7 ; 9"` into numbers
//!
//! # Modules
//!
//! - [`indicators`]: The full set of indicators for a sample
//! - [`quartiles`]: Median and nearest-rank quartiles on sorted data
//! - [`frequency`]: Frequency tables built from raw samples
//! - [`rounding`]: Rounding policies and decimal formatting
//! - [`sample`]: Parsing of numeric samples typed by users
//!
//! # Examples
//!
//! ## Computing indicators
//!
//! ```
//! use statmaster_stats::indicators::Indicators;
//!
//! let stats = Indicators::new([4.0, 8.0, 2.0, 6.0]).unwrap();
//! assert_eq!(stats.median, 5.0);
//! assert_eq!(stats.q1, 2.0);
//! assert_eq!(stats.q3, 6.0);
//! assert_eq!(stats.interquartile_range, 4.0);
//! ```
//!
//! ## Building a frequency table
//!
//! ```
//! use statmaster_stats::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::new([3, 1, 3, 2, 3]);
//! assert_eq!(table.count_of(&3), 3);
//! assert_eq!(table.total(), 5);
//! ```
//!
//! ## Parsing a sample typed by a learner
//!
//! ```
//! use statmaster_stats::sample::parse_sample;
//!
//! let values = parse_sample("12,5 ; 7 9.5").unwrap();
//! assert_eq!(values, vec![12.5, 7.0, 9.5]);
//! ```

pub use self::error::SampleError;

pub mod frequency;
pub mod indicators;
pub mod quartiles;
pub mod rounding;
pub mod sample;

mod error;
