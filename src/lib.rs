//! # Entrobin
//!
//! `entrobin` converts continuous-valued attributes of a tabular dataset
//! into a small number of ordered categories, choosing bin boundaries by
//! recursive entropy minimization with a minimum-description-length
//! stopping rule.
//!
//! ## Example
//!
//! ```rust
//! use entrobin::discretize::MdlDiscretizer;
//! use entrobin::frame::Dataframe;
//!
//! let mut df = Dataframe::new();
//! df.add_column("hours");
//! df.add_column("passed");
//! let rows = [
//!     ("1", "no"), ("2", "no"), ("3", "no"),
//!     ("10", "yes"), ("11", "yes"), ("12", "yes"),
//! ];
//! for (hours, passed) in rows {
//!     let row = df.create_instance();
//!     row.add_attribute(hours);
//!     row.add_attribute(passed);
//! }
//!
//! let mut discretizer = MdlDiscretizer::new(0, 1);
//! discretizer.build(df.instances()).unwrap();
//!
//! assert_eq!(discretizer.cut_points(), [6.5]);
//! assert_eq!(discretizer.discretize(df.instance(0)).unwrap(), "Category 0");
//! assert_eq!(discretizer.discretize(df.instance(5)).unwrap(), "Category 1");
//! ```

pub mod cli;
pub mod discretize;
pub mod frame;
pub mod report;
pub mod utils;
