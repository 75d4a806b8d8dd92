//! `isoyield` is a small toolkit for exploring ISOL isotope yield
//! measurements across target materials and ion sources
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use isoyield_chart as chart;

#[doc(inline)]
pub use isoyield_utils as utils;
