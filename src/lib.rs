//! # simark
//!
//! A parser and renderer for simark, a lightweight markup language built from brace-delimited
//! elements:
//!
//!     {s|{h|Results}
//!     Measurements are {b|preliminary}.
//!
//!     {table head=1|
//!     Run | Time
//!     1 | 12ms
//!     }}
//!
//! The parser never fails: markup that does not match a known element is kept as text. The
//! renderer produces HTML or plain text with section, list, table and figure numbering.
//!
//! ## Testing
//!
//! Shared test helpers live in the [testing module](simark::testing).

pub mod simark;
