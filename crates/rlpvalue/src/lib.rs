//! # rlpvalue
//!
//! A dynamically-typed JSON value for RPC and data-interchange boundaries, where
//! round-trip fidelity matters more than convenience.
//!
//! Numbers are stored as their **original decimal text** and never pass through `f64`
//! or a fixed-width integer, so `1.10000000` or a 30-digit amount is written back out
//! exactly as it was read. The reader accepts exactly one JSON document and rejects
//! trailing data; the typed getters report kind and range problems as errors instead of
//! defaulting to `0` or `""`.
//!
//! ## Quick start
//!
//! ```rust
//! use rlpvalue::Value;
//!
//! let json = r#"[1.10000000,{"key1":"str\u0000","key2":800}]"#;
//! let mut v = Value::new();
//! v.read(json).unwrap();
//!
//! assert_eq!(v[0].get_val_str(), "1.10000000");
//! assert_eq!(v[1]["key2"].get_int().unwrap(), 800);
//! assert!(v[1]["missing"].is_null());
//! assert_eq!(v.write(), json);
//!
//! // Building from scratch: a null value turns into an array on first push.
//! let mut arr = Value::new();
//! arr.push_back(1023i64).unwrap();
//! arr.push_back("zippy").unwrap();
//! assert_eq!(arr.write(), r#"[1023,"zippy"]"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`]: the `Value` sum type, `Kind`, setters, container operations, indexing
//! - [`number`]: `Number`, the validated numeric text, and the JSON number grammar
//! - [`access`]: typed getters (`get_str`, `get_int`, `get_int64`, ...)
//! - [`reader`]: JSON text → `Value`
//! - [`writer`]: `Value` → JSON text, compact or pretty
//! - [`serde_impl`]: serde `Serialize`/`Deserialize` and `serde_json::Value` conversions
//! - [`error`]: `ValueError` and the crate `Result` alias

pub mod access;
pub mod error;
pub mod number;
pub mod reader;
pub mod serde_impl;
pub mod value;
pub mod writer;

pub use error::{Result, ValueError};
pub use number::Number;
pub use reader::{parse, parse_with, ReadOptions, MAX_DEPTH};
pub use value::{Kind, Value};
pub use writer::WriteOptions;
