//! Output formats for query ASTs
//!
//! - `query_string` - canonical query syntax, also available through `Display`
//! - `treeviz` - an indented tree for humans and snapshot tests
//! - `json` - the serde representation

pub mod json;
pub mod query_string;
pub mod treeviz;

pub use json::{to_json, to_json_value};
pub use query_string::to_query_string;
pub use treeviz::to_treeviz_str;
