//! XML navigation helpers over `roxmltree` documents.

mod utils;

pub use utils::{deep_text, field_text, find_child, find_children, get_tag_name, normalize_whitespace};
