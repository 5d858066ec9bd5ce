// Writing assistant: canned suggestion templates, no model calls.

pub mod handlers;
pub mod suggestions;
