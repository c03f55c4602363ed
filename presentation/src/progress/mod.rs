//! Progress display while an answer is being generated

pub mod reporter;
