mod builtin;

pub use builtin::builtin_questions;
