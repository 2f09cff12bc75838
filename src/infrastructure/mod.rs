// Infrastructure implementations for flowsketch.

pub mod parser;

pub use parser::PythonParser;
