mod ast;
mod parser;

pub use ast::{ReplayEvent, ScriptStep};
pub use parser::{Parser, parse_script};
