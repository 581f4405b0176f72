pub mod either;
pub mod either_iter;
pub mod either_parser;
mod serialize;
