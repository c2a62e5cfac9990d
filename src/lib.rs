pub mod compute;
pub mod error;
pub mod evaluator;
pub mod expr;
pub mod op;
pub mod printer;
pub mod symbols;
pub mod value;
