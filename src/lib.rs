pub mod ast;
pub mod callable;
pub mod class;
pub mod environment;
pub mod error;
pub mod function;
pub mod interpreter;
pub mod resolver;
pub mod token;
pub mod value;

use log::info;

use crate::ast::Stmt;
use crate::error::Result;
use crate::interpreter::Interpreter;
use crate::resolver::Resolver;

/// Name of the method that acts as a class's constructor.
pub const INITIALIZER: &str = "init";

/// Resolve `statements`, then run them if resolution reported nothing.
///
/// Static errors come back as one [`error::LoxError::Static`] and nothing is
/// executed. A runtime error stops execution at the failing statement; output
/// already printed stays printed.
pub fn run(interpreter: &mut Interpreter, statements: &[Stmt]) -> Result<()> {
    Resolver::new(interpreter).resolve(statements)?;
    info!("Resolution succeeded, executing {} statement(s)", statements.len());
    interpreter.interpret(statements)
}
