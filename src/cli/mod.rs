//! 交互式命令行

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{parse_command, Command, CommandResult, Session};
pub use completer::ShellCompleter;
pub use printer::Printer;
