//! Go Text Protocol (GTP) front end, with the GoGui rules extensions

pub mod command_parser;
pub mod protocol;
pub mod response_formatter;

pub use command_parser::GtpCommand;
pub use protocol::GtpProtocol;
pub use response_formatter::GtpResponseFormatter;
