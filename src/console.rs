//! Terminal output for operators.

use colored::Colorize;

use crate::error::Error;

pub fn startup_line(port: u16) -> String {
    format!("Server is running on port {}", port.to_string().cyan())
}

pub fn print_startup(port: u16) {
    println!("{}", startup_line(port));
}

pub fn error_line(err: &Error) -> String {
    format!("{} {}", "error:".red().bold(), err)
}

/// Fatal errors go to stderr in their display form.
pub fn print_error(err: &Error) {
    eprintln!("{}", error_line(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn startup_line_announces_port() {
        colored::control::set_override(false);
        assert_eq!(startup_line(8080), "Server is running on port 8080");
    }

    #[test]
    fn error_line_uses_display_message() {
        colored::control::set_override(false);
        let err = Error::Bind {
            port: 3917,
            source: io::Error::new(io::ErrorKind::AddrInUse, "Address already in use"),
        };
        assert_eq!(
            error_line(&err),
            "error: failed to bind port 3917: Address already in use"
        );
    }
}
