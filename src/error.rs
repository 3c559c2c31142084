//! Startup and server error types.
//! Used by: config, server, main.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid PORT value {0:?}: expected an integer between 1 and 65535")]
    InvalidPort(String),

    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn invalid_port_names_the_value() {
        let err = Error::InvalidPort("abc".into());
        assert_eq!(
            err.to_string(),
            "invalid PORT value \"abc\": expected an integer between 1 and 65535"
        );
    }

    #[test]
    fn bind_error_keeps_port_and_source() {
        let err = Error::Bind {
            port: 3000,
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "failed to bind port 3000: address in use");
        assert!(err.source().is_some());
    }

    #[test]
    fn io_error_converts_to_serve() {
        let err: Error = io::Error::new(io::ErrorKind::Other, "accept failed").into();
        assert!(matches!(err, Error::Serve(_)));
    }
}
