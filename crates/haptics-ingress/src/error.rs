/// A datagram that does not decode into three doubles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("datagram is {actual} bytes, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
}

/// Errors raised by the ingress socket.
///
/// Every variant is fatal to the visualizer; an empty socket is reported
/// through [`PollReport`](crate::PollReport), not here.
#[derive(Debug, thiserror::Error)]
pub enum IngressError {
    #[error("{context}: {source}")]
    Setup {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no usable address for {0}")]
    NoAddress(String),

    #[error("socket receive failed: {0}")]
    Socket(#[from] std::io::Error),

    #[error("malformed datagram: {0}")]
    Malformed(#[from] DecodeError),
}

impl IngressError {
    pub(crate) fn setup(context: impl Into<String>, source: std::io::Error) -> Self {
        IngressError::Setup {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display() {
        let err = DecodeError::WrongLength {
            expected: 24,
            actual: 7,
        };
        assert_eq!(err.to_string(), "datagram is 7 bytes, expected 24");
    }

    #[test]
    fn setup_error_keeps_context() {
        let err = IngressError::setup(
            "failed to bind 0.0.0.0:5556",
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        );
        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:5556: address in use");
    }

    #[test]
    fn malformed_wraps_decode_error() {
        let err: IngressError = DecodeError::WrongLength {
            expected: 24,
            actual: 30,
        }
        .into();
        assert!(matches!(err, IngressError::Malformed(_)));
        assert!(err.to_string().contains("30 bytes"));
    }
}
