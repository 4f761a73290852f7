use std::io;

/// Everything that can go wrong while scanning or printing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("expected a digit, found byte {byte:#04x}")]
    Malformed { byte: u8 },
    #[error("cannot parse {token:?} as {target}: {reason}")]
    Parse {
        token: String,
        target: &'static str,
        reason: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(err) => err,
            Error::UnexpectedEof => {
                io::Error::new(io::ErrorKind::UnexpectedEof, Error::UnexpectedEof)
            }
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

/// Aborts the current operation. Input is trusted to be complete and
/// well-formed, so there is nothing to recover to.
#[cold]
#[track_caller]
pub(crate) fn fatal(err: Error) -> ! {
    log::error!("fatal: {}", err);
    panic!("{}", err)
}

pub(crate) trait OrFatal<T> {
    fn or_fatal(self) -> T;
}

impl<T> OrFatal<T> for Result<T> {
    #[inline]
    #[track_caller]
    fn or_fatal(self) -> T {
        match self {
            Ok(v) => v,
            Err(err) => fatal(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_maps_to_io_kind() {
        let err: io::Error = Error::UnexpectedEof.into();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let err: io::Error = Error::Malformed { byte: b'x' }.into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::Malformed { byte: b'x' }.to_string(),
            "expected a digit, found byte 0x78"
        );
        let err = Error::Parse {
            token: "abc".to_string(),
            target: "u32",
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot parse \"abc\" as u32: invalid digit found in string"
        );
    }

    #[test]
    #[should_panic(expected = "unexpected end of input")]
    fn or_fatal_panics() {
        let r: Result<u8> = Err(Error::UnexpectedEof);
        r.or_fatal();
    }
}
