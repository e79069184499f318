// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_proto::{ProtoError, ProtoErrorKind};
use serde::Serialize;
use thiserror::Error;
use tokio::time::error::Elapsed;

#[derive(Debug, Clone, Error, Serialize)]
pub enum Error {
    #[error("request timed out")]
    Timeout,
    #[error("invalid domain name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
    #[error("nameserver responded with {response_code}")]
    BadResponseCode { response_code: String },
    #[error("protocol error: {reason}")]
    ProtoError { reason: String },
    #[error("io error: {reason}")]
    IoError { reason: String },
}

impl From<ProtoError> for Error {
    fn from(error: ProtoError) -> Self {
        match error.kind() {
            ProtoErrorKind::Timeout => Error::Timeout,
            _ => Error::ProtoError {
                reason: error.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::TimedOut => Error::Timeout,
            _ => Error::IoError {
                reason: error.to_string(),
            },
        }
    }
}

impl From<Elapsed> for Error {
    fn from(_: Elapsed) -> Self {
        Error::Timeout
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn io_timeout_is_timeout() {
        let error: Error = std::io::Error::new(std::io::ErrorKind::TimedOut, "i/o timeout").into();

        assert_that(&matches!(error, Error::Timeout)).is_true();
    }

    #[test]
    fn io_error_keeps_reason() {
        let error: Error = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused").into();

        assert_that(&error.to_string()).is_equal_to("io error: connection refused".to_string());
    }
}
