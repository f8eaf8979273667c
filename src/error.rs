// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// The background queue task is gone; commands can no longer be delivered.
    RuntimeClosed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RuntimeClosed => write!(f, "Toast runtime is not running"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
