//! Runtime error types

use std::io;
use thiserror::Error;

/// Errors raised by the terminal runtime
#[derive(Error, Debug)]
pub enum TuiError {
    /// A buffer or terminal dimension was zero
    #[error("Invalid dimension {width}x{height}: width and height must be positive")]
    InvalidDimension { width: u16, height: u16 },

    /// A color specifier could not be parsed
    #[error("Invalid color specifier: {0:?}")]
    InvalidColor(String),

    /// No theme preset with this name exists
    #[error("Unknown theme preset: {0}")]
    UnknownTheme(String),

    /// Two entries of the same container share a mnemonic key
    #[error("Duplicate mnemonic '{mnemonic}' in menu '{menu}'")]
    DuplicateMnemonic { menu: String, mnemonic: char },

    /// A key binding string could not be parsed
    #[error("Invalid key binding: {0:?}")]
    InvalidKeyBinding(String),

    /// Pop was requested on an empty screen stack
    #[error("Screen stack is empty")]
    StackEmpty,

    /// Push would exceed the configured stack depth
    #[error("Screen stack depth limit of {0} reached")]
    StackOverflow(usize),

    /// Terminal I/O failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for runtime operations
pub type Result<T> = std::result::Result<T, TuiError>;
