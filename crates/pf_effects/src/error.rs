pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    FlagStoreReadFailure(std::io::Error),
    FlagStoreWriteFailure(std::io::Error),
    FlagStoreFormat(serde_json::Error),

    /// A required contact form field is empty or malformed
    FormIncomplete(String),
    /// Submit while a previous message is still being sent
    FormBusy,
}

impl From<serde_json::Error> for Error {
    fn from(val: serde_json::Error) -> Self {
        Self::FlagStoreFormat(val)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
