use crate::view::ViewId;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Activation, indicator or animation target is not a declared view
    UnknownView(String),

    /// Activation requested while another activation is running
    ReentrantActivation {
        requested: String,
        in_progress: ViewId,
    },

    UnknownIndicator(usize),

    // Startup validation
    InvalidViewId(String),
    DuplicateView(ViewId),
    DuplicateAnimation(ViewId),
    MissingIndicator(ViewId),
    NoViews,

    // Site definitions
    SiteReadFailure(std::io::Error),
    SiteParseFailure(serde_json::Error),
}

impl From<std::io::Error> for Error {
    fn from(val: std::io::Error) -> Self {
        Self::SiteReadFailure(val)
    }
}

impl From<serde_json::Error> for Error {
    fn from(val: serde_json::Error) -> Self {
        Self::SiteParseFailure(val)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
