mod error;
mod incident;
mod list;
mod period;
mod policy;
mod session;

pub use error::{Error, Result};
pub use incident::{
    DeleteIncident, Incident, IncidentDraft, IncidentPage, STATUS_ACTIVE, UpdateIncident,
};
pub use list::{ListQuery, PAGE_SIZE};
pub use period::Period;
pub use policy::{AccessPolicy, RoleMatrix};
pub use session::{
    CurrentUser, PERIOD_COOKIE_NAME, ROLE_COOKIE_NAME, SESSION_COOKIE_MAX_AGE_SECS,
    TOKEN_COOKIE_NAME,
};

#[doc(hidden)]
pub use anyhow::anyhow as __anyhow;

/// Build a [`struct@Error`] from a format string, `anyhow!` style.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::__anyhow!($($arg)*))
    };
}
