//! HTTP access to the timetable website.
//!
//! Everything upstream is reached through [`Fetcher`], which takes a path
//! relative to the site root and hands back the response body as text.
//! [`SiteClient`] talks to the real site; [`MockSite`] serves canned bodies.

mod client;
mod error;
mod mock;

pub use client::{DEFAULT_BASE_URL, Fetcher, SiteClient, SiteConfig};
pub use error::SiteError;
pub use mock::MockSite;
