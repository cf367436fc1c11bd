//! Platform-agnostic core: locale resolution, section visibility tracking and
//! the capabilities (session storage, intersection observation, location,
//! scroll position) they are built on.

pub mod config;
pub mod contact;
pub mod intersection;
pub mod locale;
pub mod location;
pub mod platform;
pub mod scroll;
pub mod storage;
pub mod subscription;
pub mod visibility;
