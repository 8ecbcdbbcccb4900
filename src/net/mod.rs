//! Networking: REST calls to the membership API.

pub mod api;
