//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Models here are plain data; pages wrap them in `RwSignal`s.

pub mod password;
