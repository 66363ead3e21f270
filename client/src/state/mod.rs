//! Presentation state controllers.
//!
//! DESIGN
//! ======
//! Each controller owns exactly one piece of observable state and reaches
//! the browser only through capability traits, so every module here runs
//! unchanged in native unit tests. Browser implementations live in `util`.

pub mod nav;
pub mod reveal;
pub mod roles;
pub mod theme;
