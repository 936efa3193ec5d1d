//! Process-level plumbing shared by hubwatch binaries.

pub mod logging;
