// Library root for the fanassist command-line front end. Exposes the
// modules so integration tests can drive them without spawning the binary.

pub mod app;
pub mod config;
pub mod lineup;
pub mod report;
