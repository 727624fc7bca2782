// HealthProfile-cli lib.rs
//
// Interactive console front end. The binary in src/bin wires the shell to
// stdin/stdout; tests drive it with in-memory buffers.

pub mod shell;

pub use shell::{MenuChoice, Shell};
