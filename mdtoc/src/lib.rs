//! Expose the mdtoc command line definition, used by `xtask` to generate
//! shell completions and the manpage, and by the integration tests.
pub mod cli;
