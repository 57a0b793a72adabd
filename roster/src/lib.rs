//! Single-enterprise personnel register.
//!
//! An interactive command loop lets an operator hire, fire, promote,
//! re-salary, transfer, and list workers. Every mutation triggers a full
//! rewrite of a flat `;`-delimited store file and appends one line to an
//! audit log. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (record codec, menu parsing).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (store files, audit log, config).
//!
//! [`registry`] and [`shell`] coordinate core logic with I/O to implement
//! the operator-facing flow.

pub mod core;
pub mod io;
pub mod logging;
pub mod registry;
pub mod shell;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
