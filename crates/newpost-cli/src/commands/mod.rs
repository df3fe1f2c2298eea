//! Command handlers. Each one turns parsed arguments into core calls.

pub mod new;
