pub mod config;
pub mod consts;
pub mod corpus;
pub mod error;
pub mod finger;
pub mod layout;
pub mod layouts;
pub mod optimizer;
pub mod recency;
pub mod resolver;
pub mod scorer;
pub mod stats;
// cmd and reports are modules of the binary crate (main.rs).
