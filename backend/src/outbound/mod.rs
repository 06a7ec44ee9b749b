//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic; services own the rules
//! and consult these adapters through the driven ports.

pub mod persistence;
