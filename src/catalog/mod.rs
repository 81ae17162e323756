//! Process-wide read-only tables: roles, company targets and demo profiles

pub mod companies;
pub mod demo;
pub mod roles;
