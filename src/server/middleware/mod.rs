//! Request guards.
//!
//! Authentication is performed inside handlers through `AuthGuard` rather than as a tower
//! layer, so each endpoint states the permissions it needs next to the work it does.

pub mod auth;

#[cfg(test)]
mod test;
