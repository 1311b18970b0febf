//! Sources of training portal credentials

pub mod credentials;
