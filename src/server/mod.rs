//! TCP acceptor: one task per accepted connection.

pub mod listener;
