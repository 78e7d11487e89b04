//! Wire-level types shared between the engine client and its consumers.

pub mod protocol;
