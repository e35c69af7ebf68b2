pub mod arrayqueue;
pub mod queue;
pub mod sorting;
pub mod stackqueue;
