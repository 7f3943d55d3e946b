//! Domain types and pure image algorithms for the painting muse server.
//!
//! Nothing in this crate touches the network or the database: it holds the
//! error type, the ControlNet descriptor, the processor configuration
//! records with their range validation, and the processors that run
//! in-process (tile resampling, canny, content shuffle, segmentation
//! colouring).

pub mod control;
pub mod error;
pub mod images;
pub mod painting;
pub mod processors;
pub mod types;
