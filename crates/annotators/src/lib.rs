//! Client for the external annotator service that hosts the model-backed
//! ControlNet detectors (HED, lineart, openpose, depth estimators, SAM, ...).

pub mod client;
pub mod request;

pub use client::{AnnotatorClient, AnnotatorError};
pub use request::{remote_request, RemoteRequest};
