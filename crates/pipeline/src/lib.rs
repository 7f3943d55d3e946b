//! Processor invocation: fetch a stored image, run the selected ControlNet
//! processor (in-process or through the annotator service), store the result.

pub mod codec;
pub mod error;
pub mod invoke;
pub mod store;

pub use error::PipelineError;
pub use invoke::{invoke_processor, InvocationContext, MAX_TAG_LEN};
pub use store::{ImageStore, LocalImageStore, MemoryImageStore, NewImage, StoredImage};
