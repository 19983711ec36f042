pub mod request;
pub mod writer;

pub use request::{CoupletRequest, WordCount};
pub use writer::CoupletWriter;
