pub mod handler;
pub mod transport;

pub use handler::SubmissionHandler;
pub use transport::{FormTransport, HttpTransport};
