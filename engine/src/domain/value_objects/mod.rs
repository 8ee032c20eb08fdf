pub mod process_status;

pub use process_status::ProcessStatus;
