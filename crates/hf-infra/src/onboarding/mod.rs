mod completion_flag;
mod progress_gateway;

pub use completion_flag::LocalCompletionFlag;
pub use progress_gateway::LocalProgressGateway;
