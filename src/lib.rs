pub mod aggregator;
pub mod error;
pub mod header;
pub mod report;
pub mod resolver;

pub use aggregator::FlowAggregator;
pub use error::FlowTagError;
pub use resolver::TagResolver;
