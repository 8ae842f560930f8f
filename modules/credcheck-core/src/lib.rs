pub mod classifier;
pub mod normalize;
pub mod prompt;
pub mod samples;
pub mod topics;
pub mod trends;

pub use classifier::classify;
pub use normalize::normalize;
pub use prompt::analysis_prompt;
pub use samples::sample_posts;
pub use topics::extract_topic;
pub use trends::aggregate;
