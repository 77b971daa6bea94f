mod annotator;
mod normalizer;
mod sentiment;

pub use annotator::IAnnotator;
pub use normalizer::INormalizer;
pub use sentiment::ISentimentScorer;
