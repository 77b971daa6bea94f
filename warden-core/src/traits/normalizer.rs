/// Text normalization used by the preprocessing stage (cleaned text, TF-IDF).
/// The severity engine itself never consumes normalized stems.
pub trait INormalizer: Send + Sync {
    /// Ordered sequence of stems for the text.
    fn normalize(&self, text: &str) -> Vec<String>;
}
