use rust_stemmers::Algorithm;

#[derive(Debug, Clone)]
pub struct Config {
    pub stem_language: Algorithm,
    pub reference_url_base: String,

    // Morpheme decomposition limits
    pub max_decomposition_steps: usize,
    pub max_decomposition_len: usize,

    // Suggestions
    pub near_miss_distance: u8,
    pub completion_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stem_language: Algorithm::English,                     // Porter2
            reference_url_base: "http://dag.github.com/cll/".to_string(),

            max_decomposition_steps: 4096,                          // Fail closed past this
            max_decomposition_len: 64,                              // Chars

            near_miss_distance: 1,
            completion_limit: 5,                                    // Rounds per completion
        }
    }
}

impl Config {
    /// Reference link for a `[chapter, section]` pair of the grammar book.
    pub fn reference_link(&self, chapter: u32, section: u32) -> (String, String) {
        let label = format!("{}.{}", chapter, section);
        let url = format!("{}{}/{}/", self.reference_url_base, chapter, section);
        (label, url)
    }
}
