use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Line that separates raw posts in the input.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Prepended to every record unless blank.
    #[serde(default = "default_context")]
    pub context: String,

    #[serde(default = "default_bos")]
    pub bos: String,

    #[serde(default = "default_eos")]
    pub eos: String,

    /// Substituted for every boundary in the stream.
    #[serde(default = "default_pad")]
    pub pad: String,

    /// Stop after this many accepted posts, 0 means no limit.
    #[serde(default)]
    pub limit: usize,

    /// Emit an `id` column and a header row.
    #[serde(default = "default_tsv")]
    pub tsv: bool,
}

fn default_separator() -> String {
    "<BAGUETTE>".to_string()
}
fn default_context() -> String {
    "НАПИШИ БАГЕТ".to_string()
}
fn default_bos() -> String {
    "<BOS>".to_string()
}
fn default_eos() -> String {
    "<EOS>".to_string()
}
fn default_pad() -> String {
    "<PAD>".to_string()
}
fn default_tsv() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            separator: default_separator(),
            context: default_context(),
            bos: default_bos(),
            eos: default_eos(),
            pad: default_pad(),
            limit: 0,
            tsv: default_tsv(),
        }
    }
}

impl Config {
    pub fn limit_reached(&self, accepted: usize) -> bool {
        self.limit > 0 && accepted >= self.limit
    }
}
