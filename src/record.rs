use crate::config::Config;

pub const TSV_HEADER: &str = "id\tbaguette\n";

pub fn header(config: &Config) -> Option<&'static str> {
    config.tsv.then_some(TSV_HEADER)
}

/// Frames one accepted stream as an output line. `id` is 1-based and only
/// written in tabular mode.
pub fn format_record(id: usize, stream: &str, config: &Config) -> String {
    let mut out = String::with_capacity(stream.len() + 64);
    if config.tsv {
        out.push_str(&id.to_string());
        out.push('\t');
    }
    if !config.context.trim().is_empty() {
        out.push_str(&config.context);
        out.push(' ');
    }
    out.push_str(&config.bos);
    out.push(' ');
    out.push_str(stream);
    out.push(' ');
    out.push_str(&config.eos);
    out.push('\n');
    out
}
