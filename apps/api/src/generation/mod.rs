// Mock result generators, one per analysis panel.
// Each `generate` is pure; panels wrap it in the simulated latency.

pub mod career;
pub mod content;
pub mod job_fit;
pub mod profile;

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
