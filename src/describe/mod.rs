pub mod cleanup;
pub mod format;
pub mod precipitation;
pub mod synthesizer;
