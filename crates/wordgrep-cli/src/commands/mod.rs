pub mod best;
pub mod build;
pub mod dot;
pub mod grep;
pub mod logging;
pub mod run_common;
pub mod source;
pub mod total;

#[cfg(test)]
mod render_tests;
#[cfg(test)]
mod source_tests;
