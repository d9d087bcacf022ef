//! Plain value types and list helpers shared by the binary.

mod profile;
mod tags;

pub use profile::ModelProfile;
pub use tags::{process_data, process_tags};

#[cfg(test)]
mod tests;
