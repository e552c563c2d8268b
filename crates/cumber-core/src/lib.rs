pub mod dict;
pub mod generator;
pub mod phoneme;
pub mod settings;

#[cfg(test)]
pub(crate) mod testutil;
