pub mod error;
pub mod extract;
pub mod gif;
pub mod output;

#[cfg(test)]
mod testutil;
