pub mod driver;
pub mod engine;
pub mod state;

#[cfg(test)]
mod tests;
