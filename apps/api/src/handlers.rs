pub mod health;
pub mod ingredients;
pub mod products;

#[cfg(test)]
mod tests;
