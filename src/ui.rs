pub mod components;
pub mod theme;

#[cfg(test)]
pub mod testing;
