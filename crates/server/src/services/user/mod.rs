pub mod user_service;

#[cfg(test)]
mod tests;
