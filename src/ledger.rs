pub mod ledger;
pub mod pool;

#[cfg(test)]
mod tests;
