#[cfg(test)]
mod lookup;
