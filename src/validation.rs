/// A check over a single input string. Implemented by every validator in this crate so
/// callers can hold heterogeneous validators behind `dyn Validator`.
pub trait Validator: Send + Sync {
    fn is_valid(&self, input: &str) -> bool;
}

/// Runs every validator against its paired input, returning the number of failures.
pub fn count_failures(checks: &[(&dyn Validator, &str)]) -> usize {
    checks
        .iter()
        .filter(|(validator, input)| !validator.is_valid(input))
        .count()
}
