/// Largest input whose result fits in an `i64`.
pub const MAX_NUMBER: i64 = 92;

/// Naive exponential recursion. Inputs `<= 1` are returned unchanged.
pub fn fibonacci(number: i64) -> i64 {
    if number <= 1 {
        return number;
    }

    fibonacci(number - 1) + fibonacci(number - 2)
}
