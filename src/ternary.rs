/// A conditional-expression macro.  Rust's `if` is already an
/// expression, but `cargo fmt` spreads it over five lines, and the
/// border-handling tables in the energy model and the seam search
/// read much better kept to one line each.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
