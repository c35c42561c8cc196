use tracing::Level;

pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub fn init_log() {
    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_max_level(Level::INFO)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .init();
}

/// `ceil(n / d)` for non-negative `n` and positive `d`.
pub fn div_ceil(n: usize, d: usize) -> usize {
    if n == 0 {
        0
    } else {
        (n - 1) / d + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_ceil_rounds_up() {
        assert_eq!(div_ceil(0, 2), 0);
        assert_eq!(div_ceil(5, 2), 3);
        assert_eq!(div_ceil(6, 2), 3);
        assert_eq!(div_ceil(1, 5), 1);
    }
}
