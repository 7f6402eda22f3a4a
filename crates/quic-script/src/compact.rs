//! Compact projection of the file string.

/// Reduce a file string to its rows.
///
/// Drops the `# N` header line and every `{U ...}` parameter line, strips
/// the `,` separators and the `:` terminator, and concatenates what remains.
/// Parameter values are lost.
pub fn compact_string(file_string: &str) -> String {
    file_string
        .split('\n')
        .skip(1)
        .filter(|line| !line.starts_with('{'))
        .map(|line| line.trim_end_matches([',', ':']))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        assert_eq!(compact_string("# 2\nH:"), "H");
    }

    #[test]
    fn test_headers_removed() {
        let file = "# 2\nIH,\n{U 0 0 0.25}\nUC,\n{U 1 2 3}\nCU:";
        assert_eq!(compact_string(file), "IHUCCU");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(compact_string("# 2\n:"), "");
    }

    #[test]
    fn test_tolerates_blank_lines() {
        assert_eq!(compact_string("# 1\n\nX,\nY:"), "XY");
    }
}
