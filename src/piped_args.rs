use std::io::BufRead;

/// Drains the reader and returns every whitespace-delimited token, in the
/// order the lines were read and left-to-right within each line. Empty
/// lines contribute nothing. Only an I/O error on the stream aborts.
pub fn read_piped_args<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut args = Vec::new();
    for line in reader.lines() {
        args.extend(line?.split_whitespace().map(str::to_owned));
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> Vec<String> {
        read_piped_args(input.as_bytes()).unwrap()
    }

    #[test]
    fn reads_piped_args() {
        let cases: &[(&str, &[&str])] = &[
            ("single", &["single"]),
            ("single\n", &["single"]),
            ("one\ndouble\n", &["one", "double"]),
        ];
        for (given, expected) in cases {
            assert_eq!(read(given), *expected, "input: {given:?}");
        }
    }

    #[test]
    fn splits_each_line_on_whitespace_runs() {
        assert_eq!(read("a b\nc\n"), ["a", "b", "c"]);
        assert_eq!(read("  a \t b  \n"), ["a", "b"]);
    }

    #[test]
    fn empty_lines_contribute_no_tokens() {
        assert_eq!(read("\n\na\n\nb\n"), ["a", "b"]);
        assert!(read("").is_empty());
    }
}
