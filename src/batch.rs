/// Greedy left-to-right partition of `args` into chunks of at most `n`.
/// All chunks except possibly the last have exactly `n` elements; an empty
/// input yields no chunks. `n` must be at least 1, which the CLI enforces
/// by parsing `--number` as a `NonZeroUsize`.
pub fn split_by_n(args: Vec<String>, n: usize) -> Vec<Vec<String>> {
    args.chunks(n).map(<[String]>::to_vec).collect()
}
