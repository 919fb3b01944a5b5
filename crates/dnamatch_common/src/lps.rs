/// Builds the failure function used by [`Kmp`](crate::Kmp).
///
/// Entry `i` holds the length of the longest proper prefix of `pattern[..=i]`
/// which is also a suffix of it. An empty pattern yields an empty table.
///
/// ```
/// # use dnamatch_common::lps_table;
/// assert_eq!(lps_table(b"AAGAAA"), [0, 1, 0, 1, 2, 2]);
/// ```
#[must_use]
pub fn lps_table(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut length = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[length] {
            length += 1;
            lps[i] = length;
            i += 1;
        } else if length != 0 {
            // retry the same position against the next shorter border
            length = lps[length - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}
