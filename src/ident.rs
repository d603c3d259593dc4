/// Generates a unique row identifier from a record's name and its
/// position in the source list.
///
/// Deterministic and pure: `unique_id("smss.exe", 0)` yields `"smss.exe-0"`.
/// Uniqueness holds as long as indices are distinct within one dataset load;
/// nothing is guaranteed across reloads with differing ordering.
pub fn unique_id(name: &str, index: usize) -> String {
    format!("{name}-{index}")
}

#[cfg(test)]
mod tests {
    use super::unique_id;

    #[test]
    fn joins_name_and_index_with_a_dash() {
        assert_eq!(unique_id("smss.exe", 0), "smss.exe-0");
        assert_eq!(unique_id("netsh.exe", 1), "netsh.exe-1");
    }

    #[test]
    fn empty_name_still_produces_an_id() {
        assert_eq!(unique_id("", 4), "-4");
    }
}
