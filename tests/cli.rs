//! Integration test suite for `jsonspan` CLI
use assert_cmd::Command;

/// Helper function to run the `main` binary with the given arguments and return a
/// [`assert_cmd::assert::Assert`].
fn run_main(args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd =
        Command::cargo_bin("jspan").expect("Failed to find main binary");
    cmd.args(args);
    cmd.assert()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
        String::from_utf8(assert.get_output().stdout.clone())
            .expect("Invalid UTF-8 output")
    }

    #[test]
    fn count_canonical_document() {
        let assert = run_main(&["--count", "tests/data/nested.json"])
            .success()
            .code(0);
        assert_eq!(stdout_of(assert).trim(), "Tokens: 19");
    }

    #[test]
    fn span_of_whole_document() {
        let assert = run_main(&["--span", "0", "tests/data/nested.json"])
            .success()
            .code(0);
        assert_eq!(stdout_of(assert).trim(), "Span at 0: 19 tokens");
    }

    #[test]
    fn span_at_non_opener_is_zero() {
        let assert = run_main(&["--span", "2", "tests/data/nested.json"])
            .success()
            .code(0);
        assert_eq!(stdout_of(assert).trim(), "Span at 2: 0 tokens");
    }

    #[test]
    fn element_lookup() {
        let assert = run_main(&["--element", "0", "tests/data/nested.json"])
            .success()
            .code(0);
        assert_eq!(
            stdout_of(assert).trim(),
            "Element 0 at token 1: Separator[\"{\"]"
        );
    }

    #[test]
    fn element_lookup_past_the_end() {
        let assert = run_main(&["--element", "1", "tests/data/nested.json"])
            .success()
            .code(0);
        assert_eq!(stdout_of(assert).trim(), "Element 1: not found");
    }

    #[test]
    fn key_lookup() {
        let assert = run_main(&["--key", "key", "tests/data/object.json"])
            .success()
            .code(0);
        assert_eq!(
            stdout_of(assert).trim(),
            "Key \"key\" at token 3: Separator[\"{\"]"
        );
    }

    #[test]
    fn key_lookup_on_array_root_is_not_found() {
        let assert = run_main(&["--key", "key", "tests/data/nested.json"])
            .success()
            .code(0);
        assert_eq!(stdout_of(assert).trim(), "Key \"key\": not found");
    }

    #[test]
    fn default_action_lists_one_line_per_token() {
        let assert = run_main(&["tests/data/nested.json"]).success().code(0);
        assert_eq!(stdout_of(assert).lines().count(), 19);
    }

    #[test]
    fn reads_from_stdin() {
        let mut cmd =
            Command::cargo_bin("jspan").expect("Failed to find main binary");
        let assert =
            cmd.arg("--count").write_stdin("[1, 2]").assert().success();
        assert_eq!(stdout_of(assert).trim(), "Tokens: 5");
    }

    #[test]
    fn unsupported_character_fails() {
        let assert = run_main(&["--count", "tests/data/bad.json"]).failure();
        let stderr = String::from_utf8(assert.get_output().stderr.clone())
            .expect("Invalid UTF-8 output");
        assert!(
            stderr.contains("no rule matched"),
            "stderr was: {stderr:?}"
        );
    }

    #[test]
    fn nonexistent_file_fails() {
        run_main(&["--count", "tests/data/missing.json"]).failure();
    }
}
