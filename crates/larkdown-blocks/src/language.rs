//! Code block language codes.

/// Language code the docx API assigns to plain text.
pub const PLAINTEXT: u8 = 1;

/// Map a code fence language alias to the docx API's numeric code.
///
/// Aliases are matched case-insensitively; unknown aliases fall back to
/// plain text.
pub fn language_code(alias: &str) -> u8 {
    match alias.to_lowercase().as_str() {
        "plaintext" => PLAINTEXT,
        "abap" => 2,
        "ada" => 3,
        "apache" => 4,
        "apex" => 5,
        "c" => 7,
        "cpp" | "c++" => 8,
        "csharp" | "c#" => 9,
        "css" => 10,
        "dart" => 12,
        "go" | "golang" => 18,
        "html" => 21,
        "bash" | "shell" | "sh" => 22,
        "java" => 25,
        "javascript" | "js" => 26,
        "json" => 27,
        "kotlin" => 29,
        "lua" => 31,
        "markdown" | "md" => 33,
        "objective-c" | "objectivec" => 36,
        "perl" => 38,
        "php" => 39,
        "python" | "py" => 40,
        "ruby" => 43,
        "rust" => 44,
        "scala" => 45,
        "sql" => 47,
        "swift" => 48,
        "typescript" | "ts" => 50,
        "xml" => 52,
        "yaml" | "yml" => 53,
        _ => PLAINTEXT,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn maps_known_aliases() {
        assert_eq!(language_code("javascript"), 26);
        assert_eq!(language_code("js"), 26);
        assert_eq!(language_code("python"), 40);
        assert_eq!(language_code("py"), 40);
        assert_eq!(language_code("rust"), 44);
        assert_eq!(language_code("c++"), 8);
        assert_eq!(language_code("c#"), 9);
    }

    #[test]
    fn shell_aliases_share_a_code() {
        assert_eq!(language_code("bash"), 22);
        assert_eq!(language_code("shell"), 22);
        assert_eq!(language_code("sh"), 22);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(language_code("Rust"), 44);
        assert_eq!(language_code("YAML"), 53);
        assert_eq!(language_code("TypeScript"), 50);
    }

    #[test]
    fn unknown_aliases_fall_back_to_plaintext() {
        assert_eq!(language_code("plaintext"), PLAINTEXT);
        assert_eq!(language_code("brainfuck"), PLAINTEXT);
        assert_eq!(language_code(""), PLAINTEXT);
    }
}
