/// C source text as an ordered list of lines.
///
/// Every line keeps its original terminator, so rendering a `Source`
/// back to a string reproduces the input byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Source {
    lines: Vec<String>,
}

impl Source {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<String> for Source {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Terminator of `line` (`"\r\n"`, `"\n"` or `""` for an unterminated last line).
#[must_use]
pub fn line_ending(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// `line` without its terminator.
#[must_use]
pub fn content(line: &str) -> &str {
    &line[..line.len() - line_ending(line).len()]
}

/// Number of opening minus number of closing braces on `line`.
///
/// Counting is purely lexical: braces in string literals, character
/// literals and comments are counted as well.
#[must_use]
pub fn brace_balance(line: &str) -> isize {
    line.chars().fold(0, |balance, c| match c {
        '{' => balance + 1,
        '}' => balance - 1,
        _ => balance,
    })
}

#[cfg(test)]
mod tests {
    use super::{brace_balance, content, line_ending, Source};
    use similar_asserts as diff;

    #[test]
    fn parse_keeps_terminators() {
        let text = "int a;\r\nint b;\n\nint c;";
        let source = Source::parse(text);
        diff::assert_eq!(
            source.lines().to_vec(),
            vec!["int a;\r\n", "int b;\n", "\n", "int c;"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
        diff::assert_eq!(source.to_string(), text);
    }

    #[test]
    fn parse_empty() {
        let source = Source::parse("");
        assert!(source.is_empty());
        diff::assert_eq!(source.to_string(), "");
    }

    #[test]
    fn split_line_ending() {
        diff::assert_eq!(line_ending("a\r\n"), "\r\n");
        diff::assert_eq!(line_ending("a\n"), "\n");
        diff::assert_eq!(line_ending("a"), "");
        diff::assert_eq!(content("  stmt;\r\n"), "  stmt;");
        diff::assert_eq!(content("}"), "}");
    }

    #[test]
    fn lexical_brace_balance() {
        diff::assert_eq!(brace_balance("for (;;) {\n"), 1);
        diff::assert_eq!(brace_balance("  }\n"), -1);
        diff::assert_eq!(brace_balance("} else {\n"), 0);
        // braces in literals are not special
        diff::assert_eq!(brace_balance(r#"  printf("{{");"#), 2);
    }
}
