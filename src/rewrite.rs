use crate::scan::Span;
use crate::source::{content, line_ending, Source};

/// Terminates a signature line with `;`, keeping its line terminator.
fn terminate(line: &str) -> String {
    format!("{};{}", content(line), line_ending(line))
}

/// Turns `args) {` into `args);`.
fn replace_brace(line: &str) -> String {
    let ending = line_ending(line);
    let text = content(line);
    let Some(pos) = text.find('{') else {
        return line.to_string();
    };
    let head = text[..pos].trim_end();
    let tail = text[pos + 1..].replace('{', ";");
    format!("{head};{tail}{ending}")
}

/// Replaces the body in `span` with a statement terminator.
///
/// When the opening brace shares its line with the closing parenthesis of
/// the parameter list, that line becomes the end of the declaration.
/// Otherwise the line before the brace is terminated and the brace line is
/// dropped together with the rest of the body.
#[must_use]
pub fn rewrite(source: &Source, span: &Span) -> Source {
    let lines = source.lines();
    let brace_on_signature = lines
        .get(span.start)
        .is_some_and(|line| line.contains(')'));

    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            if !brace_on_signature && idx + 1 == span.start {
                Some(terminate(line))
            } else if brace_on_signature && idx == span.start {
                Some(replace_brace(line))
            } else if span.contains(idx) {
                None
            } else {
                Some(line.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{replace_brace, rewrite, terminate};
    use crate::scan::Span;
    use crate::Source;
    use similar_asserts as diff;

    #[test]
    fn terminate_signature() {
        diff::assert_eq!(terminate("void kernel_x(int a)\n"), "void kernel_x(int a);\n");
        diff::assert_eq!(terminate("void kernel_x(int a)\r\n"), "void kernel_x(int a);\r\n");
        diff::assert_eq!(terminate("void kernel_x(int a)  \n"), "void kernel_x(int a)  ;\n");
        diff::assert_eq!(terminate("void kernel_x(int a)"), "void kernel_x(int a);");
    }

    #[test]
    fn replace_trailing_brace() {
        diff::assert_eq!(replace_brace("  double *B) {\n"), "  double *B);\n");
        diff::assert_eq!(replace_brace("  double *B){\r\n"), "  double *B);\r\n");
        diff::assert_eq!(replace_brace("f(int a) { // body\n"), "f(int a); // body\n");
        diff::assert_eq!(replace_brace("f(int a) {  /* k */  \n"), "f(int a);  /* k */  \n");
    }

    #[test]
    fn rewrite_brace_on_signature_line() {
        let source = Source::parse(
            "#include \"gemm.h\"\nvoid kernel_gemm(int a, int b) {\n  stmt1;\n  stmt2;\n}\nint main() { return 0; }\n",
        );
        let span = Span {
            marker: 1,
            start: 1,
            end: 4,
        };
        let stripped = rewrite(&source, &span);
        diff::assert_eq!(
            stripped.to_string(),
            "#include \"gemm.h\"\nvoid kernel_gemm(int a, int b);\nint main() { return 0; }\n"
        );
        diff::assert_eq!(stripped.len(), source.len() - (span.end - span.start));
    }

    #[test]
    fn rewrite_brace_on_own_line() {
        let source = Source::parse("void kernel_gemm(int a, int b)\n{\n  stmt1;\n}\n\n// trailer\n");
        let span = Span {
            marker: 0,
            start: 1,
            end: 3,
        };
        diff::assert_eq!(
            rewrite(&source, &span).to_string(),
            "void kernel_gemm(int a, int b);\n\n// trailer\n"
        );
    }

    #[test]
    fn rewrite_keeps_crlf() {
        let source = Source::parse("void kernel_x(int a)\r\n{\r\n  f(a);\r\n}\r\nint y;\r\n");
        let span = Span {
            marker: 0,
            start: 1,
            end: 3,
        };
        diff::assert_eq!(
            rewrite(&source, &span).to_string(),
            "void kernel_x(int a);\r\nint y;\r\n"
        );
    }
}
