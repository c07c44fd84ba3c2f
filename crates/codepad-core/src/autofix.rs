//! Autofix — line-oriented cleanup followed by re-indentation
//!
//! # Pipeline
//!
//! `code → split lines → fix_line (each) → join → normalize_indentation`
//!
//! `fix_line` collapses whitespace, appends a missing `;` to lines that look
//! like plain statements and closes unbalanced `{` / `(` on the same line.
//! `normalize_indentation` then re-indents by two spaces per open bracket.
//!
//! There is no parsing involved: brackets inside strings and comments count
//! the same as real ones.

use regex::Regex;

lazy_static::lazy_static! {
    // ASCII whitespace only; non-breaking spaces etc. are left alone.
    static ref WHITESPACE_RUN: Regex = Regex::new(r"[\t\n\x0C\r ]+").unwrap();
}

const INDENT: &str = "  ";

/// Substrings that mark a line as a block header rather than a statement
const BLOCK_MARKERS: &[&str] = &["if ", "for ", "while ", "function", "def ", "class "];

// ── Public API ─────────────────────────────────────────────

/// Apply all autofixes to `code` and re-indent the result
///
/// The output always has exactly as many lines as the input.
pub fn apply_auto_fixes(code: &str) -> String {
    let fixed: Vec<String> = code.split('\n').map(fix_line).collect();
    normalize_indentation(&fixed.join("\n"))
}

/// Re-indent `code` by bracket depth
///
/// A line containing `}` or `]` is dedented before it is emitted; a line
/// containing `{` or `[` indents the lines that follow. Blank lines are
/// emitted empty and do not affect the depth. Depth never drops below zero.
pub fn normalize_indentation(code: &str) -> String {
    let mut depth: usize = 0;
    let mut out: Vec<String> = Vec::new();

    for line in code.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.push(String::new());
            continue;
        }

        if trimmed.contains(['}', ']']) {
            depth = depth.saturating_sub(1);
        }

        out.push(format!("{}{}", INDENT.repeat(depth), trimmed));

        if trimmed.contains(['{', '[']) {
            depth += 1;
        }
    }

    out.join("\n")
}

// ── Line fixes ─────────────────────────────────────────────

fn fix_line(line: &str) -> String {
    let stripped = line.trim_end_matches([' ', '\t']);
    let mut fixed = WHITESPACE_RUN.replace_all(stripped, " ").into_owned();

    if needs_semicolon(&fixed) {
        fixed.truncate(fixed.trim_end_matches(' ').len());
        fixed.push(';');
    }

    if fixed.matches('{').count() > fixed.matches('}').count() {
        fixed.push_str(" }");
    }
    if fixed.matches('(').count() > fixed.matches(')').count() {
        fixed.push(')');
    }

    fixed
}

fn needs_semicolon(line: &str) -> bool {
    let t = line.trim();
    if t.is_empty() {
        return false;
    }
    if t.ends_with([';', '{', '}']) || t.starts_with("//") || t.starts_with('#') {
        return false;
    }
    !BLOCK_MARKERS.iter().any(|m| line.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_gets_semicolon() {
        assert_eq!(apply_auto_fixes("let x = 5"), "let x = 5;");
    }

    #[test]
    fn test_existing_semicolon_kept() {
        assert_eq!(apply_auto_fixes("let x = 5;"), "let x = 5;");
    }

    #[test]
    fn test_trailing_whitespace_removed() {
        assert_eq!(apply_auto_fixes("x = 1; \t  "), "x = 1;");
    }

    #[test]
    fn test_inner_whitespace_collapsed() {
        assert_eq!(apply_auto_fixes("let   x\t=\t\t5;"), "let x = 5;");
    }

    #[test]
    fn test_only_ascii_whitespace_collapsed() {
        // NBSP and vertical tab are not in the collapsed class.
        assert_eq!(apply_auto_fixes("a\u{00A0}\u{00A0}b"), "a\u{00A0}\u{00A0}b;");
        assert_eq!(apply_auto_fixes("a\x0B\x0Bb"), "a\x0B\x0Bb;");
        assert_eq!(apply_auto_fixes("a\x0C\x0C b"), "a b;");
    }

    #[test]
    fn test_comments_untouched() {
        assert_eq!(apply_auto_fixes("// note"), "// note");
        assert_eq!(apply_auto_fixes("# note"), "# note");
    }

    #[test]
    fn test_block_headers_not_terminated() {
        assert_eq!(apply_auto_fixes("def foo():"), "def foo():");
        assert_eq!(apply_auto_fixes("class A:"), "class A:");
        assert_eq!(apply_auto_fixes("while x > 0:"), "while x > 0:");
    }

    #[test]
    fn test_unclosed_brace_closed_on_same_line() {
        assert_eq!(apply_auto_fixes("if (x) {"), "if (x) { }");
    }

    #[test]
    fn test_unclosed_paren_closed() {
        // Semicolon goes in first, the paren is appended after it.
        assert_eq!(apply_auto_fixes("foo(1, 2"), "foo(1, 2;)");
    }

    #[test]
    fn test_function_block_reindented() {
        let input = "function add(a, b) {\nreturn a + b\n}";
        // The appended ` }` does not cancel the indent opened by `{`.
        let expected = "function add(a, b) { }\n  return a + b;\n}";
        assert_eq!(apply_auto_fixes(input), expected);
    }

    #[test]
    fn test_blank_lines_preserved() {
        assert_eq!(apply_auto_fixes("a = 1\n\n\nb = 2"), "a = 1;\n\n\nb = 2;");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(apply_auto_fixes(""), "");
    }

    #[test]
    fn test_line_count_preserved() {
        let input = "a\n  b {\n\n c\n}\n";
        let output = apply_auto_fixes(input);
        assert_eq!(input.split('\n').count(), output.split('\n').count());
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(apply_auto_fixes("x = 1\r\ny = 2"), "x = 1;\ny = 2;");
    }

    #[test]
    fn test_indentation_by_depth() {
        let input = "a {\nb\nc [\nd\n]\n}";
        let expected = "a {\n  b\n  c [\n    d\n  ]\n}";
        assert_eq!(normalize_indentation(input), expected);
    }

    #[test]
    fn test_indentation_never_negative() {
        assert_eq!(normalize_indentation("}\n}\nx"), "}\n}\nx");
    }

    #[test]
    fn test_indentation_same_line_open_close() {
        // `} else {` dedents, then indents again.
        let input = "if a {\nx\n} else {\ny\n}";
        let expected = "if a {\n  x\n} else {\n  y\n}";
        assert_eq!(normalize_indentation(input), expected);
    }

    #[test]
    fn test_indentation_discards_existing_indent() {
        assert_eq!(normalize_indentation("        x"), "x");
    }

    #[test]
    fn test_indentation_idempotent() {
        let input = "a {\n      b\n   c {\nd\n}\n}";
        let once = normalize_indentation(input);
        assert_eq!(normalize_indentation(&once), once);
    }

    #[test]
    fn test_determinism_100_iterations() {
        let input = "for (i = 0; i < 3; i++) {\n  print(i\n}\nlet y = [1, 2";
        let first = apply_auto_fixes(input);
        for i in 0..100 {
            assert_eq!(first, apply_auto_fixes(input), "Non-determinism at iteration {}", i);
        }
    }
}
