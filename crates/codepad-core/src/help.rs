//! Keyword help — canned paragraphs looked up by substring

/// Reply when no keyword matches
pub const FALLBACK: &str = "I can help with: loops, functions, variables, arrays, objects, conditionals, debugging, and common syntax issues. Try asking about a specific topic.";

/// Keyword table, searched in order
const TOPICS: &[(&str, &str)] = &[
    ("loop", "Use 'for' loops for iteration. Syntax: for (init; condition; increment) { code }"),
    ("for", "For loops: for (let i = 0; i < 10; i++) { console.log(i); }"),
    ("while", "While loops: while (condition) { code }. Make sure condition eventually becomes false."),
    ("function", "Functions are reusable code blocks. Syntax: function name(params) { return value; }"),
    ("variable", "Declare variables using let or const. Example: let x = 10; const PI = 3.14;"),
    ("array", "Arrays store multiple values. Example: let arr = [1, 2, 3]; Access: arr[0]"),
    ("object", "Objects store key-value pairs. Example: let obj = {name: 'John', age: 30};"),
    ("if", "Conditional statements: if (condition) { code } else { alternative }"),
    ("error", "Check for syntax errors, missing brackets, or undefined variables. Use console.log for debugging."),
    ("debug", "Use console.log() to print values and trace execution. Check browser console for errors."),
    ("syntax", "Common syntax errors: missing semicolons, unmatched brackets, typos in keywords."),
    ("semicolon", "Semicolons end statements in many languages. Example: let x = 5;"),
    ("bracket", "Match opening and closing brackets: (), {}, []. Each opening needs a closing."),
    ("string", "Strings are text in quotes. Example: let str = 'Hello'; or let str = \"World\";"),
    ("number", "Numbers don't need quotes. Example: let num = 42; let pi = 3.14;"),
    ("return", "Use return to output a value from a function. Example: return result;"),
    ("parameter", "Parameters are function inputs. Example: function add(a, b) { return a + b; }"),
    ("class", "Classes define objects. Syntax: class Name { constructor() {} method() {} }"),
    ("import", "Import modules: import { name } from 'module'; or const name = require('module');"),
];

/// Look up the help paragraph for `query`
///
/// The query is ASCII-lowercased and the first keyword it contains wins,
/// so "while loop" answers with the `loop` paragraph. Non-ASCII letters are
/// left as they are; keywords are ASCII.
pub fn help_response(query: &str) -> &'static str {
    let query = query.to_ascii_lowercase();
    TOPICS
        .iter()
        .find(|(keyword, _)| query.contains(*keyword))
        .map(|(_, text)| *text)
        .unwrap_or(FALLBACK)
}

/// All help keywords, in lookup order
pub fn topics() -> impl Iterator<Item = &'static str> {
    TOPICS.iter().map(|(keyword, _)| *keyword)
}
