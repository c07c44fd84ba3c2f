//! Simulated execution — canned output chosen by trigger phrases
//!
//! Nothing is evaluated. The submitted code is trimmed and matched against
//! an ordered rule table; the first rule that fires decides the output.
//! Error triggers are checked before anything else so that e.g.
//! `print(undefined)` reports an error rather than a greeting.

/// Result of a simulated run
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    SyntaxError,
    UndefinedName,
    NullPointer,
    Printed,
    FunctionDefined,
    LoopExecuted,
    Executed,
}

impl Outcome {
    /// Text shown to the user
    pub fn message(self) -> &'static str {
        match self {
            Outcome::SyntaxError => "Error: syntax error in code",
            Outcome::UndefinedName => "Error: undefined variable or function",
            Outcome::NullPointer => "Error: null pointer exception",
            Outcome::Printed => "Hello, World!",
            Outcome::FunctionDefined => "Function defined successfully",
            Outcome::LoopExecuted => "Loop executed successfully",
            Outcome::Executed => "Code executed successfully",
        }
    }

    /// Whether this outcome pretends the program failed
    pub fn is_error(self) -> bool {
        matches!(
            self,
            Outcome::SyntaxError | Outcome::UndefinedName | Outcome::NullPointer
        )
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

enum Trigger {
    Contains(&'static str),
    StartsWith(&'static str),
}

impl Trigger {
    fn fires(&self, code: &str) -> bool {
        match self {
            Trigger::Contains(s) => code.contains(s),
            Trigger::StartsWith(s) => code.starts_with(s),
        }
    }
}

/// Ordered rule table: `(triggers, outcome)`, any trigger fires the rule
const RULES: &[(&[Trigger], Outcome)] = &[
    (&[Trigger::Contains("syntax error")], Outcome::SyntaxError),
    (&[Trigger::Contains("undefined")], Outcome::UndefinedName),
    (&[Trigger::Contains("null pointer")], Outcome::NullPointer),
    (
        &[Trigger::StartsWith("print"), Trigger::Contains("console.log")],
        Outcome::Printed,
    ),
    (
        &[Trigger::Contains("function"), Trigger::Contains("def ")],
        Outcome::FunctionDefined,
    ),
    (
        &[Trigger::Contains("for"), Trigger::Contains("while")],
        Outcome::LoopExecuted,
    ),
];

/// Classify `code` without producing text
pub fn classify(code: &str) -> Outcome {
    let code = code.trim();
    RULES
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| t.fires(code)))
        .map(|(_, outcome)| *outcome)
        .unwrap_or(Outcome::Executed)
}

/// Pretend to run `code` and return its output
pub fn simulate_execution(code: &str) -> String {
    classify(code).message().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_triggers() {
        assert_eq!(simulate_execution("x = syntax error"), "Error: syntax error in code");
        assert_eq!(
            simulate_execution("return undefined"),
            "Error: undefined variable or function"
        );
        assert_eq!(
            simulate_execution("deref null pointer"),
            "Error: null pointer exception"
        );
    }

    #[test]
    fn test_errors_take_precedence() {
        assert_eq!(classify("print(undefined)"), Outcome::UndefinedName);
        assert_eq!(classify("function f() { syntax error }"), Outcome::SyntaxError);
    }

    #[test]
    fn test_print_prefix_after_trim() {
        assert_eq!(simulate_execution("   print('hi')"), "Hello, World!");
        assert_eq!(simulate_execution("console.log(1)"), "Hello, World!");
    }

    #[test]
    fn test_print_only_as_prefix() {
        // `print` in the middle is not a print statement, but `def ` still fires.
        assert_eq!(classify("def show():\n    print(1)"), Outcome::FunctionDefined);
        assert_eq!(classify("x = 1; print(x)"), Outcome::Executed);
    }

    #[test]
    fn test_function_definitions() {
        assert_eq!(classify("function add(a, b) { return a + b; }"), Outcome::FunctionDefined);
        assert_eq!(classify("def add(a, b): return a + b"), Outcome::FunctionDefined);
    }

    #[test]
    fn test_loops() {
        assert_eq!(classify("while (true) {}"), Outcome::LoopExecuted);
        // Plain substring: `format` contains `for`.
        assert_eq!(classify("x.format()"), Outcome::LoopExecuted);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(classify("PRINT 1"), Outcome::Executed);
        assert_eq!(classify("Syntax Error"), Outcome::Executed);
    }

    #[test]
    fn test_default_outcome() {
        assert_eq!(simulate_execution("let x = 1;"), "Code executed successfully");
        assert!(!classify("let x = 1;").is_error());
        assert!(classify("syntax error").is_error());
    }
}
