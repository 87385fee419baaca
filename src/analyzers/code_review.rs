//! Static code review heuristics.
//!
//! A fixed table of regex rules applied in order. Every triggered rule
//! subtracts its penalty from a score that starts at 100; the clamped score
//! maps onto a letter grade.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::{AppError, AppResult};

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResult {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub score: u8,
    pub grade: String,
}

#[derive(Debug, Clone, Copy)]
enum Severity {
    Issue,
    Suggestion,
}

#[derive(Debug, Clone, Copy)]
enum Penalty {
    /// Scales with the number of matches.
    PerMatch(i32),
    /// Charged once regardless of match count.
    Flat(i32),
}

/// One lint check: a pattern, who it applies to, and what it costs.
struct ReviewRule {
    pattern: Regex,
    severity: Severity,
    penalty: Penalty,
    js_only: bool,
    message: fn(usize) -> String,
}

static REVIEW_RULES: LazyLock<Vec<ReviewRule>> = LazyLock::new(|| {
    vec![
        ReviewRule {
            pattern: Regex::new(r"console\.(log|warn|error|info|debug)").expect("valid console regex"),
            severity: Severity::Issue,
            penalty: Penalty::PerMatch(3),
            js_only: false,
            message: |n| format!("Found {n} console statement(s) - consider removing for production"),
        },
        ReviewRule {
            pattern: Regex::new(r"(?i)(TODO|FIXME|XXX|HACK):").expect("valid marker regex"),
            severity: Severity::Issue,
            penalty: Penalty::PerMatch(2),
            js_only: false,
            message: |n| format!("Found {n} TODO/FIXME comment(s) - address before shipping"),
        },
        ReviewRule {
            pattern: Regex::new(r"\bdebugger\b").expect("valid debugger regex"),
            severity: Severity::Issue,
            penalty: Penalty::Flat(10),
            js_only: false,
            message: |_| "Found debugger statement - remove before deployment".to_string(),
        },
        ReviewRule {
            pattern: Regex::new(r#"(?i)(password|api[_-]?key|secret)\s*[:=]\s*["'][^"']+["']"#)
                .expect("valid credentials regex"),
            severity: Severity::Issue,
            penalty: Penalty::Flat(20),
            js_only: false,
            message: |_| {
                "Potential hardcoded credentials detected - use environment variables".to_string()
            },
        },
        ReviewRule {
            pattern: Regex::new(r"\bvar\s+\w+").expect("valid var regex"),
            severity: Severity::Suggestion,
            penalty: Penalty::PerMatch(1),
            js_only: true,
            message: |n| format!("Consider using 'const' or 'let' instead of 'var' ({n} occurrence(s))"),
        },
        ReviewRule {
            pattern: Regex::new(r"(?m)^.{121,}").expect("valid long-line regex"),
            severity: Severity::Suggestion,
            penalty: Penalty::PerMatch(1),
            js_only: true,
            message: |n| format!("{n} line(s) exceed 120 characters - consider breaking them up"),
        },
        ReviewRule {
            pattern: Regex::new(r"catch\s*\([^)]*\)\s*\{\s*\}").expect("valid empty-catch regex"),
            severity: Severity::Issue,
            penalty: Penalty::Flat(5),
            js_only: true,
            message: |_| "Empty catch block detected - handle or log the error".to_string(),
        },
        ReviewRule {
            pattern: Regex::new(r"[^=!]==[^=]").expect("valid loose-equality regex"),
            severity: Severity::Suggestion,
            penalty: Penalty::Flat(2),
            js_only: true,
            message: |_| "Consider using '===' instead of '==' for strict equality".to_string(),
        },
    ]
});

/// Run all review rules over `code` and compute the score and grade.
pub fn review(code: &str, language: &str) -> AppResult<ReviewResult> {
    if code.is_empty() {
        return Err(AppError::invalid("Missing code parameter"));
    }

    let is_js = matches!(language, "javascript" | "js");

    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score: i32 = 100;

    for rule in REVIEW_RULES.iter() {
        if rule.js_only && !is_js {
            continue;
        }
        let count = rule.pattern.find_iter(code).count();
        if count == 0 {
            continue;
        }
        score -= match rule.penalty {
            Penalty::PerMatch(p) => p * count as i32,
            Penalty::Flat(p) => p,
        };
        let message = (rule.message)(count);
        match rule.severity {
            Severity::Issue => issues.push(message),
            Severity::Suggestion => suggestions.push(message),
        }
    }

    // Positive feedback and documentation hints do not affect the score
    if issues.is_empty() {
        suggestions.push("Code looks clean! No major issues detected.".to_string());
    }
    if code.chars().count() > 500 && !code.contains("/**") {
        suggestions.push("Consider adding JSDoc comments for documentation".to_string());
    }

    let score = score.clamp(0, 100) as u8;
    Ok(ReviewResult {
        issues,
        suggestions,
        score,
        grade: grade_for(score).to_string(),
    })
}

fn grade_for(score: u8) -> &'static str {
    match score {
        90..=100 => "A",
        80..=89 => "B",
        70..=79 => "C",
        60..=69 => "D",
        _ => "F",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_and_todo_penalties() {
        let result = review("console.log('x'); // TODO: fix\n", "javascript").unwrap();
        assert_eq!(result.score, 95);
        assert_eq!(result.grade, "A");
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues[0].contains("1 console statement(s)"));
        assert!(result.issues[1].contains("1 TODO/FIXME comment(s)"));
    }

    #[test]
    fn hardcoded_credentials_cost_twenty() {
        let clean = review("let x = 1;", "javascript").unwrap();
        let leaky = review(r#"let password = "abc123";"#, "javascript").unwrap();
        assert_eq!(clean.score - leaky.score, 20);
        assert!(leaky
            .issues
            .iter()
            .any(|i| i.contains("hardcoded credentials")));
    }

    #[test]
    fn credentials_penalty_is_presence_only() {
        let one = review(r#"const apiKey = "k1";"#, "javascript").unwrap();
        let many = review(
            r#"const apiKey = "k1"; const secret = "s1"; const password = "p1";"#,
            "javascript",
        )
        .unwrap();
        assert_eq!(one.score, many.score);
    }

    #[test]
    fn clean_code_gets_praise() {
        let result = review("const x = 1;", "javascript").unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(result.grade, "A");
        assert!(result.issues.is_empty());
        assert!(result.suggestions[0].contains("looks clean"));
    }

    #[test]
    fn js_only_rules_skipped_for_other_languages() {
        let code = "var x = 1\nif (a == b) {}\ntry {} catch (e) {}\n";
        let py = review(code, "python").unwrap();
        assert_eq!(py.score, 100);
        let js = review(code, "js").unwrap();
        assert!(js.score < 100);
    }

    #[test]
    fn debugger_statement_flat_penalty() {
        let result = review("debugger;\n", "javascript").unwrap();
        assert_eq!(result.score, 90);
        assert!(result.issues[0].contains("debugger"));
    }

    #[test]
    fn long_lines_counted_per_line() {
        let long = "x".repeat(130);
        let code = format!("{long}\n{long}\nshort\n");
        let result = review(&code, "javascript").unwrap();
        assert_eq!(result.score, 98);
        assert!(result.suggestions[0].starts_with("2 line(s)"));
    }

    #[test]
    fn score_clamped_at_zero() {
        let mut code = String::new();
        for _ in 0..50 {
            code.push_str("console.log('spam');\n");
        }
        let result = review(&code, "javascript").unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.grade, "F");
    }

    #[test]
    fn grade_brackets() {
        assert_eq!(grade_for(100), "A");
        assert_eq!(grade_for(90), "A");
        assert_eq!(grade_for(89), "B");
        assert_eq!(grade_for(80), "B");
        assert_eq!(grade_for(79), "C");
        assert_eq!(grade_for(70), "C");
        assert_eq!(grade_for(69), "D");
        assert_eq!(grade_for(60), "D");
        assert_eq!(grade_for(59), "F");
        assert_eq!(grade_for(0), "F");
    }

    #[test]
    fn documentation_suggested_for_long_undocumented_code() {
        let code = format!("const x = 1;\n{}", "// filler\n".repeat(60));
        assert!(code.chars().count() > 500);
        let result = review(&code, "javascript").unwrap();
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("JSDoc")));
    }

    #[test]
    fn review_is_idempotent() {
        let code = "var a = 1; // FIXME: rename\nconsole.warn(a);\n";
        let first = review(code, "javascript").unwrap();
        let second = review(code, "javascript").unwrap();
        assert_eq!(first.score, second.score);
        assert_eq!(first.issues, second.issues);
        assert_eq!(first.suggestions, second.suggestions);
    }

    #[test]
    fn empty_code_rejected() {
        assert!(matches!(
            review("", "javascript"),
            Err(AppError::InvalidInput(_))
        ));
    }
}
