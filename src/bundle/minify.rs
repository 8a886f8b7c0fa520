//! Textual minification for JS and CSS.
//!
//! Each asset kind owns an ordered list of substitution rules. Rules are
//! applied one after another over the whole input and the result is trimmed.
//! There is no tokenizer: a `//` or `/*` inside a string literal, regex
//! literal or URL is removed like any other comment.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::AssetKind;

/// One substitution step.
enum Rule {
    /// Replace every regex match.
    Pattern(Regex, &'static str),
    /// Replace every literal occurrence.
    Literal(&'static str, &'static str),
}

impl Rule {
    /// Build a regex rule from one of the constant patterns below.
    fn pattern(re: &str, replacement: &'static str) -> Self {
        Self::Pattern(Regex::new(re).expect("invalid minify pattern"), replacement)
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            Self::Pattern(re, rep) => re.replace_all(input, *rep),
            Self::Literal(from, to) if input.contains(*from) => Cow::Owned(input.replace(*from, to)),
            Self::Literal(..) => Cow::Borrowed(input),
        }
    }
}

const LINE_COMMENT: &str = r"//[^\n]*";
const BLOCK_COMMENT: &str = r"(?s)/\*.*?\*/";
// ASCII whitespace only: space, \t, \n, \v, \f, \r
const WHITESPACE: &str = r"[\t\n\x0B\x0C\r ]+";

static JS_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::pattern(LINE_COMMENT, ""),
        Rule::pattern(BLOCK_COMMENT, ""),
        Rule::pattern(WHITESPACE, " "),
    ]
});

static CSS_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::pattern(BLOCK_COMMENT, ""),
        Rule::pattern(WHITESPACE, " "),
        Rule::Literal("; ", ";"),
        Rule::Literal(": ", ":"),
    ]
});

fn rules(kind: AssetKind) -> &'static [Rule] {
    match kind {
        AssetKind::Css => &CSS_RULES,
        AssetKind::Js => &JS_RULES,
    }
}

/// Minify source text for the given asset kind.
pub fn minify(source: &str, kind: AssetKind) -> String {
    let mut content = source.to_string();
    for rule in rules(kind) {
        let next = match rule.apply(&content) {
            Cow::Owned(next) => next,
            Cow::Borrowed(_) => continue,
        };
        content = next;
    }
    content.trim_matches(is_trim_char).to_string()
}

/// Minify JavaScript source code.
pub fn minify_js(source: &str) -> String {
    minify(source, AssetKind::Js)
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> String {
    minify(source, AssetKind::Css)
}

/// Characters stripped from both ends of the result.
fn is_trim_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_strips_line_comments() {
        let src = "var a = 1; // set a\nvar b = 2;";
        assert_eq!(minify_js(src), "var a = 1; var b = 2;");
    }

    #[test]
    fn test_js_strips_block_comments_across_lines() {
        let src = "/**\n * header\n */\nfunction f() {\n  return 1; /* inline */\n}\n";
        assert_eq!(minify_js(src), "function f() { return 1; }");
    }

    #[test]
    fn test_js_block_comment_is_non_greedy() {
        let src = "a /* one */ b /* two */ c";
        assert_eq!(minify_js(src), "a b c");
    }

    #[test]
    fn test_js_comment_marker_in_string_is_removed() {
        // Textual substitution: URLs in strings lose everything after `//`
        let src = "var url = \"http://example.com\";\nrun(url);";
        assert_eq!(minify_js(src), "var url = \"http: run(url);");
    }

    #[test]
    fn test_non_ascii_whitespace_is_kept() {
        assert_eq!(minify_js("a\u{a0}\u{a0} b"), "a\u{a0}\u{a0} b");
        assert_eq!(minify_css(".x{\u{2003}}"), ".x{\u{2003}}");
        assert_eq!(minify_js("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
    }

    #[test]
    fn test_css_example() {
        assert_eq!(minify_css(".x { color: red; }"), ".x { color:red;}");
        assert_eq!(minify_css("/* c */ .y{margin:0 ; }"), ".y{margin:0 ;}");
    }

    #[test]
    fn test_css_keeps_line_comment_markers() {
        let src = "a { background: url(//cdn.example.com/x.png); }";
        assert_eq!(
            minify_css(src),
            "a { background:url(//cdn.example.com/x.png);}"
        );
    }

    #[test]
    fn test_css_collapses_newlines() {
        let src = "body {\n\tmargin: 0;\n\tpadding: 0;\n}\n";
        assert_eq!(minify_css(src), "body { margin:0;padding:0;}");
    }

    #[test]
    fn test_minify_is_idempotent() {
        let css = "/* reset */\nhtml, body {\n  margin: 0;\n  padding: 0 ;\n}\n\n.a:hover { color: blue; }";
        let once = minify_css(css);
        assert_eq!(minify_css(&once), once);

        let js = "// entry\nconst x = {\n  a: 1, /* b */\n  c: 2\n};\nconsole.log(x);\n";
        let once = minify_js(js);
        assert_eq!(minify_js(&once), once);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(minify_css(""), "");
        assert_eq!(minify_js("  \n\t "), "");
        assert_eq!(minify_js("// only a comment"), "");
    }
}
