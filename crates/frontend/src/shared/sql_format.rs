//! SQL layout and syntax highlighting for code samples.
//!
//! Samples are stored on one line; `format_sql` breaks them before top-level
//! clauses, `highlight_sql` turns the formatted text into escaped HTML with
//! `sql-*` spans for the `<pre>` block.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Function,
    String,
    Number,
    Word,
    Punct,
    Space,
    Newline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

const KEYWORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "AS", "ASC", "BETWEEN", "BY", "CASE", "CHECK", "COLUMN",
    "CONSTRAINT", "CREATE", "CROSS", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE",
    "END", "EXISTS", "FALSE", "FILTER", "FROM", "FULL", "GROUP", "HAVING", "IN", "INDEX",
    "INNER", "INSERT", "INTERVAL", "INTO", "IS", "JOIN", "KEY", "LATERAL", "LEFT", "LIKE",
    "LIMIT", "NATURAL", "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER", "OUTER", "OVER", "PARTITION",
    "PRIMARY", "RECURSIVE", "REFERENCES", "RIGHT", "ROLLUP", "SELECT", "SET", "TABLE", "THEN",
    "TRUE", "UNION", "UNIQUE", "UPDATE", "VALUES", "WHEN", "WHERE", "WITH",
];

const FUNCTIONS: &[&str] = &[
    "AVG", "CAST", "COALESCE", "COUNT", "EXTRACT", "LOWER", "MAX", "MIN", "NOW", "RANK",
    "ROW_NUMBER", "SUM", "UPPER",
];

/// Keywords that start a new line when they appear outside parentheses.
const CLAUSE_STARTS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "GROUP", "HAVING", "ORDER", "LIMIT", "UNION", "JOIN", "LEFT",
    "RIGHT", "INNER", "FULL", "CROSS", "NATURAL",
];

/// Words after which `JOIN` stays on the same line.
const JOIN_MODIFIERS: &[&str] = &[
    "LEFT", "RIGHT", "INNER", "FULL", "CROSS", "OUTER", "NATURAL",
];

/// Clause keywords that are also string functions when followed by `(`.
const STRING_FUNCTIONS: &[&str] = &["LEFT", "RIGHT"];

fn is_one_of(word: &str, list: &[&str]) -> bool {
    list.iter().any(|k| k.eq_ignore_ascii_case(word))
}

fn classify_word(word: &str) -> TokenKind {
    if is_one_of(word, KEYWORDS) {
        TokenKind::Keyword
    } else if is_one_of(word, FUNCTIONS) {
        TokenKind::Function
    } else {
        TokenKind::Word
    }
}

/// Split `code` into tokens. Concatenating the token texts yields `code` again.
pub fn tokenize(code: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = code.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let kind = if ch == '\'' {
            // '' inside a literal is an escaped quote
            loop {
                match chars.next() {
                    Some((_, '\'')) => {
                        if matches!(chars.peek(), Some((_, '\''))) {
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    Some(_) => {}
                    None => break,
                }
            }
            TokenKind::String
        } else if ch.is_ascii_digit() {
            while matches!(chars.peek(), Some((_, c)) if c.is_ascii_digit() || *c == '.') {
                chars.next();
            }
            TokenKind::Number
        } else if ch.is_alphabetic() || ch == '_' {
            while matches!(chars.peek(), Some((_, c)) if c.is_alphanumeric() || *c == '_') {
                chars.next();
            }
            TokenKind::Word
        } else if ch == '\n' {
            TokenKind::Newline
        } else if ch.is_whitespace() {
            while matches!(chars.peek(), Some((_, c)) if c.is_whitespace() && *c != '\n') {
                chars.next();
            }
            TokenKind::Space
        } else {
            TokenKind::Punct
        };

        let end = chars.peek().map(|(i, _)| *i).unwrap_or(code.len());
        let text = &code[start..end];
        let kind = if kind == TokenKind::Word {
            classify_word(text)
        } else {
            kind
        };
        tokens.push(Token { kind, text });
    }

    tokens
}

/// Put every top-level clause of `code` on its own line.
pub fn format_sql(code: &str) -> String {
    let mut out = String::with_capacity(code.len() + 16);
    let mut depth = 0usize;
    let mut previous_word: Option<&str> = None;
    let tokens = tokenize(code);

    for (i, token) in tokens.iter().copied().enumerate() {
        match token.kind {
            TokenKind::Punct if token.text == "(" => depth += 1,
            TokenKind::Punct if token.text == ")" => depth = depth.saturating_sub(1),
            TokenKind::Keyword if depth == 0 && is_one_of(token.text, CLAUSE_STARTS) => {
                let joins_modifier = token.text.eq_ignore_ascii_case("JOIN")
                    && previous_word.is_some_and(|w| is_one_of(w, JOIN_MODIFIERS));
                let follows_modifier = is_one_of(token.text, JOIN_MODIFIERS)
                    && previous_word.is_some_and(|w| is_one_of(w, JOIN_MODIFIERS));
                let is_call = is_one_of(token.text, STRING_FUNCTIONS)
                    && tokens[i + 1..]
                        .iter()
                        .find(|t| t.kind != TokenKind::Space)
                        .is_some_and(|t| t.text == "(");
                if !out.trim().is_empty() && !joins_modifier && !follows_modifier && !is_call {
                    let kept = out.trim_end_matches([' ', '\t']).len();
                    out.truncate(kept);
                    if !out.ends_with('\n') {
                        out.push('\n');
                    }
                    out.push_str(token.text);
                    previous_word = Some(token.text);
                    continue;
                }
            }
            _ => {}
        }

        if matches!(
            token.kind,
            TokenKind::Keyword | TokenKind::Function | TokenKind::Word
        ) {
            previous_word = Some(token.text);
        }
        out.push_str(token.text);
    }

    out
}

/// Escaped, highlighted HTML for the formatted `code`.
pub fn highlight_sql(code: &str) -> String {
    let formatted = format_sql(code);
    let mut html = String::with_capacity(formatted.len() * 2);

    for token in tokenize(&formatted) {
        let class = match token.kind {
            TokenKind::Keyword => Some("sql-keyword"),
            TokenKind::Function => Some("sql-function"),
            TokenKind::String => Some("sql-string"),
            TokenKind::Number => Some("sql-number"),
            _ => None,
        };
        match class {
            Some(class) => {
                html.push_str("<span class=\"");
                html.push_str(class);
                html.push_str("\">");
                html.push_str(&html_escape(token.text));
                html.push_str("</span>");
            }
            None => html.push_str(&html_escape(token.text)),
        }
    }

    html
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
