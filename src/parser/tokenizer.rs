//! Tag-soup tokenizer.
//!
//! A single-pass state machine over the decoded text. It never fails:
//! stray `<` becomes text, malformed attributes are dropped while their
//! element is kept, and unterminated comments or tags run to end of input.
//! Entity references are left encoded; the normalizer decodes them.

use crate::tags;

/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name attr=value ...>` with lowercase name and attribute names.
    StartTag {
        name: String,
        attrs: Vec<(String, String)>,
        self_closing: bool,
    },
    /// `</name>`
    EndTag { name: String },
    /// Character data between tags, entities still encoded.
    Text(String),
    /// `<!-- ... -->` or a bogus comment such as `<?xml ...?>`.
    Comment(String),
    /// `<!DOCTYPE ...>` contents after the keyword.
    Doctype(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Double,
    Single,
    Unquoted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Data,
    TagOpen,
    EndTagOpen,
    TagName,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValue(Quote),
    AfterAttributeValueQuoted,
    SelfClosingStartTag,
    /// Skipping a malformed attribute up to the next separator.
    BogusAttribute,
    BogusComment,
}

#[derive(Debug, Default)]
struct PendingTag {
    name: String,
    is_end: bool,
    attrs: Vec<(String, String)>,
    attr_name: String,
    attr_value: String,
    self_closing: bool,
}

impl PendingTag {
    fn start(is_end: bool) -> Self {
        Self {
            is_end,
            ..Self::default()
        }
    }

    /// Commit the attribute being built. The first occurrence of a name wins.
    fn commit_attr(&mut self) {
        if self.attr_name.is_empty() {
            return;
        }
        let name = std::mem::take(&mut self.attr_name);
        let value = std::mem::take(&mut self.attr_value);
        if !self.attrs.iter().any(|(n, _)| *n == name) {
            self.attrs.push((name, value));
        }
    }

    fn drop_attr(&mut self) {
        self.attr_name.clear();
        self.attr_value.clear();
    }
}

/// Tokenizer over a decoded text buffer.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    state: State,
    tokens: Vec<Token>,
    text: String,
    tag: PendingTag,
    bogus: String,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            state: State::Data,
            tokens: Vec::new(),
            text: String::new(),
            tag: PendingTag::default(),
            bogus: String::new(),
        }
    }

    /// Run to end of input and return every token.
    #[must_use]
    pub fn run(mut self) -> Vec<Token> {
        while let Some(c) = self.next_char() {
            self.step(c);
        }
        self.finish();
        self.tokens
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Push `c` back so the next state sees it again.
    fn reconsume(&mut self, c: char, state: State) {
        self.pos -= c.len_utf8();
        self.state = state;
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push(Token::Text(std::mem::take(&mut self.text)));
        }
    }

    fn emit(&mut self, token: Token) {
        self.flush_text();
        self.tokens.push(token);
    }

    fn step(&mut self, c: char) {
        match self.state {
            State::Data => {
                if c == '<' {
                    self.state = State::TagOpen;
                } else {
                    self.text.push(c);
                }
            }
            State::TagOpen => match c {
                c if c.is_ascii_alphabetic() => {
                    self.tag = PendingTag::start(false);
                    self.tag.name.push(c.to_ascii_lowercase());
                    self.state = State::TagName;
                }
                '/' => self.state = State::EndTagOpen,
                '!' => self.markup_declaration(),
                '?' => {
                    self.bogus.clear();
                    self.bogus.push('?');
                    self.state = State::BogusComment;
                }
                _ => {
                    self.text.push('<');
                    self.reconsume(c, State::Data);
                }
            },
            State::EndTagOpen => match c {
                c if c.is_ascii_alphabetic() => {
                    self.tag = PendingTag::start(true);
                    self.tag.name.push(c.to_ascii_lowercase());
                    self.state = State::TagName;
                }
                '>' => self.state = State::Data,
                _ => {
                    self.bogus.clear();
                    self.bogus.push(c);
                    self.state = State::BogusComment;
                }
            },
            State::TagName => match c {
                c if c.is_whitespace() => self.state = State::BeforeAttributeName,
                '/' => self.state = State::SelfClosingStartTag,
                '>' => self.emit_tag(),
                _ => self.tag.name.push(c.to_ascii_lowercase()),
            },
            State::BeforeAttributeName => match c {
                c if c.is_whitespace() => {}
                '/' => self.state = State::SelfClosingStartTag,
                '>' => self.emit_tag(),
                '"' | '\'' | '<' | '=' => self.state = State::BogusAttribute,
                _ => {
                    self.tag.attr_name.push(c.to_ascii_lowercase());
                    self.state = State::AttributeName;
                }
            },
            State::AttributeName => match c {
                c if c.is_whitespace() => self.state = State::AfterAttributeName,
                '/' => {
                    self.tag.commit_attr();
                    self.state = State::SelfClosingStartTag;
                }
                '=' => self.state = State::BeforeAttributeValue,
                '>' => {
                    self.tag.commit_attr();
                    self.emit_tag();
                }
                '"' | '\'' | '<' => {
                    self.tag.drop_attr();
                    self.state = State::BogusAttribute;
                }
                _ => self.tag.attr_name.push(c.to_ascii_lowercase()),
            },
            State::AfterAttributeName => match c {
                c if c.is_whitespace() => {}
                '/' => {
                    self.tag.commit_attr();
                    self.state = State::SelfClosingStartTag;
                }
                '=' => self.state = State::BeforeAttributeValue,
                '>' => {
                    self.tag.commit_attr();
                    self.emit_tag();
                }
                _ => {
                    self.tag.commit_attr();
                    self.reconsume(c, State::BeforeAttributeName);
                }
            },
            State::BeforeAttributeValue => match c {
                c if c.is_whitespace() => {}
                '"' => self.state = State::AttributeValue(Quote::Double),
                '\'' => self.state = State::AttributeValue(Quote::Single),
                '>' => {
                    self.tag.commit_attr();
                    self.emit_tag();
                }
                _ => self.reconsume(c, State::AttributeValue(Quote::Unquoted)),
            },
            State::AttributeValue(quote) => self.attribute_value(quote, c),
            State::AfterAttributeValueQuoted => match c {
                c if c.is_whitespace() => self.state = State::BeforeAttributeName,
                '/' => self.state = State::SelfClosingStartTag,
                '>' => self.emit_tag(),
                _ => self.reconsume(c, State::BeforeAttributeName),
            },
            State::SelfClosingStartTag => {
                if c == '>' {
                    self.tag.self_closing = true;
                    self.emit_tag();
                } else {
                    self.reconsume(c, State::BeforeAttributeName);
                }
            }
            State::BogusAttribute => match c {
                c if c.is_whitespace() => self.state = State::BeforeAttributeName,
                '>' => self.emit_tag(),
                _ => {}
            },
            State::BogusComment => {
                if c == '>' {
                    let comment = std::mem::take(&mut self.bogus);
                    self.emit(Token::Comment(comment));
                    self.state = State::Data;
                } else {
                    self.bogus.push(c);
                }
            }
        }
    }

    fn attribute_value(&mut self, quote: Quote, c: char) {
        match (quote, c) {
            (Quote::Double, '"') | (Quote::Single, '\'') => {
                self.tag.commit_attr();
                self.state = State::AfterAttributeValueQuoted;
            }
            (Quote::Unquoted, c) if c.is_whitespace() => {
                self.tag.commit_attr();
                self.state = State::BeforeAttributeName;
            }
            (Quote::Unquoted, '>') => {
                self.tag.commit_attr();
                self.emit_tag();
            }
            (Quote::Unquoted, '"' | '\'' | '<' | '=' | '`') => {
                self.tag.drop_attr();
                self.state = State::BogusAttribute;
            }
            (_, c) => self.tag.attr_value.push(c),
        }
    }

    /// Handle `<!`: comments, doctypes and bogus comments are consumed whole.
    fn markup_declaration(&mut self) {
        let rest = self.rest();
        if let Some(body) = rest.strip_prefix("--") {
            let (comment, consumed) = match body.find("-->") {
                Some(end) => (&body[..end], 2 + end + 3),
                None if body.starts_with('>') => ("", 3),
                None => (body, rest.len()),
            };
            self.emit(Token::Comment(comment.to_string()));
            self.pos += consumed;
        } else if rest
            .as_bytes()
            .get(..7)
            .is_some_and(|head| head.eq_ignore_ascii_case(b"doctype"))
        {
            // The first seven bytes are ASCII, so slicing after them is safe.
            let body = &rest[7..];
            let (doctype, consumed) = match body.find('>') {
                Some(end) => (&body[..end], 7 + end + 1),
                None => (body, rest.len()),
            };
            self.emit(Token::Doctype(doctype.trim().to_string()));
            self.pos += consumed;
        } else {
            self.bogus.clear();
            self.state = State::BogusComment;
            return;
        }
        self.state = State::Data;
    }

    fn emit_tag(&mut self) {
        self.state = State::Data;
        let tag = std::mem::take(&mut self.tag);
        if tag.is_end {
            self.emit(Token::EndTag { name: tag.name });
            return;
        }
        let raw_text = !tag.self_closing && tags::is_raw_text(&tag.name);
        let name = tag.name.clone();
        self.emit(Token::StartTag {
            name: tag.name,
            attrs: tag.attrs,
            self_closing: tag.self_closing,
        });
        if raw_text {
            self.raw_text(&name);
        }
    }

    /// Consume raw text up to `</name`, leaving the end tag to be tokenized.
    fn raw_text(&mut self, name: &str) {
        let rest = self.rest();
        match find_close_tag(rest, name) {
            Some(end) => {
                self.text.push_str(&rest[..end]);
                self.pos += end;
            }
            None => {
                self.text.push_str(rest);
                self.pos = self.input.len();
                self.emit(Token::EndTag {
                    name: name.to_string(),
                });
            }
        }
    }

    fn finish(&mut self) {
        match self.state {
            State::Data => {}
            State::TagOpen => self.text.push('<'),
            State::EndTagOpen => self.text.push_str("</"),
            State::BogusComment => {
                let comment = std::mem::take(&mut self.bogus);
                self.emit(Token::Comment(comment));
            }
            State::AttributeValue(Quote::Double | Quote::Single) => {
                self.tag.drop_attr();
                self.emit_tag();
            }
            _ => {
                self.tag.commit_attr();
                self.emit_tag();
            }
        }
        self.flush_text();
    }
}

/// Byte offset of the first `</name` (ASCII case-insensitive) that is
/// followed by whitespace, `/`, `>` or end of input.
fn find_close_tag(haystack: &str, name: &str) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let name = name.as_bytes();
    let mut i = 0;
    while let Some(rel) = bytes[i..].iter().position(|&b| b == b'<') {
        let at = i + rel;
        let name_start = at + 2;
        let name_end = name_start + name.len();
        if bytes.get(at + 1) == Some(&b'/')
            && name_end <= bytes.len()
            && bytes[name_start..name_end].eq_ignore_ascii_case(name)
            && bytes
                .get(name_end)
                .is_none_or(|&b| b.is_ascii_whitespace() || b == b'/' || b == b'>')
        {
            return Some(at);
        }
        i = at + 1;
    }
    None
}

/// Tokenize `input` completely.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(name: &str, attrs: &[(&str, &str)]) -> Token {
        Token::StartTag {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            self_closing: false,
        }
    }

    fn end(name: &str) -> Token {
        Token::EndTag {
            name: name.to_string(),
        }
    }

    fn text(value: &str) -> Token {
        Token::Text(value.to_string())
    }

    #[test]
    fn test_tokenize_simple_element() {
        let tokens = tokenize("<P Class=intro>Hello</p>");
        assert_eq!(
            tokens,
            vec![start("p", &[("class", "intro")]), text("Hello"), end("p")]
        );
    }

    #[test]
    fn test_tokenize_quoted_and_bare_attributes() {
        let tokens = tokenize(r#"<input type='text' disabled value="a b">"#);
        assert_eq!(
            tokens,
            vec![start(
                "input",
                &[("type", "text"), ("disabled", ""), ("value", "a b")]
            )]
        );
    }

    #[test]
    fn test_tokenize_drops_malformed_attribute_keeps_element() {
        let tokens = tokenize(r#"<div class="a" "junk" id=main>x</div>"#);
        assert_eq!(
            tokens,
            vec![
                start("div", &[("class", "a"), ("id", "main")]),
                text("x"),
                end("div")
            ]
        );
    }

    #[test]
    fn test_tokenize_drops_unquoted_value_with_quote() {
        let tokens = tokenize(r#"<a href=foo"bar title=t>x</a>"#);
        assert_eq!(
            tokens,
            vec![start("a", &[("title", "t")]), text("x"), end("a")]
        );
    }

    #[test]
    fn test_tokenize_first_duplicate_attribute_wins() {
        let tokens = tokenize(r#"<p id="one" id="two">"#);
        assert_eq!(tokens, vec![start("p", &[("id", "one")])]);
    }

    #[test]
    fn test_tokenize_missing_space_between_attributes() {
        let tokens = tokenize(r#"<p a="1"b="2">"#);
        assert_eq!(tokens, vec![start("p", &[("a", "1"), ("b", "2")])]);
    }

    #[test]
    fn test_tokenize_self_closing_flag() {
        let tokens = tokenize("<br/><img src=x />");
        assert!(matches!(
            tokens.as_slice(),
            [
                Token::StartTag { name: br, self_closing: true, .. },
                Token::StartTag { name: img, self_closing: true, attrs },
            ] if br == "br" && img == "img" && attrs == &vec![("src".to_string(), "x".to_string())]
        ));
    }

    #[test]
    fn test_tokenize_stray_angle_bracket_is_text() {
        let tokens = tokenize("a < b and 1<2");
        assert_eq!(tokens, vec![text("a < b and 1<2")]);
    }

    #[test]
    fn test_tokenize_comment_and_doctype() {
        let tokens = tokenize("<!DOCTYPE html><!-- note --><p>x");
        assert_eq!(
            tokens,
            vec![
                Token::Doctype("html".to_string()),
                Token::Comment(" note ".to_string()),
                start("p", &[]),
                text("x"),
            ]
        );
    }

    #[test]
    fn test_tokenize_unterminated_comment_runs_to_end() {
        let tokens = tokenize("<p>x<!-- never closed");
        assert_eq!(
            tokens,
            vec![
                start("p", &[]),
                text("x"),
                Token::Comment(" never closed".to_string())
            ]
        );
    }

    #[test]
    fn test_tokenize_processing_instruction_is_bogus_comment() {
        let tokens = tokenize(r#"<?xml version="1.0"?><p>"#);
        assert_eq!(
            tokens,
            vec![
                Token::Comment(r#"?xml version="1.0"?"#.to_string()),
                start("p", &[])
            ]
        );
    }

    #[test]
    fn test_tokenize_non_ascii_declaration_is_bogus_comment() {
        let tokens = tokenize("<!éééééé><p>x");
        assert_eq!(
            tokens,
            vec![
                Token::Comment("éééééé".to_string()),
                start("p", &[]),
                text("x")
            ]
        );
        assert_eq!(tokenize("<!DOCTYPÉ>"), vec![Token::Comment("DOCTYPÉ".to_string())]);
    }

    #[test]
    fn test_tokenize_script_is_raw_text() {
        let tokens = tokenize("<script>if (a < b) { x = '</div>'; }</ScRiPt><p>");
        assert_eq!(
            tokens,
            vec![
                start("script", &[]),
                text("if (a < b) { x = '</div>'; }"),
                end("script"),
                start("p", &[]),
            ]
        );
    }

    #[test]
    fn test_tokenize_raw_text_close_needs_boundary() {
        let tokens = tokenize("<title>a</titles></title>");
        assert_eq!(
            tokens,
            vec![start("title", &[]), text("a</titles>"), end("title")]
        );
    }

    #[test]
    fn test_tokenize_unclosed_script_gets_implicit_end() {
        let tokens = tokenize("<script>var x = 1;");
        assert_eq!(
            tokens,
            vec![start("script", &[]), text("var x = 1;"), end("script")]
        );
    }

    #[test]
    fn test_tokenize_unterminated_quoted_value_at_eof_keeps_element() {
        let tokens = tokenize(r#"<div id=x class="never"#);
        assert_eq!(tokens, vec![start("div", &[("id", "x")])]);
    }

    #[test]
    fn test_tokenize_empty_end_tag_is_ignored() {
        let tokens = tokenize("a</>b");
        assert_eq!(tokens, vec![text("ab")]);
    }

    #[test]
    fn test_tokenize_preserves_utf8_text() {
        let tokens = tokenize("<p>café – naïve 😊</p>");
        assert!(tokens.contains(&text("café – naïve 😊")));
    }

    #[test]
    fn test_tokenize_entities_stay_encoded() {
        let tokens = tokenize("<p title=\"a&amp;b\">x &lt; y</p>");
        assert_eq!(
            tokens,
            vec![
                start("p", &[("title", "a&amp;b")]),
                text("x &lt; y"),
                end("p")
            ]
        );
    }
}
