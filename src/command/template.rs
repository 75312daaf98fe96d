//! URL template tokenizer
//!
//! Templates are `/`-separated paths. A segment is a placeholder only when it
//! equals one of the fixed tokens exactly; everything else is literal text.
//! Substituted values are written once and never scanned again.

use super::types::{Placeholder, SubstitutionContext};

/// One segment of a url template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Placeholder),
}

/// Tokenized url template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> UrlTemplate<'a> {
    pub fn parse(template: &'a str) -> Self {
        let segments = template
            .split('/')
            .map(|segment| match Placeholder::from_token(segment) {
                Some(placeholder) => Segment::Placeholder(placeholder),
                None => Segment::Literal(segment),
            })
            .collect();

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Placeholders referenced by the template, in template order
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(*p),
            Segment::Literal(_) => None,
        })
    }

    pub fn references(&self, placeholder: Placeholder) -> bool {
        self.placeholders().any(|p| p == placeholder)
    }

    /// Literal segments that look like placeholders but are outside the fixed set
    pub fn stray_tokens(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Literal(text) if text.starts_with(':') => Some(*text),
            _ => None,
        })
    }

    /// Render with the context's values; unfilled placeholders keep their token text
    pub fn render(&self, context: &SubstitutionContext) -> String {
        let mut url = String::new();
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                url.push('/');
            }
            match segment {
                Segment::Literal(text) => url.push_str(text),
                Segment::Placeholder(p) => url.push_str(context.get(*p).unwrap_or(p.token())),
            }
        }
        url
    }
}
