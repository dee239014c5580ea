// ============================================================================
// INLINE MARKUP - Formato básico dentro de textos traducidos
// ============================================================================
// Lista permitida: <br>, <br/>, <strong>...</strong>, <i>...</i>.
// Cualquier otra etiqueta se conserva como texto literal; nunca se inyecta
// HTML en el documento.
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    LineBreak,
    Strong(Vec<Segment>),
    Italic(Vec<Segment>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tag {
    Strong,
    Italic,
}

impl Tag {
    fn open_literal(&self) -> &'static str {
        match self {
            Tag::Strong => "<strong>",
            Tag::Italic => "<i>",
        }
    }

    fn close_literal(&self) -> &'static str {
        match self {
            Tag::Strong => "</strong>",
            Tag::Italic => "</i>",
        }
    }

    fn wrap(&self, children: Vec<Segment>) -> Segment {
        match self {
            Tag::Strong => Segment::Strong(children),
            Tag::Italic => Segment::Italic(children),
        }
    }
}

enum Token<'a> {
    Text(&'a str),
    LineBreak,
    Open(Tag),
    Close(Tag),
}

fn classify(tag: &str) -> Option<Token<'static>> {
    let inner = tag
        .strip_prefix('<')?
        .strip_suffix('>')?
        .trim()
        .to_ascii_lowercase();
    let (closing, name) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest.trim().to_string()),
        None => (false, inner.trim_end_matches('/').trim().to_string()),
    };
    match (closing, name.as_str()) {
        (false, "br") => Some(Token::LineBreak),
        (false, "strong") => Some(Token::Open(Tag::Strong)),
        (true, "strong") => Some(Token::Close(Tag::Strong)),
        (false, "i") => Some(Token::Open(Tag::Italic)),
        (true, "i") => Some(Token::Close(Tag::Italic)),
        _ => None,
    }
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let Some(start) = rest.find('<') else {
            tokens.push(Token::Text(rest));
            break;
        };
        if start > 0 {
            tokens.push(Token::Text(&rest[..start]));
        }
        let candidate = &rest[start..];
        let Some(end) = candidate.find('>') else {
            tokens.push(Token::Text(candidate));
            break;
        };
        // `<` suelto: otro `<` antes del `>` => sólo este carácter es texto
        if candidate[1..end].contains('<') {
            tokens.push(Token::Text("<"));
            rest = &candidate[1..];
            continue;
        }
        let tag = &candidate[..=end];
        tokens.push(classify(tag).unwrap_or(Token::Text(tag)));
        rest = &candidate[end + 1..];
    }
    tokens
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Text(previous)) = segments.last_mut() {
        previous.push_str(text);
    } else {
        segments.push(Segment::Text(text.to_string()));
    }
}

fn push_segment(segments: &mut Vec<Segment>, segment: Segment) {
    match segment {
        Segment::Text(text) => push_text(segments, &text),
        other => segments.push(other),
    }
}

/// Convertir un texto traducido en segmentos tipados
pub fn parse_inline(input: &str) -> Vec<Segment> {
    // Pila de (etiqueta abierta, hijos); la base no tiene etiqueta
    let mut stack: Vec<(Option<Tag>, Vec<Segment>)> = vec![(None, Vec::new())];

    for token in tokenize(input) {
        match token {
            Token::Text(text) => {
                if let Some((_, segments)) = stack.last_mut() {
                    push_text(segments, text);
                }
            }
            Token::LineBreak => {
                if let Some((_, segments)) = stack.last_mut() {
                    segments.push(Segment::LineBreak);
                }
            }
            Token::Open(tag) => stack.push((Some(tag), Vec::new())),
            Token::Close(tag) => {
                let matches_top = stack.len() > 1 && stack.last().map(|(open, _)| *open) == Some(Some(tag));
                if matches_top {
                    if let Some((_, children)) = stack.pop() {
                        if let Some((_, parent)) = stack.last_mut() {
                            parent.push(tag.wrap(children));
                        }
                    }
                } else if let Some((_, segments)) = stack.last_mut() {
                    push_text(segments, tag.close_literal());
                }
            }
        }
    }

    // Etiquetas sin cerrar: se devuelven como texto literal
    while stack.len() > 1 {
        if let Some((tag, children)) = stack.pop() {
            if let Some((_, parent)) = stack.last_mut() {
                if let Some(tag) = tag {
                    push_text(parent, tag.open_literal());
                }
                for child in children {
                    push_segment(parent, child);
                }
            }
        }
    }

    stack.pop().map(|(_, segments)| segments).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    #[test]
    fn plain_strings_pass_through() {
        assert_eq!(parse_inline("Premium timber"), vec![text("Premium timber")]);
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn allowed_tags_become_segments() {
        assert_eq!(
            parse_inline("Line one<br/>the <strong>EUDR</strong> and <i>Lacey</i>"),
            vec![
                text("Line one"),
                Segment::LineBreak,
                text("the "),
                Segment::Strong(vec![text("EUDR")]),
                text(" and "),
                Segment::Italic(vec![text("Lacey")]),
            ]
        );
    }

    #[test]
    fn br_variants_and_case() {
        assert_eq!(
            parse_inline("a<br>b<BR />c"),
            vec![text("a"), Segment::LineBreak, text("b"), Segment::LineBreak, text("c")]
        );
    }

    #[test]
    fn nested_formatting() {
        assert_eq!(
            parse_inline("<strong>Risk <i>assessment</i>:</strong> first"),
            vec![
                Segment::Strong(vec![text("Risk "), Segment::Italic(vec![text("assessment")]), text(":")]),
                text(" first"),
            ]
        );
    }

    #[test]
    fn other_tags_stay_literal() {
        assert_eq!(
            parse_inline("<script>alert(1)</script><a href=\"x\">link</a>"),
            vec![text("<script>alert(1)</script><a href=\"x\">link</a>")]
        );
    }

    #[test]
    fn unbalanced_tags_stay_literal() {
        assert_eq!(parse_inline("a </strong> b"), vec![text("a </strong> b")]);
        assert_eq!(
            parse_inline("<strong>open <i>x</i>"),
            vec![text("<strong>open "), Segment::Italic(vec![text("x")])]
        );
        assert_eq!(parse_inline("3 < 5"), vec![text("3 < 5")]);
    }

    #[test]
    fn stray_less_than_keeps_following_tags() {
        assert_eq!(
            parse_inline("Moisture < 20% for <strong>kiln-dried</strong> timber"),
            vec![
                text("Moisture < 20% for "),
                Segment::Strong(vec![text("kiln-dried")]),
                text(" timber"),
            ]
        );
        assert_eq!(
            parse_inline("a << b<br>c"),
            vec![text("a << b"), Segment::LineBreak, text("c")]
        );
    }
}
