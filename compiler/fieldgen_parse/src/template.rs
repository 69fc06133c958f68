//! Recursive template argument parser.
//!
//! Grammar, over a whitespace-free string:
//!
//! ```text
//! node := NAME '<' arg (',' arg)* '>' ['*']
//! arg  := NAME '<' ...      (nested node)
//!       | TEXT              (leaf, any run without `<`, `>` or `,`)
//! ```
//!
//! Commas split arguments only at the level they appear in; a nested
//! `<...>` span is parsed as a whole before the enclosing list continues.
//! Leaves go through the primitive alias table as they are stored, so
//! serializing the finished tree yields a canonical string even for aliases
//! buried inside the instantiation.
//!
//! # Malformed Input
//!
//! Under [`GenericSyntax::Strict`](crate::GenericSyntax::Strict) every
//! structural problem is an error with the byte offset where it was noticed.
//! Under `Lenient` the parser closes whatever is still open at end of input,
//! drops empty arguments, reads stray text after a nested `>` as another
//! argument, and takes the outermost pointer flag from the final byte.

use fieldgen_ir::{TemplateArg, TemplateNode};

use crate::cursor::Cursor;
use crate::normalize::resolve_alias;
use crate::stack::ensure_sufficient_stack;
use crate::{FieldParseError, GenericErrorKind, ParseOptions};

/// Parse a generic instantiation such as `CUtlVector<CHandle<CBaseEntity>>`.
///
/// `source` must already be whitespace-free; the type normalizer guarantees
/// this for the string path.
pub fn parse_template(source: &str, options: &ParseOptions) -> Result<TemplateNode, FieldParseError> {
    TemplateParser::new(source, options)
        .parse_root()
        .map_err(|SyntaxError { offset, kind }| FieldParseError::MalformedGeneric {
            type_name: source.to_owned(),
            offset,
            kind,
        })
}

/// Position-tagged syntax error; the type string is attached by `parse_template`.
struct SyntaxError {
    offset: usize,
    kind: GenericErrorKind,
}

type SyntaxResult<T> = Result<T, SyntaxError>;

struct TemplateParser<'a> {
    cursor: Cursor<'a>,
    source: &'a str,
    strict: bool,
    max_depth: usize,
}

impl<'a> TemplateParser<'a> {
    fn new(source: &'a str, options: &ParseOptions) -> Self {
        TemplateParser {
            cursor: Cursor::new(source),
            source,
            strict: options.is_strict(),
            max_depth: options.max_template_depth,
        }
    }

    fn error(&self, kind: GenericErrorKind) -> SyntaxError {
        SyntaxError {
            offset: self.cursor.pos(),
            kind,
        }
    }

    fn parse_root(&mut self) -> SyntaxResult<TemplateNode> {
        // The outermost name is everything before the first `<`.
        loop {
            match self.cursor.skip_to_delim() {
                b'<' => break,
                0 => return Err(self.error(GenericErrorKind::ExpectedOpenBracket)),
                b'>' if self.strict => return Err(self.error(GenericErrorKind::UnexpectedClose)),
                b',' if self.strict => {
                    return Err(self.error(GenericErrorKind::UnexpectedSeparator));
                }
                _ => self.cursor.advance(),
            }
        }

        let mut root = self.parse_node(0, 1)?;

        if self.strict {
            if !self.cursor.is_eof() {
                let kind = match self.cursor.current() {
                    b'>' => GenericErrorKind::UnexpectedClose,
                    b',' => GenericErrorKind::UnexpectedSeparator,
                    _ => GenericErrorKind::TrailingInput,
                };
                return Err(self.error(kind));
            }
        } else {
            root.is_pointer = self.source.ends_with('*');
        }

        Ok(root)
    }

    /// Parse one instantiation. The cursor is on its `<`; the name runs from
    /// `name_start` to the cursor. On return the cursor is past the closing
    /// `>` and its pointer marker, if any.
    fn parse_node(&mut self, name_start: usize, depth: usize) -> SyntaxResult<TemplateNode> {
        let name = self.cursor.slice_from(name_start);
        if self.strict && name.is_empty() {
            return Err(self.error(GenericErrorKind::MissingTypeName));
        }
        if depth > self.max_depth {
            return Err(self.error(GenericErrorKind::TooDeep {
                limit: self.max_depth,
            }));
        }
        self.cursor.advance(); // <

        let mut node = TemplateNode::new(name);
        loop {
            let arg_start = self.cursor.pos();
            match self.cursor.skip_to_delim() {
                b'<' => {
                    let child = ensure_sufficient_stack(|| self.parse_node(arg_start, depth + 1))?;
                    node.arguments.push(TemplateArg::Node(child));

                    if self.cursor.is_eof() {
                        return self.close_at_eof(node);
                    }
                    match self.cursor.current() {
                        b',' => self.cursor.advance(),
                        b'>' => {
                            self.close(&mut node);
                            return Ok(node);
                        }
                        _ if self.strict => return Err(self.error(GenericErrorKind::TrailingInput)),
                        // Lenient: whatever follows is read as the next argument.
                        _ => {}
                    }
                }
                b',' => {
                    self.push_leaf(&mut node, arg_start)?;
                    self.cursor.advance();
                }
                b'>' => {
                    self.push_leaf(&mut node, arg_start)?;
                    self.close(&mut node);
                    return Ok(node);
                }
                _ => {
                    if !self.strict {
                        self.push_leaf(&mut node, arg_start)?;
                    }
                    return self.close_at_eof(node);
                }
            }
        }
    }

    /// Consume the closing `>` and an optional pointer marker.
    fn close(&mut self, node: &mut TemplateNode) {
        self.cursor.advance(); // >
        if self.cursor.eat(b'*') {
            node.is_pointer = true;
        }
    }

    /// Input ended inside an argument list.
    fn close_at_eof(&self, node: TemplateNode) -> SyntaxResult<TemplateNode> {
        if self.strict {
            Err(self.error(GenericErrorKind::UnclosedBracket))
        } else {
            Ok(node)
        }
    }

    /// Store the leaf between `start` and the cursor, alias-resolved.
    fn push_leaf(&self, node: &mut TemplateNode, start: usize) -> SyntaxResult<()> {
        let text = self.cursor.slice_from(start);
        if text.is_empty() {
            return if self.strict {
                Err(self.error(GenericErrorKind::EmptyArgument))
            } else {
                Ok(())
            };
        }
        node.arguments.push(TemplateArg::Leaf(resolve_alias(text)));
        Ok(())
    }
}
