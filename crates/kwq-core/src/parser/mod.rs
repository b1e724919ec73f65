//! Keyword query compiler
//!
//! Turns a DIS-style boolean filter expression into a postfix sequence of
//! [`QueryElement`]s plus the list of fields selected by `RETURN` clauses.
//!
//! # Grammar
//!
//! ```text
//! query ::= expr (LOGOP expr)*
//! expr  ::= term | "(" query ")"
//! term  ::= IDENT RELOP (LITERAL | QUOTED_STRING)
//! ```
//!
//! `AND` binds tighter than `OR`, and `NOT` tighter than both. Operators of
//! equal precedence stay on the stack until the end of their scope.
//!
//! # Example
//!
//! ```rust
//! use kwq_core::parser::Parser;
//! use kwq_core::query::QueryElement;
//!
//! let parsed = Parser::parse("x < 1 or y > -2").unwrap();
//! assert_eq!(parsed.expression.len(), 7);
//! assert_eq!(parsed.expression[6], QueryElement::logop(kwq_core::parser::LogOp::Or));
//! assert!(parsed.selectors.is_empty());
//! ```

mod config;
mod lexer;
mod ops;
mod output;

pub use config::{ParserConfig, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
pub use lexer::Lexer;
pub use ops::{canonical_relop, LogOp};
pub use output::ParsedQuery;

use tracing::{debug, trace, warn};

use crate::error::{ExpressionParseError, ParseResult};
use crate::query::QueryElement;

/// Field name that turns a comparison into a selector
const RETURN_KEYWORD: &str = "RETURN";

/// Operator stack and outputs for one parenthesis level
#[derive(Debug, Default)]
struct Scope {
    operators: Vec<LogOp>,
    expression: Vec<QueryElement>,
    selectors: Vec<QueryElement>,
}

impl Scope {
    fn push_operator(&mut self, op: LogOp) {
        while let Some(&top) = self.operators.last() {
            if top.precedence() <= op.precedence() {
                break;
            }
            self.operators.pop();
            self.expression.push(QueryElement::logop(top));
        }
        self.operators.push(op);
    }

    fn merge(&mut self, nested: ParsedQuery) {
        self.expression.extend(nested.expression);
        self.selectors.extend(nested.selectors);
    }

    fn finish(mut self) -> ParseResult<ParsedQuery> {
        if !self.operators.is_empty() && self.expression.is_empty() {
            return Err(ExpressionParseError::OnlyLogicalOperators);
        }
        self.expression
            .extend(self.operators.drain(..).rev().map(QueryElement::logop));
        Ok(ParsedQuery {
            expression: self.expression,
            selectors: self.selectors,
        })
    }
}

/// Recursive keyword query parser
pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    /// Create a new parser from input string
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(input: &'a str, mut config: ParserConfig) -> Self {
        let limit = config.effective_max_depth();
        if limit < config.max_depth {
            warn!(
                requested = config.max_depth,
                limit, "max_depth above ceiling, capping"
            );
            config.max_depth = limit;
        }
        Self {
            input,
            lexer: Lexer::new(input),
            config,
        }
    }

    /// Parse input string directly
    pub fn parse(input: &'a str) -> ParseResult<ParsedQuery> {
        Parser::new(input).run()
    }

    /// Run the parser
    pub fn run(mut self) -> ParseResult<ParsedQuery> {
        if self.input.trim().is_empty() {
            return Ok(ParsedQuery::default());
        }

        let opens = self.input.matches('(').count();
        let closes = self.input.matches(')').count();
        if opens != closes {
            return Err(ExpressionParseError::UnbalancedParentheses);
        }

        let parsed = self.build(0)?;
        debug!(
            elements = parsed.expression.len(),
            selectors = parsed.selectors.len(),
            "compiled keyword query"
        );
        Ok(parsed)
    }

    /// Consume tokens until end of input or a closing parenthesis.
    fn build(&mut self, depth: usize) -> ParseResult<ParsedQuery> {
        trace!(depth, "entering scope");
        let mut scope = Scope::default();

        while let Some(token) = self.lexer.next_token()? {
            if let Some(op) = LogOp::from_token(token) {
                scope.push_operator(op);
            } else if token == "(" {
                if depth >= self.config.max_depth {
                    return Err(ExpressionParseError::NestingTooDeep {
                        limit: self.config.max_depth,
                    });
                }
                let nested = self.build(depth + 1)?;
                scope.merge(nested);
            } else if token == ")" {
                break;
            } else {
                self.add_term(token, &mut scope)?;
            }
        }

        trace!(depth, "leaving scope");
        scope.finish()
    }

    /// Consume the operator and literal following `element`.
    fn add_term(&mut self, element: &'a str, scope: &mut Scope) -> ParseResult<()> {
        let operator = self.lexer.next_token()?.ok_or_else(|| {
            ExpressionParseError::MissingRelationalOperator {
                element: element.to_string(),
            }
        })?;
        let canonical = canonical_relop(operator).ok_or_else(|| {
            ExpressionParseError::UnknownRelationalOperator {
                operator: operator.to_string(),
            }
        })?;
        let literal =
            self.lexer
                .next_token()?
                .ok_or_else(|| ExpressionParseError::MissingLiteral {
                    element: element.to_string(),
                    operator: operator.to_string(),
                })?;

        if element == RETURN_KEYWORD {
            scope.selectors.push(QueryElement::elem_name(literal));
            // A RETURN clause takes one adjacent connective with it: the one
            // before it if any, otherwise the one after it.
            if scope.operators.pop().is_none() {
                let skipped = self.lexer.next_token()?;
                trace!(?skipped, "dropped token after leading RETURN clause");
            }
        } else {
            scope.expression.push(QueryElement::elem_name(element));
            scope.expression.push(QueryElement::literal(literal));
            scope.expression.push(QueryElement::relop(canonical));
        }
        Ok(())
    }
}

/// Compile a keyword query with the default configuration.
pub fn parse(input: &str) -> ParseResult<ParsedQuery> {
    Parser::parse(input)
}

/// Compile a keyword query with a custom configuration.
pub fn parse_with_config(input: &str, config: &ParserConfig) -> ParseResult<ParsedQuery> {
    Parser::with_config(input, config.clone()).run()
}
