//! Object and array productions.
//!
//! Both follow the same shape: the opening bracket, then a first member tried
//! as a trial (so that `{}` and `[]` end the loop cleanly), then as long as a
//! `,` follows, another member that is *required*, then the closing bracket.
//! Requiring the member after a separator is what rejects `[1,]`.

use super::{Parser, Production};
use crate::value::{Array, Map, Value};

impl Parser<'_> {
    pub(crate) fn object(&mut self) -> Production<Value> {
        self.expect(b'{')?;
        self.nested(|p| {
            let mut map = Map::new();
            p.cursor.skip_whitespace();

            if let Some((key, value)) = p.attempt(Self::member)? {
                // Duplicate keys: last write wins, first position is kept.
                map.insert(key, value);
                while p.cursor.eat(b',') {
                    let (key, value) = p.member()?;
                    map.insert(key, value);
                }
            }

            p.expect(b'}')?;
            Ok(Value::Object(map))
        })
    }

    /// `ws string ws ':' element`
    fn member(&mut self) -> Production<(String, Value)> {
        self.cursor.skip_whitespace();
        let key = self.string()?;
        self.cursor.skip_whitespace();
        self.expect(b':')?;
        let value = self.element()?;
        Ok((key, value))
    }

    pub(crate) fn array(&mut self) -> Production<Value> {
        self.expect(b'[')?;
        self.nested(|p| {
            let mut array = Array::new();
            p.cursor.skip_whitespace();

            if let Some(first) = p.attempt(Self::element)? {
                array.push(first);
                while p.cursor.eat(b',') {
                    array.push(p.element()?);
                }
            }

            p.expect(b']')?;
            Ok(Value::Array(array))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::Failure;
    use super::*;
    use crate::{ParserOptions, SyntaxError};

    #[test]
    fn empty_containers() {
        assert_eq!(Parser::new("{ \n }").object().unwrap(), Value::Object(Map::new()));
        assert_eq!(Parser::new("[\t]").array().unwrap(), Value::Array(vec![]));
    }

    #[test]
    fn member_requires_colon() {
        let mut p = Parser::new(r#""k" , 1"#);
        assert!(matches!(p.member(), Err(Failure::Grammar)));
        let mut p = Parser::new(r#" "k" :  1 "#);
        assert_eq!(p.member().unwrap(), ("k".into(), Value::Number(1.0)));
        assert!(p.cursor.is_eof());
    }

    #[test]
    fn separator_commits_to_another_member() {
        assert!(matches!(Parser::new("[1,]").array(), Err(Failure::Grammar)));
        assert!(matches!(
            Parser::new(r#"{"a":1,}"#).object(),
            Err(Failure::Grammar)
        ));
        assert!(matches!(Parser::new("[,1]").array(), Err(Failure::Grammar)));
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let Value::Object(map) = Parser::new(r#"{"a":1,"b":2,"a":3}"#).object().unwrap() else {
            panic!("expected an object");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map.get_index(0), Some((&"a".to_string(), &Value::Number(3.0))));
        assert_eq!(map.get_index(1), Some((&"b".to_string(), &Value::Number(2.0))));
    }

    #[test]
    fn depth_limit_is_fatal() {
        let mut p = Parser::with_options(
            "[[[]]]",
            ParserOptions {
                max_depth: 2,
                ..Default::default()
            },
        );
        let Err(Failure::Fatal(error)) = p.array() else {
            panic!("expected a fatal failure");
        };
        assert_eq!(error.syntax_error(), &SyntaxError::DepthLimitExceeded(2));
        assert_eq!(error.offset, 2);
    }
}
