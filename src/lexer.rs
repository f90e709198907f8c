mod token_kinds;
use std::{iter::Peekable, slice};

pub use token_kinds::*;

use crate::error::InvalidArgument;

/// One key as it appeared on the command line, with the value that followed
/// it, if any.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Param<'input> {
    pub key: &'input str,
    pub value: Option<&'input str>,
}

/// Splits an argument vector into `--key value` parameters.
///
/// Keys may repeat. A key followed directly by another key, or by the end of
/// the arguments, has no value. Iteration stops after the first error.
pub struct Tokenizer<'input, S> {
    args: Peekable<slice::Iter<'input, S>>,
    halted: bool,
}

impl<'input, S: AsRef<str>> Tokenizer<'input, S> {
    pub fn new(args: &'input [S]) -> Self {
        Self {
            args: args.iter().peekable(),
            halted: false,
        }
    }

    fn fail(&mut self, err: InvalidArgument) -> Option<Result<Param<'input>, InvalidArgument>> {
        self.halted = true;
        Some(Err(err))
    }
}

impl<'input, S: AsRef<str>> Iterator for Tokenizer<'input, S> {
    type Item = Result<Param<'input>, InvalidArgument>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let arg = self.args.next()?.as_ref();
        let key = match ArgToken::key_in(arg) {
            Some("") => return self.fail(InvalidArgument::EmptyKey),
            Some(key) => key,
            None => {
                return self.fail(InvalidArgument::UnprefixedKey {
                    token: arg.to_owned(),
                })
            }
        };
        let value = self
            .args
            .next_if(|next| !ArgToken::classify(next.as_ref()).is_key())
            .map(|next| next.as_ref());
        let param = Param { key, value };
        log::trace!("{param:?}");
        Some(Ok(param))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn param<'a>(key: &'a str, value: Option<&'a str>) -> Param<'a> {
        Param { key, value }
    }

    macro_rules! check_tokenizer_is_empty {
        ($tokenizer: expr) => {
            assert_eq!(None, $tokenizer.next())
        };
    }
    macro_rules! check_tokenizer_has_params {
        ($tokenizer: expr, $item: expr) => {
            assert_eq!(Some(Ok($item)), $tokenizer.next());
            check_tokenizer_is_empty!($tokenizer);
        };
        ($tokenizer: expr, $first:expr, $( $rest:expr ),+ $(,)?) => {
            assert_eq!(Some(Ok($first)), $tokenizer.next());
            check_tokenizer_has_params!($tokenizer, $($rest),+);
        };
    }

    macro_rules! make_test_case {
        ($name: ident, [$( $arg: expr ),*], []) => {
            #[test]
            fn $name() {
                let args: Vec<&str> = vec![$($arg),*];
                check_tokenizer_is_empty!(Tokenizer::new(&args));
            }
        };
        ($name: ident, [$( $arg: expr ),*], $( $expected_params: expr ),+ $(,)?) => {
            #[test]
            fn $name() {
                let args: Vec<&str> = vec![$($arg),*];
                let mut tokenizer = Tokenizer::new(&args);
                check_tokenizer_has_params!(tokenizer, $($expected_params),+);
            }
        };
    }

    make_test_case!(no_arguments, [], []);
    make_test_case!(
        single_pair,
        ["--output", "out.csv"],
        param("output", Some("out.csv"))
    );
    make_test_case!(
        repeated_key_yields_each_occurrence,
        ["--input", "a.csv", "--input", "b.csv"],
        param("input", Some("a.csv")),
        param("input", Some("b.csv")),
    );
    make_test_case!(
        short_and_long_prefixes,
        ["-p", "4", "--name", "job"],
        param("p", Some("4")),
        param("name", Some("job")),
    );
    make_test_case!(
        trailing_key_has_no_value,
        ["--output", "out.csv", "--verbose"],
        param("output", Some("out.csv")),
        param("verbose", None),
    );
    make_test_case!(
        key_followed_by_key_has_no_value,
        ["--verbose", "--input", "a.csv"],
        param("verbose", None),
        param("input", Some("a.csv")),
    );
    make_test_case!(
        negative_number_is_a_value,
        ["--offset", "-5", "--scale", "-.5e2"],
        param("offset", Some("-5")),
        param("scale", Some("-.5e2")),
    );
    make_test_case!(
        number_in_key_position_is_a_key,
        ["-5", "x", "--10", "-3"],
        param("5", Some("x")),
        param("10", Some("-3")),
    );
    make_test_case!(
        empty_string_is_a_value,
        ["--output", ""],
        param("output", Some(""))
    );

    #[test]
    fn value_without_key_is_rejected() {
        let args = ["a.csv", "--input", "b.csv"];
        let mut tokenizer = Tokenizer::new(&args);
        assert_eq!(
            Some(Err(InvalidArgument::UnprefixedKey {
                token: "a.csv".to_owned()
            })),
            tokenizer.next()
        );
        check_tokenizer_is_empty!(tokenizer);
    }

    #[test]
    fn second_value_for_one_key_is_rejected() {
        let args = ["--input", "a.csv", "b.csv"];
        let mut tokenizer = Tokenizer::new(&args);
        assert_eq!(Some(Ok(param("input", Some("a.csv")))), tokenizer.next());
        assert_eq!(
            Some(Err(InvalidArgument::UnprefixedKey {
                token: "b.csv".to_owned()
            })),
            tokenizer.next()
        );
        check_tokenizer_is_empty!(tokenizer);
    }

    #[test]
    fn unsigned_number_in_key_position_is_rejected() {
        let args = ["5", "x"];
        let mut tokenizer = Tokenizer::new(&args);
        assert_eq!(
            Some(Err(InvalidArgument::UnprefixedKey {
                token: "5".to_owned()
            })),
            tokenizer.next()
        );
        check_tokenizer_is_empty!(tokenizer);
    }

    #[test]
    fn empty_key_is_rejected() {
        let args = ["--", "value", "--input", "a.csv"];
        let mut tokenizer = Tokenizer::new(&args);
        assert_eq!(Some(Err(InvalidArgument::EmptyKey)), tokenizer.next());
        check_tokenizer_is_empty!(tokenizer);
    }

    #[test]
    fn accepts_owned_strings() {
        let args = vec!["--input".to_owned(), "a.csv".to_owned()];
        let params: Vec<_> = Tokenizer::new(&args).collect();
        assert_eq!(vec![Ok(param("input", Some("a.csv")))], params);
    }
}
