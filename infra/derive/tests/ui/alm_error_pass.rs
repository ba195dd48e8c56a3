use alm_derive::alm_error;
use std::borrow::Cow;

#[alm_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(literal: &str) -> Result<u64, DemoError> {
    literal.parse::<u64>().context("Parsing literal")
}

fn main() {
    let _ = parse("1000");
}
