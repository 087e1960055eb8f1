// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::debug;

use crate::{CLIArg, CLICommand, decode, encode_with_policy, parse_escaped_text,
            validate};

/// Run one command and return what the binary prints to stdout. Codec errors are
/// returned as [`miette::Report`]s, so their diagnostic code and help reach the user.
///
/// # Errors
///
/// Any [`crate::DecodeError`], [`crate::EncodeError`] or
/// [`crate::TextEscapeError`] raised by the command.
pub fn run(cli_arg: CLIArg) -> miette::Result<String> {
    debug!(command = ?cli_arg.command, "running");

    match cli_arg.command {
        CLICommand::Decode {
            hex,
            policy,
            start,
            end,
        } => {
            let bytes = hex.0;
            let end = end.unwrap_or(bytes.len());
            let code_points = decode(&bytes, start, end, policy)?;
            Ok(format!(
                "code points: {code_points}\ntext: {}",
                code_points.to_string_lossy()
            ))
        }
        CLICommand::Encode { text, policy } => {
            let code_points = parse_escaped_text(&text)?;
            let bytes = encode_with_policy(&code_points, policy)?;
            Ok(hex::encode(bytes))
        }
        CLICommand::Validate { hex, policy } => {
            let bytes = hex.0;
            validate(&bytes, 0, bytes.len(), policy)?;
            Ok(format!("valid under {policy}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn run_args(args: &[&str]) -> miette::Result<String> {
        let mut argv = vec!["wtf8"];
        argv.extend_from_slice(args);
        run(CLIArg::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_decode() {
        assert_eq2!(
            run_args(&["decode", "--hex", "61eda080"]).unwrap(),
            "code points: U+0061 U+D800\ntext: a\u{FFFD}"
        );
        assert_eq2!(
            run_args(&["decode", "--hex", "61eda080", "-p", "replace"]).unwrap(),
            "code points: U+0061 U+FFFD U+FFFD U+FFFD\ntext: a\u{FFFD}\u{FFFD}\u{FFFD}"
        );
        assert_eq2!(
            run_args(&["decode", "--hex", "6173636969", "--start", "4"]).unwrap(),
            "code points: U+0069\ntext: i"
        );
    }

    #[test_case(&["decode", "--hex", "eda080", "-p", "reject"], "invalid UTF-8 string" ; "reject surrogate")]
    #[test_case(&["decode", "--hex", "c0", "-p", "accept"], "invalid WTF-8 string" ; "accept overlong")]
    #[test_case(&["decode", "--hex", "61", "--end", "5"], "array element access out of bounds" ; "end past length")]
    #[test_case(&["encode", "\\u{DC00}", "-p", "reject"], "string contains an unpaired surrogate" ; "reject encode")]
    #[test_case(&["validate", "--hex", "ff", "-p", "wtf8"], "invalid WTF-8 string" ; "validate")]
    fn test_errors(args: &[&str], expected: &str) {
        let report = run_args(args).unwrap_err();
        assert_eq2!(report.to_string(), expected);
    }

    #[test]
    fn test_encode() {
        assert_eq2!(run_args(&["encode", "hi"]).unwrap(), "6869");
        assert_eq2!(
            run_args(&["encode", "a\\u{D83D}\\u{DE00}"]).unwrap(),
            "61f09f9880"
        );
        assert_eq2!(run_args(&["encode", "\\u{D800}"]).unwrap(), "eda080");
        assert_eq2!(
            run_args(&["encode", "\\u{D800}", "-p", "replace"]).unwrap(),
            "efbfbd"
        );
    }

    #[test]
    fn test_validate() {
        assert_eq2!(
            run_args(&["validate", "--hex", "ff", "-p", "replace"]).unwrap(),
            "valid under replace"
        );
        assert_eq2!(
            run_args(&["validate", "--hex", "eda080"]).unwrap(),
            "valid under accept"
        );
    }
}
