// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use tracing_core::LevelFilter;

use crate::DecodePolicy;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "wtf8")]
#[command(about = "🔤 Encode and decode WTF-8, UTF-8 and lossy UTF-8 bytes")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  wtf8 [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        default_value_t = LevelFilter::OFF,
        help = "Log to stderr at this level: off, error, warn, info, debug, trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "Decode hex bytes into code points\n💡 Eg: `wtf8 decode --hex 61eda080 --policy replace`"
    )]
    Decode {
        #[arg(long, help = "Bytes to decode, as hex. Whitespace is ignored")]
        hex: HexBytes,

        #[arg(
            long,
            short = 'p',
            default_value_t = DecodePolicy::Accept,
            help = "accept (wtf8), reject (utf8) or replace (utf8-sloppy)"
        )]
        policy: DecodePolicy,

        #[arg(long, default_value_t = 0, help = "First byte of the range")]
        start: usize,

        #[arg(long, help = "One past the last byte of the range [default: length]")]
        end: Option<usize>,
    },

    #[clap(
        about = "Encode text as hex bytes, `\\u{D800}` escapes may be used for surrogates\n💡 Eg: `wtf8 encode 'a\\u{D800}'`"
    )]
    Encode {
        text: String,

        #[arg(
            long,
            short = 'p',
            default_value_t = DecodePolicy::Accept,
            help = "accept keeps unpaired surrogates, reject fails on them, replace writes U+FFFD"
        )]
        policy: DecodePolicy,
    },

    #[clap(about = "Check that hex bytes decode under a policy\n💡 Eg: `wtf8 validate --hex eda080 -p reject`")]
    Validate {
        #[arg(long, help = "Bytes to check, as hex. Whitespace is ignored")]
        hex: HexBytes,

        #[arg(
            long,
            short = 'p',
            default_value_t = DecodePolicy::Accept,
            help = "accept (wtf8), reject (utf8) or replace (utf8-sloppy)"
        )]
        policy: DecodePolicy,
    },
}

/// Bytes given on the command line as hex, eg: `ed a0 80`. A newtype so that clap
/// doesn't treat the `Vec<u8>` as a list of arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

impl FromStr for HexBytes {
    type Err = hex::FromHexError;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let digits: String = arg.chars().filter(|it| !it.is_whitespace()).collect();
        hex::decode(digits).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_command_is_well_formed() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_hex_bytes_ignores_whitespace() {
        assert_eq2!(
            HexBytes::from_str("61 ed a0\t80"),
            Ok(HexBytes(vec![0x61, 0xED, 0xA0, 0x80]))
        );
        assert_eq2!(HexBytes::from_str(""), Ok(HexBytes(vec![])));
        assert!(HexBytes::from_str("abc").is_err());
        assert!(HexBytes::from_str("zz").is_err());
    }

    #[test]
    fn test_parse_decode_with_defaults() {
        let it = CLIArg::try_parse_from(["wtf8", "decode", "--hex", "6869"]).unwrap();
        assert_eq2!(it.global_options.log_level, LevelFilter::OFF);
        match it.command {
            CLICommand::Decode {
                hex,
                policy,
                start,
                end,
            } => {
                assert_eq2!(hex, HexBytes(vec![0x68, 0x69]));
                assert_eq2!(policy, DecodePolicy::Accept);
                assert_eq2!(start, 0);
                assert_eq2!(end, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_policy_aliases_and_global_log_level() {
        let it = CLIArg::try_parse_from([
            "wtf8",
            "validate",
            "--hex",
            "ff",
            "-p",
            "utf8-sloppy",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq2!(it.global_options.log_level, LevelFilter::DEBUG);
        match it.command {
            CLICommand::Validate { policy, .. } => {
                assert_eq2!(policy, DecodePolicy::Replace);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_policy_is_a_usage_error() {
        let result =
            CLIArg::try_parse_from(["wtf8", "encode", "hi", "--policy", "latin1"]);
        assert!(result.is_err());
    }
}
