//! CLI parse and run tests.

use super::{CheckCli, ImportCli};
use clap::Parser;


pub(super) fn parse_check(args: &[&str]) -> CheckCli {
    CheckCli::try_parse_from(args).unwrap()
}

pub(super) fn parse_import(args: &[&str]) -> ImportCli {
    ImportCli::try_parse_from(args).unwrap()
}
