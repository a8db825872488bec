/*
[INPUT]:  Parsed subcommands and a ready Session
[OUTPUT]: One-shot, interactive and config-wizard flows
[POS]:    CLI layer module root
[UPDATE]: When adding subcommands
*/

pub mod commands;
pub mod init;
pub mod interactive;
