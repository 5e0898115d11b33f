use colored::Colorize;
use shopkeep::api::{CmdMessage, MessageLevel};
use std::io::{self, Write};

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        write_message(out, message)?;
    }
    Ok(())
}

pub(super) fn write_message<W: Write>(out: &mut W, message: &CmdMessage) -> io::Result<()> {
    match message.level {
        MessageLevel::Success => writeln!(out, "{}", message.content.green()),
        MessageLevel::Warning => writeln!(out, "{}", message.content.yellow()),
        MessageLevel::Error => writeln!(out, "{}", message.content.red()),
    }
}
