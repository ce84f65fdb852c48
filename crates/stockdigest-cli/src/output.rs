use std::io::Write;

use serde_json::Value;

use crate::error::CliError;

pub fn render(data: &Value, pretty: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    write_json(&mut stdout.lock(), data, pretty)
}

fn write_json(writer: &mut impl Write, data: &Value, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    writeln!(writer, "{payload}")?;
    Ok(())
}
