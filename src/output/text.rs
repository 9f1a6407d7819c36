use std::io::{self, Write};

use crate::error::AppResult;

pub fn print(text: &str) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}
