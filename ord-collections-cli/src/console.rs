use std::fmt;
use std::io::{self, Write};

pub fn write_in_color<W: Write>(out: &mut W, args: fmt::Arguments, color_code: u8) -> io::Result<()> {
    out.write_fmt(format_args!("\x1b[{}m{}\x1b[0m", color_code, args))
}

// Diagnostics go to stderr so stdout only carries results.
pub fn eprint_in_color(args: fmt::Arguments, color_code: u8) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    write_in_color(&mut handle, args, color_code).unwrap();
}
