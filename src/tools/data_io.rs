use log::debug;
use std::fs::{self, File};
use std::io::{self, Read, Write};

use super::cli::BwtOpts;

/// Read the whole input named in opts, or stdin.
pub fn read_input(opts: &BwtOpts) -> io::Result<Vec<u8>> {
    let data = match &opts.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    debug!("Read {} bytes of input", data.len());
    Ok(data)
}

/// Write all of `data` to the output named in opts, or stdout.
pub fn write_output(opts: &BwtOpts, data: &[u8]) -> io::Result<()> {
    match &opts.output {
        Some(path) => {
            let mut f_out = File::create(path)?;
            f_out.write_all(data)?;
            f_out.flush()?;
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(data)?;
            out.flush()?;
        }
    }
    debug!("Wrote {} bytes of output", data.len());
    Ok(())
}
