use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::utils::error::BoxResult;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Read a file, or stdin when the path is `-` or absent
pub fn read_input(path: Option<&Path>) -> BoxResult<String> {
    match path {
        Some(p) if p != Path::new("-") => read_file(p),
        _ => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Write to a file, or stdout when no path is given
pub fn write_output(path: Option<&Path>, contents: &str) -> BoxResult<()> {
    match path {
        Some(p) => write_file(p, contents),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(contents.as_bytes())?;
            handle.flush()?;
            Ok(())
        }
    }
}

/// Copy a file from source to destination
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> BoxResult<u64> {
    if let Some(parent) = to.as_ref().parent() {
        create_directory(parent)?;
    }

    let bytes_copied = fs::copy(from, to)?;
    Ok(bytes_copied)
}
