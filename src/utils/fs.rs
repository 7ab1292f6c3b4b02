use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> std::io::Result<String> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
