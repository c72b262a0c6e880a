//! Opening the input stream.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config::Input;

/// Open `input` for buffered reading.
///
/// On failure returns a message naming the path, ready for stderr.
pub fn open_input(input: &Input) -> Result<Box<dyn BufRead>, String> {
    match input {
        Input::Stdin => Ok(Box::new(io::stdin().lock())),
        Input::Path(path) => match File::open(path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(err) => Err(open_error_message(path, &err)),
        },
    }
}

fn open_error_message(path: &Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {err}"),
    }
}
