use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

use flate2::read::MultiGzDecoder;

pub fn open<P>(src: P) -> io::Result<Box<dyn BufRead>>
where
    P: AsRef<Path>,
{
    let file = File::open(src.as_ref())?;

    let reader: Box<dyn Read> = if is_gzip(src) {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };

    Ok(Box::new(BufReader::new(reader)))
}

/// Creates a writer to the given destination or, if there is none, stdout.
pub fn create<P>(dst: Option<P>) -> io::Result<Box<dyn Write>>
where
    P: AsRef<Path>,
{
    match dst {
        Some(dst) => {
            let file = File::create(dst)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => {
            let stdout = io::stdout().lock();
            Ok(Box::new(BufWriter::new(stdout)))
        }
    }
}

fn is_gzip<P>(src: P) -> bool
where
    P: AsRef<Path>,
{
    src.as_ref()
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false)
}
