//! Lossless round-trip of captured IQ buffers.
//!
//! A capture is stored as a flat sequence of little-endian `f32`
//! values, alternating real and imaginary parts, one pair per complex
//! sample. This matches the layout the capture path writes and carries
//! no header: the sample rate and center frequency travel in the
//! `Config` that accompanies a capture.

use crate::error::ScopeError;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use num::Complex;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Writes a sample buffer as interleaved little-endian `f32` pairs.
pub fn write_iq<W: Write>(
    writer: &mut W,
    samples: &[Complex<f32>],
) -> Result<(), ScopeError> {
    for samp in samples {
        writer.write_f32::<LittleEndian>(samp.re)?;
        writer.write_f32::<LittleEndian>(samp.im)?;
    }
    Ok(())
}

/// Reads a whole capture back into a sample buffer.
///
/// A file that ends mid-sample (an odd number of `f32` values) is
/// corrupt and reported as an I/O error rather than silently truncated.
pub fn read_iq<R: Read>(
    reader: &mut R,
) -> Result<Vec<Complex<f32>>, ScopeError> {
    let mut samples = Vec::new();
    loop {
        let re = match reader.read_f32::<LittleEndian>() {
            Ok(re) => re,
            Err(ref err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                break
            }
            Err(err) => return Err(err.into()),
        };
        let im = reader.read_f32::<LittleEndian>()?;
        samples.push(Complex::new(re, im));
    }
    Ok(samples)
}

/// Writes a capture to the given path.
///
/// # Examples
///
/// ```no_run
/// use iqscope::io::raw_iq::write_iq_file;
/// use num::Complex;
///
/// let capture = vec![Complex::new(0.5_f32, -0.5); 1024];
/// write_iq_file("/tmp/capture.iq", &capture).unwrap();
/// ```
pub fn write_iq_file<P: AsRef<Path>>(
    path: P,
    samples: &[Complex<f32>],
) -> Result<(), ScopeError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_iq(&mut writer, samples)?;
    writer.flush()?;
    Ok(())
}

/// Reads a capture from the given path.
pub fn read_iq_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Complex<f32>>, ScopeError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_iq(&mut reader)
}

#[cfg(test)]
mod test {
    use crate::io::raw_iq::{read_iq, write_iq};
    use num::Complex;
    use std::io::Cursor;

    #[test]
    fn test_round_trip_is_lossless() {
        let samples: Vec<Complex<f32>> = (0..256)
            .map(|i| {
                Complex::new((i as f32 * 0.17).sin(), (i as f32 * 0.09).cos())
            })
            .collect();
        let mut buffer = Vec::new();
        write_iq(&mut buffer, &samples).unwrap();
        assert_eq!(buffer.len(), samples.len() * 8);

        let restored = read_iq(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(restored, samples);
    }

    #[test]
    fn test_empty_capture() {
        let mut buffer = Vec::new();
        write_iq(&mut buffer, &[]).unwrap();
        assert!(read_iq(&mut Cursor::new(buffer)).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_capture_is_an_error() {
        // 6 bytes: one full f32 plus a dangling half value.
        let bytes = vec![0_u8; 6];
        assert!(read_iq(&mut Cursor::new(bytes)).is_err());
    }
}
