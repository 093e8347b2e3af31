//! Binary dataset snapshot.
//!
//! Layout (little-endian):
//! `MAGIC | version u32 | n u32 | n × (len u32, utf8 title) | n × (len u32, utf8 genre)
//!  | n×n f32 scores (row-major) | sha256 of everything before it`

use crate::domain::error::LoadError;
use crate::domain::model::Dataset;
use crate::domain::ports::DatasetSource;
use ndarray::Array2;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

const MAGIC: &[u8; 8] = b"ANIREC01";
const VERSION: u32 = 1;
const DIGEST_LEN: usize = 32;

pub struct BinaryDatasetSource {
    path: PathBuf,
}

impl BinaryDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, dataset: &Dataset) -> Result<(), LoadError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        save(dataset, &self.path).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> LoadError {
        LoadError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl DatasetSource for BinaryDatasetSource {
    fn load(&self) -> Result<Dataset, LoadError> {
        let (titles, genres, similarity) = match load(&self.path) {
            Ok(parts) => parts,
            Err(err) if is_malformed(&err) => {
                return Err(LoadError::Malformed {
                    path: self.path.display().to_string(),
                    message: err.to_string(),
                })
            }
            Err(source) => return Err(self.io_error(source)),
        };
        Dataset::from_matrix(titles, genres, similarity).map_err(|source| LoadError::Invalid {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

pub fn save<P: AsRef<Path>>(dataset: &Dataset, path: P) -> io::Result<()> {
    let n = dataset.len();
    let mut body: Vec<u8> = Vec::with_capacity(MAGIC.len() + 8 + n * n * 4);

    body.write_all(MAGIC)?;
    write_u32(&mut body, VERSION)?;
    write_u32(&mut body, to_u32(n)?)?;

    for title in dataset.titles() {
        write_str(&mut body, title)?;
    }
    for genre in dataset.genres() {
        write_str(&mut body, genre)?;
    }
    for &score in dataset.similarity().iter() {
        write_f32(&mut body, score)?;
    }

    let digest = Sha256::digest(&body);
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&body)?;
    writer.write_all(&digest)?;
    writer.flush()
}

pub fn load<P: AsRef<Path>>(path: P) -> io::Result<(Vec<String>, Vec<String>, Array2<f32>)> {
    let bytes = fs::read(path)?;
    if bytes.len() < MAGIC.len() + DIGEST_LEN {
        return Err(invalid("snapshot is truncated"));
    }
    let (body, digest) = bytes.split_at(bytes.len() - DIGEST_LEN);
    if Sha256::digest(body).as_slice() != digest {
        return Err(invalid("checksum mismatch"));
    }

    let mut reader = body;
    let mut magic = [0u8; 8];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(invalid("invalid magic"));
    }

    let version = read_u32(&mut reader)?;
    if version != VERSION {
        return Err(invalid("unsupported version"));
    }

    let n = read_u32(&mut reader)? as usize;
    let mut titles = Vec::with_capacity(n.min(reader.len()));
    for _ in 0..n {
        titles.push(read_str(&mut reader)?);
    }
    let mut genres = Vec::with_capacity(n.min(reader.len()));
    for _ in 0..n {
        genres.push(read_str(&mut reader)?);
    }

    let cells = n
        .checked_mul(n)
        .filter(|cells| cells.checked_mul(4) == Some(reader.len()))
        .ok_or_else(|| invalid("score block size does not match item count"))?;
    let mut scores = Vec::with_capacity(cells);
    for _ in 0..cells {
        scores.push(read_f32(&mut reader)?);
    }
    let similarity = Array2::from_shape_vec((n, n), scores)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    Ok((titles, genres, similarity))
}

/// Errors that mean the bytes were read but do not form a snapshot.
fn is_malformed(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof
    )
}

fn invalid(message: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

fn to_u32(value: usize) -> io::Result<u32> {
    u32::try_from(value).map_err(|_| invalid("value does not fit in u32"))
}

fn write_u32<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

fn read_u32<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn write_f32<W: Write>(writer: &mut W, value: f32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

fn read_f32<R: Read>(reader: &mut R) -> io::Result<f32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

fn write_str<W: Write>(writer: &mut W, value: &str) -> io::Result<()> {
    write_u32(writer, to_u32(value.len())?)?;
    writer.write_all(value.as_bytes())
}

fn read_str(reader: &mut &[u8]) -> io::Result<String> {
    let len = read_u32(reader)? as usize;
    let current = *reader;
    if len > current.len() {
        return Err(invalid("string length exceeds snapshot"));
    }
    let (head, rest) = current.split_at(len);
    *reader = rest;
    String::from_utf8(head.to_vec()).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Dataset {
        Dataset::new(
            vec![
                "Cowboy Bebop".to_string(),
                "Steins;Gate".to_string(),
                "Mushishi".to_string(),
            ],
            vec![
                "Action, Sci-Fi".to_string(),
                "Sci-Fi, Thriller".to_string(),
                "Slice of Life".to_string(),
            ],
            vec![
                vec![1.0, 0.4, 0.1],
                vec![0.4, 1.0, 0.0],
                vec![0.1, 0.0, 1.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_snapshot_preserves_dataset() {
        let dir = tempdir().unwrap();
        let source = BinaryDatasetSource::new(dir.path().join("anime.bin"));
        let dataset = sample();
        source.save(&dataset).unwrap();

        let loaded = source.load().unwrap();
        assert_eq!(loaded.titles(), dataset.titles());
        assert_eq!(loaded.genres(), dataset.genres());
        assert_eq!(loaded.similarity(), dataset.similarity());
        assert_eq!(loaded.position("Mushishi"), Some(2));
    }

    #[test]
    fn test_corrupted_snapshot_fails_checksum() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("anime.bin");
        save(&sample(), &path).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        let middle = bytes.len() / 2;
        bytes[middle] ^= 0xff;
        fs::write(&path, bytes).unwrap();

        let err = BinaryDatasetSource::new(&path).load().unwrap_err();
        match err {
            LoadError::Malformed { message, .. } => assert!(message.contains("checksum")),
            other => panic!("unexpected error: {other}"),
        }
    }

    fn header(magic: &[u8], version: u32, n: u32) -> Vec<u8> {
        let mut body = magic.to_vec();
        body.extend_from_slice(&version.to_le_bytes());
        body.extend_from_slice(&n.to_le_bytes());
        body
    }

    /// Append a valid digest so loading gets past the checksum.
    fn write_digested(path: &Path, mut body: Vec<u8>) {
        let digest = Sha256::digest(&body);
        body.extend_from_slice(&digest);
        fs::write(path, body).unwrap();
    }

    fn assert_malformed(path: &Path, expected: &str) {
        match BinaryDatasetSource::new(path).load() {
            Err(LoadError::Malformed { message, .. }) => assert_eq!(message, expected),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_magic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("anime.bin");
        write_digested(&path, header(b"NOTANIME", VERSION, 0));

        let err = load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_malformed(&path, "invalid magic");
    }

    #[test]
    fn test_unsupported_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("anime.bin");
        write_digested(&path, header(MAGIC, 2, 0));

        assert_malformed(&path, "unsupported version");
    }

    #[test]
    fn test_score_block_must_match_item_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("anime.bin");
        let mut body = header(MAGIC, VERSION, 3);
        for value in ["A", "B", "C", "g", "g", "g"] {
            write_str(&mut body, value).unwrap();
        }
        for score in [1.0f32, 0.5, 0.5, 1.0] {
            write_f32(&mut body, score).unwrap();
        }
        write_digested(&path, body);

        assert_malformed(&path, "score block size does not match item count");
    }

    #[test]
    fn test_body_ending_inside_titles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("anime.bin");
        let mut body = header(MAGIC, VERSION, 2);
        write_str(&mut body, "A").unwrap();
        write_digested(&path, body);

        let err = BinaryDatasetSource::new(&path).load().unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_truncated_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("anime.bin");
        fs::write(&path, b"ANIREC").unwrap();
        let err = BinaryDatasetSource::new(&path).load().unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = BinaryDatasetSource::new(dir.path().join("absent.bin"))
            .load()
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
