use crate::*;
use byteorder::BE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Error;
use std::io::ErrorKind;
use std::io::Read;
use std::io::Write;
use std::path::Path;

/// One finished round on disk: four equal-length series, gzip-compressed.
///
/// Body layout, big-endian:
///
/// ```text
/// MAGIC | u16 series
///       | { u16 name-len | name | u64 samples | f64 × samples } × series
///       | u16 0xFFFF
/// ```
///
/// The sample count travels with every series, so a round cut short
/// stores only what was played.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Archive {
    human_inputs: Vec<Action>,
    machine_inputs: Vec<Action>,
    human_scores: Vec<Cost>,
    machine_scores: Vec<Cost>,
}

impl Archive {
    pub const EXTENSION: &'static str = "frames.gz";
    pub const SERIES: [&'static str; 4] = [
        "human_inputs",
        "machine_inputs",
        "human_scores",
        "machine_scores",
    ];
    const MAGIC: &'static [u8] = b"NASHDUEL\n\xFF\r\n\0";
    const FOOTER: u16 = 0xFFFF;

    /// Panics if the series lengths differ.
    pub fn new(
        human_inputs: Vec<Action>,
        machine_inputs: Vec<Action>,
        human_scores: Vec<Cost>,
        machine_scores: Vec<Cost>,
    ) -> Self {
        assert!(human_inputs.len() == machine_inputs.len());
        assert!(human_inputs.len() == human_scores.len());
        assert!(human_inputs.len() == machine_scores.len());
        Self {
            human_inputs,
            machine_inputs,
            human_scores,
            machine_scores,
        }
    }
    pub fn len(&self) -> usize {
        self.human_inputs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.human_inputs.is_empty()
    }
    pub fn human_inputs(&self) -> &[Action] {
        &self.human_inputs
    }
    pub fn machine_inputs(&self) -> &[Action] {
        &self.machine_inputs
    }
    pub fn human_scores(&self) -> &[Cost] {
        &self.human_scores
    }
    pub fn machine_scores(&self) -> &[Cost] {
        &self.machine_scores
    }
    /// Series by its archive key.
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        match name {
            "human_inputs" => Some(&self.human_inputs),
            "machine_inputs" => Some(&self.machine_inputs),
            "human_scores" => Some(&self.human_scores),
            "machine_scores" => Some(&self.machine_scores),
            _ => None,
        }
    }
    fn series_mut(&mut self, name: &str) -> Option<&mut Vec<f64>> {
        match name {
            "human_inputs" => Some(&mut self.human_inputs),
            "machine_inputs" => Some(&mut self.machine_inputs),
            "human_scores" => Some(&mut self.human_scores),
            "machine_scores" => Some(&mut self.machine_scores),
            _ => None,
        }
    }

    /// Write to a new file; fails if the path already exists.
    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        self.encode(&mut encoder)?;
        encoder.finish()?.flush()
    }
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::decode(&mut GzDecoder::new(BufReader::new(file)))
    }

    /// Uncompressed body.
    pub fn encode<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(Self::MAGIC)?;
        writer.write_u16::<BE>(Self::SERIES.len() as u16)?;
        for name in Self::SERIES {
            let values = self.series(name).unwrap_or_default();
            writer.write_u16::<BE>(name.len() as u16)?;
            writer.write_all(name.as_bytes())?;
            writer.write_u64::<BE>(values.len() as u64)?;
            for &x in values {
                writer.write_f64::<BE>(x)?;
            }
        }
        writer.write_u16::<BE>(Self::FOOTER)?;
        Ok(())
    }
    pub fn decode<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let ref mut magic = [0u8; 13];
        reader.read_exact(magic)?;
        if magic.as_slice() != Self::MAGIC {
            return Err(invalid("bad archive header"));
        }
        let mut archive = Self::default();
        let ref mut seen = Vec::with_capacity(Self::SERIES.len());
        for _ in 0..reader.read_u16::<BE>()? {
            let ref mut name = vec![0u8; reader.read_u16::<BE>()? as usize];
            reader.read_exact(name)?;
            let name = String::from_utf8(std::mem::take(name))
                .map_err(|_| invalid("series name is not utf-8"))?;
            let samples = reader.read_u64::<BE>()? as usize;
            let series = archive
                .series_mut(&name)
                .ok_or_else(|| invalid(&format!("unknown series {}", name)))?;
            series.clear();
            for _ in 0..samples {
                series.push(reader.read_f64::<BE>()?);
            }
            seen.push(name);
        }
        if reader.read_u16::<BE>()? != Self::FOOTER {
            return Err(invalid("missing archive footer"));
        }
        if Self::SERIES.iter().any(|s| !seen.iter().any(|n| n == s)) {
            return Err(invalid("missing series"));
        }
        if Self::SERIES
            .iter()
            .filter_map(|s| archive.series(s))
            .any(|s| s.len() != archive.len())
        {
            return Err(invalid("series lengths differ"));
        }
        Ok(archive)
    }
}

fn invalid(message: &str) -> Error {
    Error::new(ErrorKind::InvalidData, message.to_string())
}
