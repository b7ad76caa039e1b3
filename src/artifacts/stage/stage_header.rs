use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::stage::{HEADER_SIZE, SIGNATURE, VERSION};
use anyhow::anyhow;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Read, Write};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StageHeader {
    pub marker: String,
    pub version: u32,
    pub staged_count: u32,
    pub removed_count: u32,
}

impl StageHeader {
    pub fn for_counts(staged_count: usize, removed_count: usize) -> Self {
        StageHeader::new(
            SIGNATURE.to_string(),
            VERSION,
            staged_count as u32,
            removed_count as u32,
        )
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.marker != SIGNATURE {
            return Err(anyhow!("Invalid stage file signature"));
        }

        if self.version != VERSION {
            return Err(anyhow!("Unsupported stage file version: {}", self.version));
        }

        Ok(())
    }
}

impl Packable for StageHeader {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE);
        bytes.write_all(self.marker.as_bytes())?;
        bytes.write_u32::<NetworkEndian>(self.version)?;
        bytes.write_u32::<NetworkEndian>(self.staged_count)?;
        bytes.write_u32::<NetworkEndian>(self.removed_count)?;

        Ok(Bytes::from(bytes))
    }
}

impl Unpackable for StageHeader {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut marker = [0u8; 4];
        reader
            .read_exact(&mut marker)
            .map_err(|_| anyhow!("Invalid header size"))?;
        let marker = String::from_utf8(marker.to_vec())
            .map_err(|_| anyhow!("Invalid marker in stage header"))?;

        let version = reader.read_u32::<NetworkEndian>()?;
        let staged_count = reader.read_u32::<NetworkEndian>()?;
        let removed_count = reader.read_u32::<NetworkEndian>()?;

        Ok(StageHeader {
            marker,
            version,
            staged_count,
            removed_count,
        })
    }
}
