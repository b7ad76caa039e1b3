use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::stage::checksum::Checksum;
use byteorder::{ByteOrder, NetworkEndian, WriteBytesExt};
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Size of a binary blob id in bytes
pub const OID_SIZE: usize = 20;

/// Size of the path length prefix in bytes
pub const PATH_LENGTH_SIZE: usize = 2;

/// One record of a stage file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEntry {
    Staged { path: PathBuf, oid: ObjectId },
    Removed { path: PathBuf },
}

impl StageEntry {
    pub fn read_staged(reader: &mut Checksum) -> anyhow::Result<Self> {
        let oid_bytes = reader.read(OID_SIZE)?;
        let oid = ObjectId::read_h40_from(&mut &oid_bytes[..])?;
        let path = Self::read_path(reader)?;

        Ok(StageEntry::Staged { path, oid })
    }

    pub fn read_removed(reader: &mut Checksum) -> anyhow::Result<Self> {
        Ok(StageEntry::Removed {
            path: Self::read_path(reader)?,
        })
    }

    fn read_path(reader: &mut Checksum) -> anyhow::Result<PathBuf> {
        let length = NetworkEndian::read_u16(&reader.read(PATH_LENGTH_SIZE)?);
        let path = reader.read(length as usize)?;
        let path = String::from_utf8(path.to_vec())
            .map_err(|_| anyhow::anyhow!("Invalid path in stage file"))?;

        Ok(PathBuf::from(path))
    }

    fn write_path(bytes: &mut Vec<u8>, path: &Path) -> anyhow::Result<()> {
        let path = path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Path {path:?} is not valid UTF-8"))?;
        let length = u16::try_from(path.len())
            .map_err(|_| anyhow::anyhow!("Path {path} is too long for the stage file"))?;
        bytes.write_u16::<NetworkEndian>(length)?;
        bytes.write_all(path.as_bytes())?;

        Ok(())
    }
}

impl Packable for StageEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut bytes = Vec::new();

        match self {
            StageEntry::Staged { path, oid } => {
                oid.write_h40_to(&mut bytes)?;
                Self::write_path(&mut bytes, path)?;
            }
            StageEntry::Removed { path } => {
                Self::write_path(&mut bytes, path)?;
            }
        }

        Ok(Bytes::from(bytes))
    }
}
