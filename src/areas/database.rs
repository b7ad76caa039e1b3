//! Object store
//!
//! Blobs and commits share one keyspace under `.bitlet/objects`. Each object is
//! stored zlib-compressed at `xx/yyyy...`, where `xxyyyy...` is the SHA-1 of its
//! uncompressed serialized form. The type header inside every object keeps the
//! two kinds apart on lookup.

use crate::artifacts::core::errors::{BitletError, BitletResult};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store an object unless an identical one is already present
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_content = object.serialize()?;
        let object_id = ObjectId::hash(&object_content);
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            self.write_object(object_path, object_content)?;
            tracing::debug!(oid = %object_id, kind = %object.object_type(), "stored object");
        }

        Ok(object_id)
    }

    /// Store raw file content as a blob
    pub fn put(&self, content: impl Into<Bytes>) -> anyhow::Result<ObjectId> {
        self.store(&Blob::new(content.into()))
    }

    /// Content of a stored blob
    ///
    /// The sentinel id resolves to `None` without touching disk.
    pub fn get(&self, object_id: &ObjectId) -> BitletResult<Option<Bytes>> {
        if object_id.is_null() {
            return Ok(None);
        }

        match self.parse_object_as_blob(object_id)? {
            Some(blob) => Ok(Some(blob.into_content())),
            None => Err(BitletError::ObjectNotFound {
                oid: object_id.to_string(),
            }),
        }
    }

    /// Content of a blob that must exist
    pub fn blob_content(&self, object_id: &ObjectId) -> BitletResult<Bytes> {
        self.get(object_id)?.ok_or_else(|| BitletError::ObjectNotFound {
            oid: object_id.to_string(),
        })
    }

    pub fn put_commit(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        self.store(commit)
    }

    /// Load a commit
    ///
    /// The sentinel id resolves to `None`. Ids naming nothing, or naming a
    /// non-commit object, fail with `NoSuchCommit`.
    pub fn get_commit(&self, object_id: &ObjectId) -> BitletResult<Option<Commit>> {
        if object_id.is_null() {
            return Ok(None);
        }

        match self.parse_object_as_commit(object_id)? {
            Some(commit) => Ok(Some(commit)),
            None => Err(BitletError::NoSuchCommit {
                id: object_id.to_string(),
            }),
        }
    }

    /// Load a commit that must exist
    pub fn load_commit(&self, object_id: &ObjectId) -> BitletResult<Commit> {
        self.get_commit(object_id)?
            .ok_or_else(|| BitletError::NoSuchCommit {
                id: object_id.to_string(),
            })
    }

    pub fn slim_commit(&self, object_id: &ObjectId) -> anyhow::Result<SlimCommit> {
        let commit = self
            .parse_object_as_commit(object_id)?
            .with_context(|| format!("Object {object_id} is not a commit"))?;

        Ok(commit.slim(object_id.clone()))
    }

    /// Parse an object as a blob, `None` if it is missing or of another type
    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Option<Blob>> {
        match self.parse_object_as_bytes(object_id)? {
            Some((ObjectType::Blob, object_reader)) => {
                Ok(Some(Blob::deserialize(object_reader)?))
            }
            _ => Ok(None),
        }
    }

    /// Parse an object as a commit, `None` if it is missing or of another type
    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        match self.parse_object_as_bytes(object_id)? {
            Some((ObjectType::Commit, object_reader)) => Ok(Some(
                Commit::deserialize(object_reader)
                    .with_context(|| format!("Unable to parse commit {object_id}"))?,
            )),
            _ => Ok(None),
        }
    }

    pub fn get_object_type(&self, object_id: &ObjectId) -> anyhow::Result<Option<ObjectType>> {
        Ok(self
            .parse_object_as_bytes(object_id)?
            .map(|(object_type, _)| object_type))
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<Option<(ObjectType, impl BufRead)>> {
        let object_path = self.path.join(object_id.to_path());
        if !object_path.is_file() {
            return Ok(None);
        }

        let object_content = self.read_object(object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let object_type = ObjectType::parse_object_type(&mut object_reader)?;

        Ok(Some((object_type, object_reader)))
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Find all objects whose id starts with the given prefix
    ///
    /// Callers validate the prefix first, so it is always at least two
    /// characters long and only one fan-out directory needs to be searched.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let mut matches = Vec::new();

        if prefix.len() < 2 {
            return Ok(matches);
        }

        let dir_name = &prefix[..2];
        let file_prefix = &prefix[2..];
        let dir_path = self.path.join(dir_name);

        if dir_path.is_dir() {
            for entry in std::fs::read_dir(&dir_path)? {
                let entry = entry?;
                let file_name = entry.file_name();
                let file_name_str = file_name.to_string_lossy();

                if file_name_str.starts_with(file_prefix) {
                    let full_oid = format!("{}{}", dir_name, file_name_str);
                    if let Ok(oid) = ObjectId::try_parse(full_oid) {
                        matches.push(oid);
                    }
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    /// Every object id in the store, sorted
    pub fn list_objects(&self) -> anyhow::Result<Vec<ObjectId>> {
        let mut objects = WalkDir::new(&self.path)
            .min_depth(2)
            .max_depth(2)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&self.path).ok()?;
                let full_oid = relative_path
                    .iter()
                    .map(|part| part.to_string_lossy())
                    .collect::<String>();
                ObjectId::try_parse(full_oid).ok()
            })
            .collect::<Vec<_>>();

        objects.sort();
        Ok(objects)
    }
}
