// crates/profile/src/infrastructure/firestore/mappers/mod.rs

mod profile_document_mapper;

pub use profile_document_mapper::ProfileDocumentMapper;
