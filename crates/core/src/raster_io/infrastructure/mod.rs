pub mod directory_artifact_writer;
pub mod image_codec;
