pub mod photos;

pub use photos::FsPhotoStorage;
