use crate::{
    bucket::BucketError, loader::LoaderError, reading::ReadingError, writer::WriterError,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `reading` module")]
    Reading(#[from] ReadingError),
    #[error("Error in the `bucket` module")]
    Bucket(#[from] BucketError),
    #[error("Error in the `loader` module")]
    Loader(#[from] LoaderError),
    #[error("Error in the `writer` module")]
    Writer(#[from] WriterError),
}
pub type Result<T> = std::result::Result<T, Error>;
