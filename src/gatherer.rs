use async_trait::async_trait;
use std::error::Error;
pub mod aws;
pub mod eks;
pub mod local;

/// A gatherer retrieves a snapshot of data from one external source on
/// demand. Each implementation defines its own `Data` type; interpreting it
/// is up to the caller that selected the gatherer.
#[async_trait]
pub trait Gatherer {
    type Data;
    async fn fetch(&self) -> Result<Self::Data, Box<dyn Error>>;
}
