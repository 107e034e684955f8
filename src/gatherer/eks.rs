//! Gatherer that describes a managed cluster through the AWS EKS control
//! plane. Credentials and region come from the ambient AWS configuration;
//! the only input owned by this module is the cluster name.

use async_trait::async_trait;
use aws_sdk_eks::operation::describe_cluster::DescribeClusterOutput;
use aws_sdk_eks::types::Cluster;
use aws_sdk_eks::Client;
use log::debug;
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use serde::Serialize;
use std::error::Error;

use crate::gatherer::Gatherer;
use crate::types::ConfigError;

/// Configuration for an EKS [`DataGatherer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the cluster in EKS.
    pub cluster_name: String,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cluster_name.is_empty() {
            return Err(ConfigError::empty_field("cluster_name"));
        }
        Ok(())
    }
}

/// The single control-plane call issued by the EKS gatherer. Abstracted from
/// [`Client`] so callers and tests can substitute their own handle.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DescribeCluster: Send + Sync {
    async fn describe(&self, name: &str)
        -> Result<DescribeClusterOutput, Box<dyn Error + Send + Sync>>;
}

#[async_trait]
impl DescribeCluster for Client {
    async fn describe(
        &self,
        name: &str,
    ) -> Result<DescribeClusterOutput, Box<dyn Error + Send + Sync>> {
        match self.describe_cluster().name(name).send().await {
            Ok(output) => Ok(output),
            Err(err) => Err(Box::new(aws_sdk_eks::Error::from(err))),
        }
    }
}

/// Cluster information retrieved from EKS.
#[derive(Debug, PartialEq)]
pub struct Info {
    /// The full cluster descriptor as returned by the control plane: status,
    /// endpoint, version, networking configuration.
    pub cluster: Option<Cluster>,
}

/// Data gatherer for an EKS cluster.
pub struct DataGatherer {
    client: Box<dyn DescribeCluster>,
    cluster_name: String,
}

impl DataGatherer {
    /// Creates a new EKS DataGatherer. The client is built from the ambient
    /// AWS configuration; no request is sent until [`Gatherer::fetch`].
    pub async fn new(cfg: &Config) -> Result<DataGatherer, ConfigError> {
        cfg.validate()?;
        let sdk_config = super::aws::sdk_config().await;
        Ok(DataGatherer {
            client: Box::new(Client::new(&sdk_config)),
            cluster_name: cfg.cluster_name.clone(),
        })
    }

    /// Creates a new EKS DataGatherer around an already constructed client
    /// handle.
    pub fn with_client(
        cfg: &Config,
        client: Box<dyn DescribeCluster>,
    ) -> Result<DataGatherer, ConfigError> {
        cfg.validate()?;
        Ok(DataGatherer {
            client,
            cluster_name: cfg.cluster_name.clone(),
        })
    }
}

#[async_trait]
impl Gatherer for DataGatherer {
    type Data = Info;

    async fn fetch(&self) -> Result<Self::Data, Box<dyn Error>> {
        debug!("Describing EKS cluster: {}", self.cluster_name);
        let output = self
            .client
            .describe(&self.cluster_name)
            .await
            .map_err(|e| e as Box<dyn Error>)?;
        Ok(Info {
            cluster: output.cluster,
        })
    }
}
