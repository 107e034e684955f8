use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_config::SdkConfig;
use headers::Authorization;
use hyper::client::HttpConnector;
use hyper::Uri;
use hyper_proxy::{Intercept, Proxy, ProxyConnector};
use log::debug;
use log::error;
use url::Url;

fn proxy_from_env() -> Option<String> {
    std::env::var("HTTPS_PROXY")
        .or_else(|_v| std::env::var("https_proxy"))
        .ok()
}

/// Returns `ProxyConnector<HttpConnector>` if env. variable 'https_proxy' is set
pub fn determine_proxy() -> Option<ProxyConnector<HttpConnector>> {
    let raw = proxy_from_env()?;
    let proxy_url: Url = raw.parse().ok()?;
    let mut proxy_uri: Uri = raw.parse().ok()?;
    if proxy_uri.scheme().is_none() {
        error!("Configured proxy did not specify a scheme - falling back to HTTP.");
        proxy_uri = format!("http://{}", raw).parse().ok()?;
    }
    let mut proxy = Proxy::new(Intercept::All, proxy_uri);

    if let Some(password) = proxy_url.password() {
        proxy.set_authorization(Authorization::basic(proxy_url.username(), password));
    }

    ProxyConnector::from_proxy(HttpConnector::new(), proxy).ok()
}

/// Resolves the ambient AWS configuration: default credential chain, region
/// chain with a us-east-1 fallback, and a proxy if one is configured.
pub async fn sdk_config() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else("us-east-1");
    let loaded = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;
    if let Some(proxy) = determine_proxy() {
        debug!("Using proxy for AWS requests");
        let client =
            aws_smithy_runtime::client::http::hyper_014::HyperClientBuilder::new().build(proxy);
        loaded.into_builder().http_client(client).build()
    } else {
        debug!("Not using a proxy");
        loaded
    }
}
