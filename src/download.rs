//! # Schema Download
//!
//! Fetch the SDL document a running server publishes and write it to disk,
//! so client tooling can generate code against it.
//!
//! One GET, body written as UTF-8, existing file overwritten. The response
//! status is not inspected and there is no retry or timeout: whatever the
//! endpoint returns is what lands in the file. Every failure propagates.

use std::path::Path;

use async_trait::async_trait;

use crate::Result;

/// Source of schema text.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    async fn fetch(&self, endpoint: &str) -> Result<String>;
}

/// `SchemaSource` over plain HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct HttpSchemaSource {
    client: reqwest::Client,
}

impl HttpSchemaSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchemaSource for HttpSchemaSource {
    async fn fetch(&self, endpoint: &str) -> Result<String> {
        let resp = self.client.get(endpoint).send().await?;
        tracing::debug!(endpoint, status = %resp.status(), "schema response");
        Ok(resp.text().await?)
    }
}

/// Download the schema at `endpoint` into `output` over HTTP.
pub async fn download_schema(endpoint: &str, output: impl AsRef<Path>) -> Result<()> {
    download_schema_with(&HttpSchemaSource::new(), endpoint, output).await
}

/// Download through any `SchemaSource`.
pub async fn download_schema_with<S>(source: &S, endpoint: &str, output: impl AsRef<Path>) -> Result<()>
where
    S: SchemaSource + ?Sized,
{
    let output = output.as_ref();
    let schema = source.fetch(endpoint).await?;
    tokio::fs::write(output, schema.as_bytes()).await?;
    tracing::info!(endpoint, output = %output.display(), bytes = schema.len(), "schema downloaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::tempdir;

    struct Fixed(&'static str);

    #[async_trait]
    impl SchemaSource for Fixed {
        async fn fetch(&self, _endpoint: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl SchemaSource for Failing {
        async fn fetch(&self, endpoint: &str) -> Result<String> {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                endpoint.to_string(),
            )))
        }
    }

    #[tokio::test]
    async fn test_writes_and_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overwrite.graphqls");
        tokio::fs::write(&path, "stale content that is longer").await.unwrap();

        download_schema_with(&Fixed("type Query { hello: String }"), "http://x", &path)
            .await
            .unwrap();
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "type Query { hello: String }");
    }

    #[tokio::test]
    async fn test_source_failure_leaves_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never.graphqls");
        let err = download_schema_with(&Failing, "http://x", &path).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_unwritable_output_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("schema.graphqls");
        let err = download_schema_with(&Fixed("x"), "http://x", &path).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn test_dyn_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dyn.graphqls");
        let source: Box<dyn SchemaSource> = Box::new(Fixed("scalar UUID"));
        download_schema_with(source.as_ref(), "http://x", &path).await.unwrap();
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "scalar UUID");
    }
}
