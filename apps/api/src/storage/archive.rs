use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::config::S3Settings;

/// Keeps the original PDF of every upload in object storage.
#[derive(Clone)]
pub struct ResumeArchive {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl ResumeArchive {
    /// Constructs an S3 client for MinIO (local) or AWS (production).
    pub async fn connect(settings: &S3Settings) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()));

        if let (Some(key_id), Some(secret)) =
            (&settings.access_key_id, &settings.secret_access_key)
        {
            loader = loader.credentials_provider(Credentials::new(
                key_id,
                secret,
                None,
                None,
                "advisor-static",
            ));
        }
        if let Some(endpoint) = &settings.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        // Path-style addressing keeps MinIO endpoints working.
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(settings.endpoint.is_some())
            .build();

        Self {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            bucket: settings.bucket.clone(),
        }
    }

    /// Uploads the PDF and returns its object key.
    pub async fn store_pdf(
        &self,
        user_id: Uuid,
        resume_id: Uuid,
        pdf: Bytes,
    ) -> anyhow::Result<String> {
        let key = archive_key(user_id, resume_id);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(pdf))
            .content_type("application/pdf")
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

        info!("Archived resume PDF to s3://{}/{}", self.bucket, key);
        Ok(key)
    }
}

pub fn archive_key(user_id: Uuid, resume_id: Uuid) -> String {
    format!("resumes/{user_id}/{resume_id}.pdf")
}
