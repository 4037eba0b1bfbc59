use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use playback_core::response::SkillResponse;
use playback_lambda::adapters::media_store::{collect_pages, MediaStore, MediaStoreError};
use playback_lambda::handlers::playback::handle_skill_event;
use serde_json::Value;

struct S3MediaStore {
    bucket: String,
    s3_client: aws_sdk_s3::Client,
}

impl MediaStore for S3MediaStore {
    fn list_keys(&self) -> Result<Vec<String>, MediaStoreError> {
        collect_pages(|continuation_token| {
            let bucket = self.bucket.clone();
            let client = self.s3_client.clone();

            tokio::task::block_in_place(|| {
                tokio::runtime::Handle::current().block_on(async move {
                    let mut request = client.list_objects_v2().bucket(bucket);
                    if let Some(token) = continuation_token {
                        request = request.continuation_token(token);
                    }

                    let page = request.send().await.map_err(|error| {
                        MediaStoreError::Retrieval(format!(
                            "failed to list objects in s3: {error}"
                        ))
                    })?;

                    let keys = page
                        .contents()
                        .iter()
                        .filter_map(|object| object.key().map(str::to_string))
                        .collect();
                    let next_token = page.next_continuation_token().map(str::to_string);

                    Ok((keys, next_token))
                })
            })
        })
    }

    fn mint_retrieval_url(&self, key: &str, ttl_secs: u64) -> Result<String, MediaStoreError> {
        if key.trim().is_empty() {
            return Err(MediaStoreError::Minting(
                "object key cannot be empty".to_string(),
            ));
        }

        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let presigning_config = PresigningConfig::builder()
                    .expires_in(Duration::from_secs(ttl_secs))
                    .build()
                    .map_err(|error| {
                        MediaStoreError::Minting(format!(
                            "failed to build presigning config: {error}"
                        ))
                    })?;

                let presigned = client
                    .get_object()
                    .bucket(bucket)
                    .key(object_key)
                    .presigned(presigning_config)
                    .await
                    .map_err(|error| {
                        MediaStoreError::Minting(format!("failed to presign object url: {error}"))
                    })?;

                Ok(presigned.uri().to_string())
            })
        })
    }
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<SkillResponse, Error> {
    let bucket =
        std::env::var("MEDIA_BUCKET").map_err(|_| Error::from("MEDIA_BUCKET must be configured"))?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let media_store = S3MediaStore {
        bucket,
        s3_client: aws_sdk_s3::Client::new(&aws_config),
    };

    Ok(handle_skill_event(&event.payload, &media_store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();
    lambda_runtime::run(service_fn(handle_request)).await
}
