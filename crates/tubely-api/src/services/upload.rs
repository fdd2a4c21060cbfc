//! Video upload pipeline.
//!
//! An upload travels through these stages, each a precondition of the next:
//!
//! 1. stage the request body to a scratch file on local disk
//! 2. remux the staged file for fast start (stream copy, `moov` first)
//! 3. classify the remuxed file by display aspect ratio
//! 4. publish the remuxed file to object storage under a fresh key
//! 5. point the video record at the public URL
//!
//! Classification is the only stage allowed to fail: the object is then
//! stored under `other/`. Every scratch file is removed on every exit path.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use futures_util::{Stream, StreamExt};
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, warn};
use tubely_media::{Inspector, Remuxer, ScratchFile};
use tubely_models::{AspectClassification, VideoId, VideoRecord};
use tubely_storage::{AssetKey, ObjectStore, PublicOrigin};
use tubely_store::VideoStore;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::metrics;

/// The only media type accepted for upload.
pub const ACCEPTED_MEDIA_TYPE: &str = "video/mp4";

const STAGED_PREFIX: &str = "tubely-upload-";
const STAGED_SUFFIX: &str = ".mp4";

/// Pipeline settings fixed at startup.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory for staged uploads
    pub temp_dir: PathBuf,
    /// Origin public URLs are built from
    pub origin: PublicOrigin,
}

/// Orchestrates one upload from request body to published record.
pub struct UploadPipeline {
    config: UploadConfig,
    videos: Arc<dyn VideoStore>,
    objects: Arc<dyn ObjectStore>,
    remuxer: Arc<dyn Remuxer>,
    inspector: Arc<dyn Inspector>,
}

impl UploadPipeline {
    pub fn new(
        config: UploadConfig,
        videos: Arc<dyn VideoStore>,
        objects: Arc<dyn ObjectStore>,
        remuxer: Arc<dyn Remuxer>,
        inspector: Arc<dyn Inspector>,
    ) -> Self {
        Self {
            config,
            videos,
            objects,
            remuxer,
            inspector,
        }
    }

    /// Load the record and check that `user_id` owns it.
    pub async fn authorize(&self, user_id: &Uuid, video_id: &VideoId) -> ApiResult<VideoRecord> {
        let record = self
            .videos
            .get_video(video_id)
            .await
            .map_err(ApiError::PersistenceFailed)?
            .ok_or_else(|| ApiError::not_found("Couldn't find video"))?;

        if !record.is_owned_by(user_id) {
            warn!(
                video_id = %video_id,
                user_id = %user_id,
                owner_id = %record.user_id,
                "Upload attempted by non-owner"
            );
            return Err(ApiError::forbidden("Not authorized to upload this video"));
        }

        Ok(record)
    }

    /// Run the pipeline for an authorized `record`.
    ///
    /// `content_type` is the declared type of the uploaded part and `body`
    /// its bytes. On success the updated record is returned.
    pub async fn publish<S, B, E>(
        &self,
        mut record: VideoRecord,
        content_type: Option<&str>,
        body: S,
    ) -> ApiResult<VideoRecord>
    where
        S: Stream<Item = Result<B, E>>,
        B: AsRef<[u8]>,
        E: fmt::Display,
    {
        let declared = content_type.map(str::trim).unwrap_or_default();
        let media_type = accepted_media_type(declared)?;
        let started = Instant::now();

        let staged = self.stage(body).await?;

        let stage_start = Instant::now();
        let remuxed = self
            .remuxer
            .remux(staged.path())
            .await
            .map_err(ApiError::ProcessingFailed)?;
        metrics::record_upload_stage("remux", stage_start.elapsed().as_secs_f64());
        release(staged);

        let classification = self.classify(remuxed.path()).await;
        let key = AssetKey::generate(classification, media_type);

        let stage_start = Instant::now();
        self.objects
            .put_object(&key, remuxed.path(), declared)
            .await
            .map_err(ApiError::UploadFailed)?;
        metrics::record_upload_stage("put", stage_start.elapsed().as_secs_f64());

        record.set_video_url(self.config.origin.url_for(&key));
        if let Err(e) = self.videos.update_video(&record).await {
            error!(
                video_id = %record.id,
                key = %key,
                "Object stored but record update failed, object is orphaned"
            );
            return Err(ApiError::PersistenceFailed(e));
        }
        release(remuxed);

        info!(
            video_id = %record.id,
            key = %key,
            classification = %classification,
            duration_ms = started.elapsed().as_millis() as u64,
            "Video published"
        );

        Ok(record)
    }

    /// Copy the body to a scratch file in the temp directory.
    async fn stage<S, B, E>(&self, body: S) -> ApiResult<ScratchFile>
    where
        S: Stream<Item = Result<B, E>>,
        B: AsRef<[u8]>,
        E: fmt::Display,
    {
        let stage_start = Instant::now();
        let (staged, file) =
            ScratchFile::create_in(&self.config.temp_dir, STAGED_PREFIX, STAGED_SUFFIX)
                .map_err(ApiError::StorageUnavailable)?;
        let mut file = tokio::fs::File::from_std(file);

        let mut body = std::pin::pin!(body);
        let mut written: u64 = 0;
        while let Some(chunk) = body.next().await {
            let chunk = chunk
                .map_err(|e| ApiError::invalid_request(format!("Unable to read video data: {}", e)))?;
            let bytes = chunk.as_ref();
            file.write_all(bytes)
                .await
                .map_err(ApiError::StorageUnavailable)?;
            written += bytes.len() as u64;
        }
        file.flush().await.map_err(ApiError::StorageUnavailable)?;
        drop(file);

        if written == 0 {
            return Err(ApiError::invalid_request("Uploaded video is empty"));
        }

        debug!(
            path = %staged.path().display(),
            bytes = written,
            "Staged upload"
        );
        metrics::record_upload_stage("stage", stage_start.elapsed().as_secs_f64());
        Ok(staged)
    }

    /// Classify the file, falling back to [`AspectClassification::Other`].
    async fn classify(&self, path: &Path) -> AspectClassification {
        let stage_start = Instant::now();
        let classification = match self.inspector.classify(path).await {
            Ok(classification) => classification,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    stderr = e.stderr().unwrap_or(""),
                    "Could not classify video, storing as other"
                );
                AspectClassification::Other
            }
        };
        metrics::record_upload_stage("probe", stage_start.elapsed().as_secs_f64());
        metrics::record_classification(classification);
        classification
    }
}

/// Validate a declared content type, returning the accepted media type.
///
/// Parameters such as `; codecs=...` are ignored and the comparison is
/// case-insensitive.
fn accepted_media_type(declared: &str) -> ApiResult<&'static str> {
    let essence = declared.split(';').next().unwrap_or_default().trim();
    if essence.is_empty() {
        return Err(ApiError::unsupported_media_type("Missing Content-Type for video"));
    }
    if !essence.eq_ignore_ascii_case(ACCEPTED_MEDIA_TYPE) {
        return Err(ApiError::unsupported_media_type(format!(
            "Invalid file type {}, only MP4 is allowed",
            essence
        )));
    }
    Ok(ACCEPTED_MEDIA_TYPE)
}

fn release(file: ScratchFile) {
    let path = file.path().to_path_buf();
    if let Err(e) = file.release() {
        warn!(path = %path.display(), "Failed to remove scratch file: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use futures_util::stream;
    use mockall::mock;
    use tempfile::TempDir;
    use tubely_media::{FfmpegRemuxer, FfprobeInspector, MediaError, MediaResult};
    use tubely_models::NewVideo;
    use tubely_storage::{StorageError, StorageResult};
    use tubely_store::{InMemoryVideoStore, StoreError, StoreResult};

    mock! {
        pub Objects {}

        #[async_trait]
        impl ObjectStore for Objects {
            async fn put_object(&self, key: &AssetKey, path: &Path, content_type: &str) -> StorageResult<()>;
            async fn check_connectivity(&self) -> StorageResult<()>;
        }
    }

    mock! {
        pub Videos {}

        #[async_trait]
        impl VideoStore for Videos {
            async fn create_video(&self, record: &VideoRecord) -> StoreResult<()>;
            async fn get_video(&self, id: &VideoId) -> StoreResult<Option<VideoRecord>>;
            async fn update_video(&self, record: &VideoRecord) -> StoreResult<()>;
            async fn list_videos(&self, user_id: &Uuid) -> StoreResult<Vec<VideoRecord>>;
        }
    }

    const PAYLOAD: &[u8] = b"\x00\x00\x00\x18ftypmp42 pretend video";

    /// Writes `faststart:` followed by the input into a new scratch file.
    struct PrefixRemuxer;

    #[async_trait]
    impl Remuxer for PrefixRemuxer {
        async fn remux(&self, input: &Path) -> MediaResult<ScratchFile> {
            let data = std::fs::read(input)?;
            let dir = input.parent().unwrap();
            let (out, mut file) = ScratchFile::create_in(dir, "tubely-faststart-", ".mp4")?;
            file.write_all(b"faststart:")?;
            file.write_all(&data)?;
            Ok(out)
        }
    }

    /// Creates its output, then hangs while holding both files.
    struct StallingRemuxer;

    #[async_trait]
    impl Remuxer for StallingRemuxer {
        async fn remux(&self, input: &Path) -> MediaResult<ScratchFile> {
            let dir = input.parent().unwrap();
            let (out, _) = ScratchFile::create_in(dir, "tubely-faststart-", ".mp4")?;
            assert_eq!(std::fs::read_dir(dir)?.count(), 2);
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(out)
        }
    }

    struct FixedInspector(AspectClassification);

    #[async_trait]
    impl Inspector for FixedInspector {
        async fn classify(&self, _path: &Path) -> MediaResult<AspectClassification> {
            Ok(self.0)
        }
    }

    struct NoStreamsInspector;

    #[async_trait]
    impl Inspector for NoStreamsInspector {
        async fn classify(&self, _path: &Path) -> MediaResult<AspectClassification> {
            Err(MediaError::NoStreamsFound)
        }
    }

    fn cdn() -> PublicOrigin {
        PublicOrigin::Cdn("https://d111.cloudfront.net".to_string())
    }

    fn bucket() -> PublicOrigin {
        PublicOrigin::Bucket {
            bucket: "tubely-media".to_string(),
            region: "us-east-2".to_string(),
        }
    }

    fn pipeline(
        dir: &TempDir,
        origin: PublicOrigin,
        videos: Arc<dyn VideoStore>,
        objects: MockObjects,
        remuxer: impl Remuxer + 'static,
        inspector: impl Inspector + 'static,
    ) -> UploadPipeline {
        UploadPipeline::new(
            UploadConfig {
                temp_dir: dir.path().to_path_buf(),
                origin,
            },
            videos,
            Arc::new(objects),
            Arc::new(remuxer),
            Arc::new(inspector),
        )
    }

    async fn seeded_store(owner: Uuid) -> (Arc<InMemoryVideoStore>, VideoRecord) {
        let store = Arc::new(InMemoryVideoStore::new());
        let record = VideoRecord::new(
            owner,
            NewVideo {
                title: "Boots".to_string(),
                description: String::new(),
            },
        );
        store.create_video(&record).await.unwrap();
        (store, record)
    }

    fn body(data: &[u8]) -> impl Stream<Item = Result<Vec<u8>, std::io::Error>> {
        let (a, b) = data.split_at(data.len() / 2);
        stream::iter(vec![Ok(a.to_vec()), Ok(b.to_vec())])
    }

    fn entries(dir: &TempDir) -> Vec<PathBuf> {
        std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }

    /// Object store that records what it was given.
    fn recording_objects(seen: Arc<Mutex<Vec<(String, Vec<u8>, String)>>>) -> MockObjects {
        let mut objects = MockObjects::new();
        objects
            .expect_put_object()
            .times(1)
            .returning(move |key, path, content_type| {
                let data = std::fs::read(path).unwrap();
                seen.lock()
                    .unwrap()
                    .push((key.to_string(), data, content_type.to_string()));
                Ok(())
            });
        objects
    }

    #[tokio::test]
    async fn test_landscape_upload_through_cdn() {
        let dir = TempDir::new().unwrap();
        let record = VideoRecord::new(
            Uuid::new_v4(),
            NewVideo {
                title: "Boots".to_string(),
                description: String::new(),
            },
        );
        let seen = Arc::new(Mutex::new(Vec::new()));

        let mut videos = MockVideos::new();
        let id = record.id;
        videos
            .expect_update_video()
            .times(1)
            .withf(move |r| {
                r.id == id
                    && r.video_url
                        .as_deref()
                        .is_some_and(|u| u.starts_with("https://d111.cloudfront.net/landscape/"))
            })
            .returning(|_| Ok(()));

        let pipeline = pipeline(
            &dir,
            cdn(),
            Arc::new(videos),
            recording_objects(seen.clone()),
            PrefixRemuxer,
            FixedInspector(AspectClassification::Landscape),
        );

        let updated = pipeline
            .publish(record.clone(), Some("video/mp4"), body(PAYLOAD))
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        let (key, data, content_type) = &seen[0];
        assert!(key.starts_with("landscape/"));
        assert!(key.ends_with(".mp4"));
        assert_eq!(key.len(), "landscape/".len() + 43 + ".mp4".len());
        assert_eq!(data.as_slice(), [b"faststart:".as_slice(), PAYLOAD].concat());
        assert_eq!(content_type, "video/mp4");

        let url = format!("https://d111.cloudfront.net/{}", key);
        assert_eq!(updated.video_url.as_deref(), Some(url.as_str()));
        assert_eq!(updated.id, record.id);
        assert_eq!(updated.title, record.title);
        assert!(entries(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_portrait_upload_through_bucket() {
        let dir = TempDir::new().unwrap();
        let (store, record) = seeded_store(Uuid::new_v4()).await;
        let seen = Arc::new(Mutex::new(Vec::new()));

        let pipeline = pipeline(
            &dir,
            bucket(),
            store,
            recording_objects(seen.clone()),
            PrefixRemuxer,
            FixedInspector(AspectClassification::Portrait),
        );

        let updated = pipeline
            .publish(record, Some("video/mp4; codecs=\"avc1\""), body(PAYLOAD))
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        let (key, _, content_type) = &seen[0];
        assert!(key.starts_with("portrait/"));
        assert_eq!(content_type, "video/mp4; codecs=\"avc1\"");
        assert_eq!(
            updated.video_url.unwrap(),
            format!("https://tubely-media.s3.us-east-2.amazonaws.com/{}", key)
        );
        assert!(entries(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_classification_failure_stores_under_other() {
        let dir = TempDir::new().unwrap();
        let (store, record) = seeded_store(Uuid::new_v4()).await;
        let seen = Arc::new(Mutex::new(Vec::new()));

        let pipeline = pipeline(
            &dir,
            cdn(),
            store,
            recording_objects(seen.clone()),
            PrefixRemuxer,
            FfprobeInspector::new().with_binary("/nonexistent/ffprobe"),
        );

        let updated = pipeline
            .publish(record, Some("video/mp4"), body(PAYLOAD))
            .await
            .unwrap();

        let key = seen.lock().unwrap()[0].0.clone();
        assert!(key.starts_with("other/"));
        assert!(updated.video_url.unwrap().ends_with(&key));
        assert!(entries(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_no_video_stream_stores_under_other() {
        let dir = TempDir::new().unwrap();
        let (store, record) = seeded_store(Uuid::new_v4()).await;
        let seen = Arc::new(Mutex::new(Vec::new()));

        let pipeline = pipeline(
            &dir,
            cdn(),
            store,
            recording_objects(seen.clone()),
            PrefixRemuxer,
            NoStreamsInspector,
        );

        pipeline
            .publish(record, Some("video/mp4"), body(PAYLOAD))
            .await
            .unwrap();
        assert!(seen.lock().unwrap()[0].0.starts_with("other/"));
    }

    #[tokio::test]
    async fn test_remux_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let (store, record) = seeded_store(Uuid::new_v4()).await;

        // No expectations: any put_object call fails the test.
        let pipeline = pipeline(
            &dir,
            cdn(),
            store.clone(),
            MockObjects::new(),
            FfmpegRemuxer::new().with_binary("/nonexistent/ffmpeg"),
            FixedInspector(AspectClassification::Landscape),
        );

        let err = pipeline
            .publish(record.clone(), Some("video/mp4"), body(PAYLOAD))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::ProcessingFailed(_)));
        let stored = store.get_video(&record.id).await.unwrap().unwrap();
        assert_eq!(stored.video_url, None);
        assert!(entries(&dir).is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_remux_nonzero_exit_is_fatal() {
        let dir = TempDir::new().unwrap();
        let (store, record) = seeded_store(Uuid::new_v4()).await;

        let mut objects = MockObjects::new();
        objects.expect_put_object().times(0);

        let pipeline = pipeline(
            &dir,
            cdn(),
            store.clone(),
            objects,
            FfmpegRemuxer::new().with_binary("false"),
            FixedInspector(AspectClassification::Landscape),
        );

        let err = pipeline
            .publish(record.clone(), Some("video/mp4"), body(PAYLOAD))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::ProcessingFailed(_)));
        assert_eq!(store.get_video(&record.id).await.unwrap().unwrap().video_url, None);
        assert!(entries(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_upload_leaves_no_files() {
        let dir = TempDir::new().unwrap();
        let (store, record) = seeded_store(Uuid::new_v4()).await;

        let mut objects = MockObjects::new();
        objects.expect_put_object().times(0);

        let pipeline = pipeline(
            &dir,
            cdn(),
            store,
            objects,
            StallingRemuxer,
            FixedInspector(AspectClassification::Landscape),
        );

        let result = tokio::time::timeout(
            Duration::from_millis(200),
            pipeline.publish(record, Some("video/mp4"), body(PAYLOAD)),
        )
        .await;

        assert!(result.is_err());
        assert!(entries(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_upload_failure_leaves_record_unchanged() {
        let dir = TempDir::new().unwrap();
        let (store, record) = seeded_store(Uuid::new_v4()).await;

        let mut objects = MockObjects::new();
        objects
            .expect_put_object()
            .times(1)
            .returning(|_, _, _| Err(StorageError::upload_failed("AccessDenied")));

        let pipeline = pipeline(
            &dir,
            cdn(),
            store.clone(),
            objects,
            PrefixRemuxer,
            FixedInspector(AspectClassification::Landscape),
        );

        let err = pipeline
            .publish(record.clone(), Some("video/mp4"), body(PAYLOAD))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::UploadFailed(_)));
        assert_eq!(store.get_video(&record.id).await.unwrap().unwrap().video_url, None);
        assert!(entries(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_update_failure_is_persistence_error() {
        let dir = TempDir::new().unwrap();
        let record = VideoRecord::new(
            Uuid::new_v4(),
            NewVideo {
                title: "Boots".to_string(),
                description: String::new(),
            },
        );

        let mut videos = MockVideos::new();
        videos
            .expect_update_video()
            .times(1)
            .returning(|_| Err(StoreError::backend("connection reset")));

        let mut objects = MockObjects::new();
        objects.expect_put_object().times(1).returning(|_, _, _| Ok(()));

        let pipeline = pipeline(
            &dir,
            cdn(),
            Arc::new(videos),
            objects,
            PrefixRemuxer,
            FixedInspector(AspectClassification::Landscape),
        );

        let err = pipeline
            .publish(record, Some("video/mp4"), body(PAYLOAD))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::PersistenceFailed(_)));
        assert!(entries(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_rejected_content_types() {
        let dir = TempDir::new().unwrap();
        let (store, record) = seeded_store(Uuid::new_v4()).await;
        let pipeline = pipeline(
            &dir,
            cdn(),
            store,
            MockObjects::new(),
            PrefixRemuxer,
            FixedInspector(AspectClassification::Landscape),
        );

        for content_type in [None, Some(""), Some("video/quicktime"), Some("image/png"), Some("mp4")] {
            let err = pipeline
                .publish(record.clone(), content_type, body(PAYLOAD))
                .await
                .unwrap_err();
            assert!(
                matches!(err, ApiError::UnsupportedMediaType(_)),
                "{content_type:?}"
            );
        }
        assert!(entries(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_body_read_error() {
        let dir = TempDir::new().unwrap();
        let (store, record) = seeded_store(Uuid::new_v4()).await;
        let pipeline = pipeline(
            &dir,
            cdn(),
            store,
            MockObjects::new(),
            PrefixRemuxer,
            FixedInspector(AspectClassification::Landscape),
        );

        let broken = stream::iter(vec![
            Ok(PAYLOAD.to_vec()),
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset")),
        ]);
        let err = pipeline
            .publish(record.clone(), Some("video/mp4"), broken)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));

        let err = pipeline
            .publish(record, Some("video/mp4"), body(b""))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
        assert!(entries(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_missing_temp_dir() {
        let dir = TempDir::new().unwrap();
        let (store, record) = seeded_store(Uuid::new_v4()).await;
        let pipeline = UploadPipeline::new(
            UploadConfig {
                temp_dir: dir.path().join("missing"),
                origin: cdn(),
            },
            store,
            Arc::new(MockObjects::new()),
            Arc::new(PrefixRemuxer),
            Arc::new(FixedInspector(AspectClassification::Landscape)),
        );

        let err = pipeline
            .publish(record, Some("video/mp4"), body(PAYLOAD))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::StorageUnavailable(_)));
    }

    #[tokio::test]
    async fn test_authorize() {
        let dir = TempDir::new().unwrap();
        let owner = Uuid::new_v4();
        let (store, record) = seeded_store(owner).await;
        let pipeline = pipeline(
            &dir,
            cdn(),
            store,
            MockObjects::new(),
            PrefixRemuxer,
            FixedInspector(AspectClassification::Landscape),
        );

        assert_eq!(pipeline.authorize(&owner, &record.id).await.unwrap(), record);

        let err = pipeline
            .authorize(&Uuid::new_v4(), &record.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));

        let err = pipeline.authorize(&owner, &VideoId::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_authorize_store_failure() {
        let dir = TempDir::new().unwrap();
        let mut videos = MockVideos::new();
        videos
            .expect_get_video()
            .returning(|_| Err(StoreError::backend("timeout")));

        let pipeline = pipeline(
            &dir,
            cdn(),
            Arc::new(videos),
            MockObjects::new(),
            PrefixRemuxer,
            FixedInspector(AspectClassification::Landscape),
        );

        let err = pipeline
            .authorize(&Uuid::new_v4(), &VideoId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::PersistenceFailed(_)));
    }

    #[test]
    fn test_accepted_media_type() {
        assert_eq!(accepted_media_type("video/mp4").unwrap(), "video/mp4");
        assert_eq!(accepted_media_type("Video/MP4").unwrap(), "video/mp4");
        assert_eq!(accepted_media_type("video/mp4;codecs=avc1").unwrap(), "video/mp4");
        assert!(accepted_media_type("video/mp4x").is_err());
        assert!(accepted_media_type(";").is_err());
    }
}
