//! Full loop over HTTP: serve a playlist, load it, drive a recording surface.

use vitrine::{
    play::mock::{FallbackCall, RecordingFallback, RecordingSurface},
    prelude::*,
};
use vitrine_test_utils::{StatusCode, TestHttpServer, fixtures};

const PLAYLIST_PATH: &str = "/assets/videos/playlist.json";

async fn load_from(server: &TestHttpServer) -> Result<Playlist, PlaylistError> {
    let config = PlaylistConfig::default();
    let url = config.resolve_url(server.base_url().as_str())?;
    let net = HttpClient::new(config.net.clone())?;
    PlaylistLoader::new(net, url, &config.asset_dir).load().await
}

fn controller() -> (
    PlaylistController<RecordingSurface, RecordingFallback>,
    RecordingSurface,
    RecordingFallback,
) {
    let surface = RecordingSurface::new();
    let fallback = RecordingFallback::new();
    let controller = PlaylistController::new(
        surface.clone(),
        Some(fallback.clone()),
        FallbackMessages::default(),
    );
    (controller, surface, fallback)
}

#[tokio::test]
async fn served_playlist_loops_through_every_source() {
    let server = TestHttpServer::json(PLAYLIST_PATH, fixtures::MIXED_ARRAY).await;
    let (mut controller, surface, fallback) = controller();

    let first = controller
        .apply_load(load_from(&server).await)
        .expect("track 0 requested");
    first.settle().await.unwrap();

    for _ in 0..4 {
        let attempt = controller
            .handle_event(MediaEvent::Ended)
            .expect("advanced");
        attempt.settle().await.unwrap();
    }

    let played: Vec<String> = surface.assigned().into_iter().map(|s| s.src).collect();
    assert_eq!(
        played,
        [
            "assets/videos/intro.m4v",
            "https://cdn.example.com/loop.webm",
            "/media/promo.ogv",
            "assets/videos/clip.mov",
            "assets/videos/intro.m4v",
        ]
    );
    assert_eq!(fallback.calls(), vec![FallbackCall::Hide]);
    assert_eq!(
        server.requests()[0].header("cache-control"),
        Some("no-cache")
    );
}

#[tokio::test]
async fn missing_playlist_shows_load_failure() {
    let server =
        TestHttpServer::with_status(PLAYLIST_PATH, StatusCode::NOT_FOUND, "not found").await;
    let (mut controller, surface, fallback) = controller();

    let attempt = controller.apply_load(load_from(&server).await);

    assert!(attempt.is_none());
    assert!(surface.assigned().is_empty());
    assert_eq!(
        fallback.calls(),
        vec![FallbackCall::Show(FallbackMessages::default().load_failed)]
    );
}
