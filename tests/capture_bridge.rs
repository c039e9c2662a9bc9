mod common;

use std::path::PathBuf;
use std::sync::Arc;

use camshot::capability::{CameraError, DestinationType, FileError, MediaType};
use camshot::ui::image::ImageState;
use common::harness;
use parking_lot::Mutex;

#[test]
fn take_photo_does_not_block_or_dispatch_synchronously() {
    let h = harness("en");
    let _pending = h.camera.expect_capture();

    h.bridge.take_photo();

    assert!(h.store.state().is_empty());
    assert_eq!(h.executor.pending(), 1);
}

#[test]
fn successful_capture_dispatches_resolved_url() {
    let h = harness("en");
    let capture = h.camera.expect_capture();

    h.bridge.take_photo();
    h.executor.run_until_stalled();
    capture.send(Ok("file://a.jpg".into())).unwrap();
    h.executor.run_until_stalled();

    let state = h.store.state();
    assert_eq!(state.url(), Some("file://a.jpg"));
    assert_eq!(state.error_message(), None);
    assert_eq!(h.executor.pending(), 0);
}

#[test]
fn capture_requests_picture_as_file_uri() {
    let h = harness("en");
    let capture = h.camera.expect_capture();

    h.bridge.take_photo();
    h.executor.run_until_stalled();
    capture.send(Ok("file://a.jpg".into())).unwrap();
    h.executor.run_until_stalled();

    let calls = h.camera.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].media_type, MediaType::Picture);
    assert_eq!(calls[0].destination_type, DestinationType::FileUri);
}

#[test]
fn capture_failure_dispatches_its_message() {
    let h = harness("en");
    let capture = h.camera.expect_capture();

    h.bridge.take_photo();
    capture
        .send(Err(CameraError::new("Permission denied")))
        .unwrap();
    h.executor.run_until_stalled();

    let state = h.store.state();
    assert_eq!(state.url(), None);
    assert_eq!(state.error_message(), Some("Permission denied"));
}

#[test]
fn capture_failure_without_message_uses_fallback() {
    let h = harness("en");
    let capture = h.camera.expect_capture();

    h.bridge.take_photo();
    capture.send(Err(CameraError::without_message())).unwrap();
    h.executor.run_until_stalled();

    assert_eq!(h.store.state().error_message(), Some("No data"));
}

#[test]
fn fallback_message_is_localized() {
    let h = harness("pl");
    let capture = h.camera.expect_capture();

    h.bridge.take_photo();
    capture.send(Err(CameraError::without_message())).unwrap();
    h.executor.run_until_stalled();

    assert_eq!(h.store.state().error_message(), Some("Brak danych"));
}

#[test]
fn resolution_failure_dispatches_error() {
    let h = harness("en");
    h.files.fail_next(FileError::NotFound {
        path: PathBuf::from("/gone.jpg"),
    });
    let capture = h.camera.expect_capture();

    h.bridge.take_photo();
    capture.send(Ok("file:///gone.jpg".into())).unwrap();
    h.executor.run_until_stalled();

    let state = h.store.state();
    assert_eq!(state.url(), None);
    assert_eq!(state.error_message(), Some("File not found: /gone.jpg"));
}

#[test]
fn resolution_failure_without_message_uses_fallback() {
    let h = harness("en");
    h.files.fail_next(FileError::Unknown);
    let capture = h.camera.expect_capture();

    h.bridge.take_photo();
    capture.send(Ok("file:///a.jpg".into())).unwrap();
    h.executor.run_until_stalled();

    assert_eq!(h.store.state().error_message(), Some("No data"));
}

#[test]
fn out_of_band_result_converges_on_same_dispatch() {
    let h = harness("en");
    assert_eq!(h.camera.callback_count(), 1);

    h.camera.fire(Ok("file://restored.jpg".into()));
    h.executor.run_until_stalled();
    assert_eq!(h.store.state().url(), Some("file://restored.jpg"));

    h.camera.fire(Err(CameraError::without_message()));
    assert_eq!(h.store.state().error_message(), Some("No data"));
}

#[test]
fn out_of_band_result_after_bridge_dropped_is_ignored() {
    let h = harness("en");
    let camera = Arc::clone(&h.camera);
    let store = h.store.clone();
    drop(h.bridge);

    camera.fire(Err(CameraError::new("late")));
    assert!(store.state().is_empty());
}

#[test]
fn each_settled_capture_notifies_exactly_once() {
    let h = harness("en");
    let seen: Arc<Mutex<Vec<ImageState>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let _sub = h.store.subscribe(move |state| sink.lock().push(state.clone()));

    let first = h.camera.expect_capture();
    let second = h.camera.expect_capture();
    h.bridge.take_photo();
    h.bridge.take_photo();
    h.executor.run_until_stalled();
    assert!(seen.lock().is_empty());

    first.send(Ok("file://1.jpg".into())).unwrap();
    second.send(Err(CameraError::new("busy"))).unwrap();
    h.executor.run_until_stalled();

    assert_eq!(seen.lock().len(), 2);
}

#[test]
fn overlapping_captures_last_dispatch_wins() {
    let h = harness("en");
    let first = h.camera.expect_capture();
    let second = h.camera.expect_capture();

    h.bridge.take_photo();
    h.bridge.take_photo();
    h.executor.run_until_stalled();

    // Second capture settles first.
    second.send(Ok("file://second.jpg".into())).unwrap();
    h.executor.run_until_stalled();
    assert_eq!(h.store.state().url(), Some("file://second.jpg"));

    // The first capture's dispatch lands last and wins.
    first.send(Ok("file://first.jpg".into())).unwrap();
    h.executor.run_until_stalled();
    assert_eq!(h.store.state().url(), Some("file://first.jpg"));
}
