use base::Vec2;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use video::{Conversion, RawFrame};

fn counted_frame(sequence: u64, releases: &Arc<AtomicUsize>) -> RawFrame {
    let releases = Arc::clone(releases);
    RawFrame::from_yu12(sequence, Vec2::new(4, 4), &[128; 24])
        .unwrap()
        .with_release(move || {
            releases.fetch_add(1, Ordering::SeqCst);
        })
}

#[test]
fn test_from_yu12_splits_planes() {
    let mut data = vec![1u8; 16];
    data.extend_from_slice(&[2; 4]);
    data.extend_from_slice(&[3; 4]);

    let frame = RawFrame::from_yu12(7, Vec2::new(4, 4), &data).unwrap();

    assert_eq!(frame.sequence, 7);
    assert_eq!((frame.width(), frame.height()), (4, 4));
    assert_eq!(frame.y.data, vec![1; 16]);
    assert_eq!(frame.u.data, vec![2; 4]);
    assert_eq!(frame.v.data, vec![3; 4]);
    assert_eq!(frame.u.row_stride, 2);
}

#[test]
fn test_from_yu12_rejects_wrong_length() {
    assert!(RawFrame::from_yu12(0, Vec2::new(4, 4), &[0; 23]).is_err());
}

#[test]
fn test_release_runs_once_on_drop() {
    let releases = Arc::new(AtomicUsize::new(0));
    let frame = counted_frame(0, &releases);
    assert_eq!(releases.load(Ordering::SeqCst), 0);

    drop(frame);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn test_release_after_failed_conversion() {
    let releases = Arc::new(AtomicUsize::new(0));
    let mut frame = counted_frame(0, &releases);
    frame.y.data.clear();

    let handle = |frame: RawFrame| video::to_rgb(&frame, Conversion::Direct).ok();
    assert!(handle(frame).is_none());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn test_release_during_unwind() {
    let releases = Arc::new(AtomicUsize::new(0));
    let frame = counted_frame(0, &releases);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let _held = frame;
        panic!("conversion blew up");
    }));

    assert!(result.is_err());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn test_debug_omits_buffers() {
    let frame = RawFrame::from_yu12(3, Vec2::new(2, 2), &[0; 6]).unwrap();
    let debug = format!("{:?}", frame);
    assert!(debug.contains("sequence: 3"));
    assert!(debug.contains("release: false"));
}
