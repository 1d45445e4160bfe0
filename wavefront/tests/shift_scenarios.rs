use glam::DVec2;

use wavefront::{
    propagate, Asterism, Field, PhotometricBand, Relay, ShiftConfig, ShiftElement, Source, Target,
};

fn disk(size: usize, centre: DVec2, radius: f64) -> Field {
    Field::from_fn(size, size, |x, y| {
        if DVec2::new(x as f64, y as f64).distance(centre) <= radius {
            1.0
        } else {
            0.0
        }
    })
}

fn centroid(field: &Field) -> DVec2 {
    field.centroid().expect("field has weight")
}

#[test]
fn shifted_disk_moves_by_two_pixels() {
    let flux_map = disk(32, DVec2::splat(15.5), 10.0);
    let start = centroid(&flux_map);
    let source = Source::new(PhotometricBand::I, 8.0).with_fields(flux_map, Field::zeros(32, 32));
    let mut target = Target::from(source);

    let shift = ShiftElement::new(vec![2.0], vec![0.0], vec![0.0]);
    shift.relay(&mut target).unwrap();

    let source = target.as_source().unwrap();
    let moved = centroid(source.flux_map()) - start;
    assert!((moved.x - 2.0).abs() < 1e-9, "moved {moved:?}");
    assert!(moved.y.abs() < 1e-9, "moved {moved:?}");

    assert_eq!(source.opd(), &Field::zeros(32, 32));
    assert_eq!(source.phase(), &Field::zeros(32, 32));

    let tags = source.optical_path().tags();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags.last(), Some(&"EM_shift"));
}

#[test]
fn group_sources_follow_their_own_parameters() {
    let centres = [
        DVec2::new(14.0, 15.0),
        DVec2::new(16.0, 14.0),
        DVec2::new(15.0, 17.0),
    ];
    let asterism: Asterism = centres
        .iter()
        .map(|&c| {
            Source::new(PhotometricBand::R, 9.0).with_fields(disk(32, c, 6.0), Field::zeros(32, 32))
        })
        .collect();
    let mut target = Target::from(asterism);

    let config = ShiftConfig {
        shift_x: vec![1.0, 0.0, -1.0],
        shift_y: vec![0.0, 1.0, 0.0],
        rot_angle: vec![0.0, 0.0, 0.0],
    };
    propagate(&mut target, &[&ShiftElement::from_config(config)]).unwrap();

    let expected = [
        DVec2::new(1.0, 0.0),
        DVec2::new(0.0, 1.0),
        DVec2::new(-1.0, 0.0),
    ];
    let original: Vec<_> = centres.iter().map(|&c| centroid(&disk(32, c, 6.0))).collect();
    for (idx, source) in target.sources().iter().enumerate() {
        let moved = centroid(source.flux_map()) - original[idx];
        assert!(
            (moved - expected[idx]).length() < 1e-9,
            "source {idx} moved {moved:?}, expected {:?}",
            expected[idx]
        );
        assert_eq!(source.optical_path().len(), 2);
    }
}

#[test]
fn mismatched_lists_leave_group_untouched() {
    let asterism: Asterism = (0..2)
        .map(|i| {
            let c = DVec2::new(12.0 + i as f64, 16.0);
            Source::new(PhotometricBand::J, 7.0).with_fields(disk(32, c, 5.0), Field::zeros(32, 32))
        })
        .collect();
    let mut target = Target::from(asterism);
    let before = target.clone();

    let shift = ShiftElement::new(vec![0.5; 3], vec![0.5; 3], vec![0.0; 3]);
    let err = shift.relay(&mut target).unwrap_err();
    assert!(matches!(
        err,
        wavefront::Error::CardinalityMismatch {
            expected: 2,
            actual: 3,
            ..
        }
    ));

    for (after, before) in target.sources().iter().zip(before.sources()) {
        assert_eq!(after.flux_map(), before.flux_map());
        assert_eq!(after.opd(), before.opd());
        assert_eq!(after.optical_path().len(), 1);
    }
}
