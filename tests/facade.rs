//! Facade re-exports and logging setup.

use std::sync::Arc;
use std::sync::Mutex;

use deformkit::{
    init_logging, AvoidSwitchSideLimitator, Contour, ContourShape, DeformerConfig, DeformerEvent,
    DeformerListener, DevicePoint, EditorEvent, FramePoint, Interaction, MultiFrameSnapshot,
    Quadrilateral, Side, Vector, BUILD_DATE, VERSION,
};
use tempfile::TempDir;

#[derive(Default)]
struct Redraws {
    count: Mutex<usize>,
}

impl DeformerListener for Redraws {
    fn on_geometry_updated(&self, _contour: &Contour) {
        *self.count.lock().unwrap() += 1;
    }
}

#[test]
fn test_version_and_build_date() {
    assert!(!VERSION.is_empty());
    assert_eq!(BUILD_DATE.len(), "2024-01-01".len());
}

#[test]
fn test_init_logging_only_once() {
    assert!(init_logging().is_ok());
    assert!(init_logging().is_err());
}

#[test]
fn test_config_file_drives_engine() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("deformer.toml");
    let mut config = DeformerConfig::touch();
    config.cursors.horizontal_resize = "col-resize".to_string();
    config.save(&path).expect("Failed to save config");

    let config = DeformerConfig::load(&path).expect("Failed to load config");
    let contour = Quadrilateral::from_rect(0.0, 0.0, 200.0, 200.0);
    let mut interaction = Interaction::with_default_controllers(contour.into(), config);
    interaction.attach().unwrap();
    interaction.add_limitator(Box::new(AvoidSwitchSideLimitator::new()));
    let redraws = Arc::new(Redraws::default());
    interaction.subscribe(redraws.clone());

    // Touch radius reaches a right edge handle 12 away.
    let grab = DevicePoint::new(212.0, 100.0);
    assert!(interaction.pointer_move(&[MultiFrameSnapshot::from_offset(grab)]));
    assert_eq!(interaction.cursor(), Some("col-resize"));

    interaction.pan_start(&EditorEvent::at(grab, Vector::zero())).unwrap();
    interaction
        .pan_end(&EditorEvent::at(
            DevicePoint::new(262.0, 100.0),
            Vector::new(50.0, 0.0),
        ))
        .unwrap();

    let right = interaction.contour().get_point_by_side(Side::Right).unwrap();
    assert!(right.approx_eq(&DevicePoint::new(250.0, 100.0), 1e-2));
    assert_eq!(*redraws.count.lock().unwrap(), 1);
    assert_eq!(
        DeformerEvent::GeometryUpdated.to_string(),
        "geometry updated"
    );
}
