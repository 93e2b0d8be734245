use std::fs;

use atlas_slicer::model::{ReferenceBox, Transform};
use atlas_slicer::parser::load_from_json;

#[test]
fn parses_catalog_fixture() {
    let json = fs::read_to_string("tests/map_icons.json").unwrap();
    let catalog = load_from_json(&json, "map_icons").expect("valid json");

    assert_eq!(catalog.name, "map-icons-subset");
    assert_eq!(catalog.atlases.len(), 2);
    assert_eq!(catalog.target_count(), 3);

    let icons = &catalog.atlases[0];
    assert_eq!(icons.path, "assets/minecraft/textures/map/map_icons.png");
    assert_eq!(icons.targets[1].region, ReferenceBox::new(8, 0, 8, 8, 128, 128));

    let sweep = &catalog.atlases[1].targets[0];
    assert_eq!(sweep.transforms, vec![Transform::PadToSquare]);
    assert!(catalog.validate().is_ok());
}
