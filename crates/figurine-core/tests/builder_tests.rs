// Host-side tests for the figurine builder: colors, poses, accessories.

use figurine_core::constants::*;
use figurine_core::*;
use std::f32::consts::PI;

fn opts(pose: Pose, scheme: ColorScheme, accessories: &[AccessoryKind]) -> OptionSet {
    OptionSet::new(
        Gender::Neutral,
        ClothingStyle::Casual,
        pose,
        scheme,
        accessories.iter().copied(),
    )
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn color_scheme_maps_to_fixed_body_colors() {
    let expected = [
        (ColorScheme::Vibrant, 0xff6b6b),
        (ColorScheme::Professional, 0x667eea),
        (ColorScheme::Pastel, 0xffb6c1),
        (ColorScheme::Dark, 0x2c3e50),
    ];
    for (scheme, color) in expected {
        assert_eq!(body_color(scheme), color);
        let mut m = Mannequin::default();
        apply_options(&mut m, &opts(Pose::Standing, scheme, &[]));
        assert_eq!(m.body().material.color, color);
    }
}

#[test]
fn color_scheme_changes_body_only() {
    let default = Mannequin::default();
    let mut m = Mannequin::default();
    apply_options(&mut m, &opts(Pose::Standing, ColorScheme::Vibrant, &[]));
    for part in [
        BodyPart::Head,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ] {
        assert_eq!(m.part(part), default.part(part), "{:?} changed", part);
    }
}

#[test]
fn unknown_color_scheme_falls_back_to_professional() {
    let set = OptionSet::from_form(None, None, None, Some("neon"), []);
    let mut m = Mannequin::default();
    apply_options(&mut m, &set);
    assert_eq!(m.body().material.color, PROFESSIONAL_BODY_COLOR);

    let absent = OptionSet::from_form(None, None, None, None, []);
    let mut m = Mannequin::default();
    apply_options(&mut m, &absent);
    assert_eq!(m.body().material.color, PROFESSIONAL_BODY_COLOR);
}

#[test]
fn sitting_compresses_body_and_lowers_mannequin() {
    let mut m = Mannequin::default();
    apply_options(&mut m, &opts(Pose::Sitting, ColorScheme::Professional, &[]));
    assert!(approx(m.body().transform.scale.y, 0.7));
    assert!(m.transform.position.y < 0.0);
    assert!(approx(m.transform.position.y, SITTING_OFFSET_Y));
    assert!(approx(m.tilt(), 0.0));
}

#[test]
fn dynamic_tilts_without_scaling() {
    let mut m = Mannequin::default();
    apply_options(&mut m, &opts(Pose::Dynamic, ColorScheme::Professional, &[]));
    assert!(approx(m.body().transform.scale.y, 1.0));
    assert!(approx(m.transform.position.y, 0.0));
    assert!(approx(m.tilt(), PI / 12.0));
}

#[test]
fn other_poses_reset_to_upright() {
    for pose in [Pose::Standing, Pose::Working] {
        let mut m = Mannequin::default();
        apply_options(&mut m, &opts(Pose::Sitting, ColorScheme::Dark, &[]));
        apply_options(&mut m, &opts(Pose::Dynamic, ColorScheme::Dark, &[]));
        apply_options(&mut m, &opts(pose, ColorScheme::Dark, &[]));
        assert!(approx(m.body().transform.scale.y, 1.0));
        assert!(approx(m.transform.position.y, 0.0));
        assert!(approx(m.tilt(), 0.0));
    }

    let unknown = OptionSet::from_form(None, None, Some("flying"), None, []);
    let mut m = Mannequin::default();
    apply_options(&mut m, &opts(Pose::Sitting, ColorScheme::Dark, &[]));
    apply_options(&mut m, &unknown);
    assert!(approx(m.body().transform.scale.y, 1.0));
    assert!(approx(m.transform.position.y, 0.0));
}

#[test]
fn pose_is_not_additive() {
    let mut m = Mannequin::default();
    apply_options(&mut m, &opts(Pose::Sitting, ColorScheme::Dark, &[]));
    apply_options(&mut m, &opts(Pose::Dynamic, ColorScheme::Dark, &[]));
    assert!(approx(m.body().transform.scale.y, 1.0));
    assert!(approx(m.transform.position.y, 0.0));
    assert!(approx(m.tilt(), DYNAMIC_TILT));
}

#[test]
fn applying_twice_equals_applying_once() {
    use AccessoryKind::*;
    let set = opts(Pose::Sitting, ColorScheme::Pastel, &[Glasses, Cap, Beard]);
    let mut once = Mannequin::default();
    apply_options(&mut once, &set);
    let mut twice = Mannequin::default();
    apply_options(&mut twice, &set);
    apply_options(&mut twice, &set);
    assert_eq!(once, twice);
    assert_eq!(twice.accessories().len(), 3);
}

#[test]
fn reconciliation_removes_previous_accessories() {
    use AccessoryKind::*;
    let mut m = Mannequin::default();
    apply_options(&mut m, &opts(Pose::Standing, ColorScheme::Professional, &[Glasses, Cap]));
    assert_eq!(m.accessories().len(), 2);

    apply_options(&mut m, &opts(Pose::Standing, ColorScheme::Professional, &[Coffee]));
    assert_eq!(m.accessories().len(), 1);
    assert_eq!(m.accessories()[0].kind, Coffee);
    assert!(m.accessory(Glasses).is_none());
    assert!(m.accessory(Cap).is_none());
}

#[test]
fn accessories_follow_supplied_order() {
    use AccessoryKind::*;
    let mut m = Mannequin::default();
    apply_options(
        &mut m,
        &opts(Pose::Standing, ColorScheme::Professional, &[Beard, Laptop, Glasses]),
    );
    let kinds: Vec<_> = m.accessories().iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![Beard, Laptop, Glasses]);
}

#[test]
fn attach_replaces_same_kind() {
    let mut m = Mannequin::default();
    m.attach_accessory(build_accessory(AccessoryKind::Cap));
    m.attach_accessory(build_accessory(AccessoryKind::Cap));
    assert_eq!(m.accessories().len(), 1);
}

#[test]
fn unknown_accessories_are_ignored() {
    let set = OptionSet::from_form(None, None, None, None, ["cape", "coffee", "monocle"]);
    let mut m = Mannequin::default();
    apply_options(&mut m, &set);
    assert_eq!(m.accessories().len(), 1);
    assert_eq!(m.accessories()[0].kind, AccessoryKind::Coffee);
}

#[test]
fn accessory_geometry_is_placed_as_documented() {
    let glasses = build_accessory(AccessoryKind::Glasses);
    assert_eq!(glasses.meshes.len(), 3);
    let rings: Vec<_> = glasses
        .meshes
        .iter()
        .filter(|n| matches!(n.shape, Shape::Torus { .. }))
        .collect();
    assert_eq!(rings.len(), 2);
    assert!(approx(rings[0].transform.position.x, -0.15));
    assert!(approx(rings[1].transform.position.x, 0.15));
    for mesh in &glasses.meshes {
        assert!(approx(mesh.transform.position.y, GLASSES_Y));
        assert!(approx(mesh.transform.position.z, GLASSES_Z));
    }

    let cap = build_accessory(AccessoryKind::Cap);
    assert!(matches!(cap.meshes[0].shape, Shape::Cylinder { radius_top, .. } if radius_top == 0.0));
    assert!(cap.meshes[0].transform.position.y > HEAD_Y);

    let beard = build_accessory(AccessoryKind::Beard);
    assert_eq!(
        beard.meshes[0].transform.scale.to_array(),
        [0.6, 0.4, 0.3]
    );

    let laptop = build_accessory(AccessoryKind::Laptop);
    let coffee = build_accessory(AccessoryKind::Coffee);
    // one near each hand
    assert!(laptop.meshes[0].transform.position.x < 0.0);
    assert!(coffee.meshes[0].transform.position.x > 0.0);
}

#[test]
fn female_tech_standing_dark_with_glasses_and_laptop() {
    let set = OptionSet::from_form(
        Some("female"),
        Some("tech"),
        Some("standing"),
        Some("dark"),
        ["glasses", "laptop"],
    );
    assert_eq!(set.gender, Gender::Female);
    assert_eq!(set.clothing, ClothingStyle::Tech);

    let mut m = Mannequin::default();
    apply_options(&mut m, &set);

    assert_eq!(m.body().material.color, DARK_BODY_COLOR);
    assert!(approx(m.body().transform.scale.y, 1.0));
    assert!(approx(m.transform.position.y, 0.0));
    assert!(approx(m.tilt(), 0.0));

    assert_eq!(m.accessories().len(), 2);
    let glasses = m.accessory(AccessoryKind::Glasses).expect("glasses attached");
    assert_eq!(glasses.meshes.len(), 3);
    let laptop = m.accessory(AccessoryKind::Laptop).expect("laptop attached");
    assert_eq!(laptop.meshes.len(), 1);
    assert!(matches!(laptop.meshes[0].shape, Shape::Cuboid { .. }));
    assert_eq!(
        laptop.meshes[0].transform.position.to_array(),
        LAPTOP_POSITION
    );
    assert!(approx(laptop.meshes[0].transform.rotation.z, PI / 6.0));
}
